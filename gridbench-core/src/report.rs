//! Speedup chart rendering and machine-readable report output
//!
//! The chart is the run's primary artifact: one line per problem size,
//! worker count on the x-axis, speedup ratio on the y-axis. The output
//! directory must already exist; creating it is an operator-setup
//! precondition, not something the harness recovers from.

use crate::error::{BenchError, Result};
use crate::harness::BaselineTable;
use crate::metrics::SpeedupCurve;
use plotters::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

const CHART_SIZE: (u32, u32) = (960, 720);

/// Render the speedup curves to a PNG at `path`, overwriting any previous
/// artifact there.
pub fn render_speedup_chart(curves: &[SpeedupCurve], path: &Path) -> Result<()> {
    if curves.is_empty() {
        return Err(BenchError::Validation("no speedup curves to plot".into()));
    }

    let x_max = curves
        .iter()
        .flat_map(|c| c.points.iter())
        .map(|p| p.workers)
        .max()
        .unwrap_or(1) as f64;
    let y_max = curves
        .iter()
        .flat_map(|c| c.points.iter())
        .map(|p| p.ratio)
        .fold(1.0_f64, f64::max);

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| BenchError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("GridSearch Speedup Graph", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..x_max * 1.05, 0.0..y_max * 1.1)
        .map_err(|e| BenchError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc("Number of Threads")
        .y_desc("Speedup")
        .draw()
        .map_err(|e| BenchError::Plot(e.to_string()))?;

    for (idx, curve) in curves.iter().enumerate() {
        let color = Palette99::pick(idx).mix(0.9);
        chart
            .draw_series(LineSeries::new(
                curve
                    .points
                    .iter()
                    .map(|p| (p.workers as f64, p.ratio)),
                color.stroke_width(2),
            ))
            .map_err(|e| BenchError::Plot(e.to_string()))?
            .label(curve.size.label())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(|e| BenchError::Plot(e.to_string()))?;

    root.present().map_err(|e| BenchError::Plot(e.to_string()))?;
    Ok(())
}

#[derive(Serialize)]
struct SpeedupReport<'a> {
    generated: String,
    baselines: &'a BaselineTable,
    curves: &'a [SpeedupCurve],
}

/// Write the baselines and curves as a timestamped JSON report.
pub fn write_json_report(
    baselines: &BaselineTable,
    curves: &[SpeedupCurve],
    path: &Path,
) -> Result<()> {
    let report = SpeedupReport {
        generated: chrono::Local::now().to_rfc3339(),
        baselines,
        curves,
    };
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| BenchError::Validation(format!("failed to serialize report: {e}")))?;
    fs::write(path, json).map_err(|e| BenchError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProblemSize;

    fn sample_curve() -> SpeedupCurve {
        let mut curve = SpeedupCurve::new(ProblemSize::new("small", 12));
        curve.push(2, 1.9);
        curve.push(4, 3.6);
        curve
    }

    #[test]
    fn test_empty_curves_rejected() {
        let result = render_speedup_chart(&[], Path::new("unused.png"));
        assert!(matches!(result, Err(BenchError::Validation(_))));
    }

    #[test]
    fn test_json_report_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("speedup.json");
        let curves = vec![sample_curve()];
        write_json_report(&BaselineTable::default(), &curves, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(value["generated"].is_string());
        assert_eq!(value["curves"][0]["size"]["name"], "small");
        assert_eq!(value["curves"][0]["points"][1]["ratio"], 3.6);
    }

    #[test]
    fn test_json_report_missing_directory_fails() {
        let result = write_json_report(
            &BaselineTable::default(),
            &[sample_curve()],
            Path::new("no-such-dir/speedup.json"),
        );
        assert!(matches!(result, Err(BenchError::Io { .. })));
    }
}
