//! Baseline and scaling measurement phases
//!
//! The baseline phase runs first and produces one mean sequential duration
//! per problem size. The scaling phase consumes that table, never mutating
//! it, and produces one speedup curve per size. Orchestration is strictly
//! sequential: one external invocation at a time, since overlapping runs
//! would corrupt wall-clock comparability.

use crate::config::{ProblemSize, SpeedupConfig};
use crate::error::{BenchError, Result};
use crate::metrics::{mean, round2, SpeedupCurve};
use crate::runner::GridSearchRunner;
use serde::Serialize;
use std::collections::HashMap;

/// Mean sequential duration (seconds) per problem size name.
///
/// Built once by [`measure_baselines`] and read-only afterwards.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BaselineTable(HashMap<String, f64>);

impl BaselineTable {
    pub fn get(&self, size_name: &str) -> Option<f64> {
        self.0.get(size_name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Take `repetitions` fresh wall-clock samples for one cell.
fn sample_cell(
    config: &SpeedupConfig,
    runner: &mut dyn GridSearchRunner,
    size: &ProblemSize,
    workers: Option<usize>,
) -> Vec<f64> {
    (0..config.repetitions)
        .map(|_| runner.measure(size, workers).as_secs_f64())
        .collect()
}

/// Baseline Timer: measure the sequential configuration for every problem
/// size and average the samples.
pub fn measure_baselines(
    config: &SpeedupConfig,
    runner: &mut dyn GridSearchRunner,
) -> Result<BaselineTable> {
    config.validate()?;
    log::info!("==== sequential ====");

    let mut table = HashMap::with_capacity(config.sizes.len());
    for size in &config.sizes {
        let samples = sample_cell(config, runner, size, None);
        let avg = mean(&samples);
        log::info!("average sequential time on {}: {}", size.name, avg);
        table.insert(size.name.clone(), avg);
    }
    Ok(BaselineTable(table))
}

/// Scaling Timer: measure every (size, worker count) cell, ascending by
/// worker count, and convert each cell mean into a speedup ratio against
/// the baseline table.
pub fn measure_speedups(
    config: &SpeedupConfig,
    baselines: &BaselineTable,
    runner: &mut dyn GridSearchRunner,
) -> Result<Vec<SpeedupCurve>> {
    config.validate()?;
    log::info!("==== parallel ====");

    let mut curves = Vec::with_capacity(config.sizes.len());
    for size in &config.sizes {
        let baseline = baselines.get(&size.name).ok_or_else(|| {
            BenchError::Validation(format!("no baseline measured for size '{}'", size.name))
        })?;

        let mut curve = SpeedupCurve::new(size.clone());
        for &workers in &config.worker_counts {
            let samples = sample_cell(config, runner, size, Some(workers));
            let avg = mean(&samples);
            log::info!(
                "average parallel time on {} with {} workers: {}",
                size.name,
                workers,
                avg
            );
            curve.push(workers, round2(baseline / avg));
        }
        curves.push(curve);
    }
    Ok(curves)
}
