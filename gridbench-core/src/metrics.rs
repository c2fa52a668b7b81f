//! Aggregation of timing samples into speedup curves

use crate::config::ProblemSize;
use serde::Serialize;

/// Arithmetic mean of a sample set. Returns 0.0 for an empty slice, which
/// the harness never produces (repetitions are validated positive).
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Round to two decimal places, the precision the speedup chart reports.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One point on a speedup curve
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedupPoint {
    /// Worker count requested from the external program
    pub workers: usize,
    /// Sequential baseline divided by the mean parallel duration
    pub ratio: f64,
}

/// Speedup ratios for one problem size, ordered by worker count ascending
/// to match the chart's x-axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeedupCurve {
    pub size: ProblemSize,
    pub points: Vec<SpeedupPoint>,
}

impl SpeedupCurve {
    pub fn new(size: ProblemSize) -> Self {
        Self {
            size,
            points: Vec::new(),
        }
    }

    pub fn push(&mut self, workers: usize, ratio: f64) {
        self.points.push(SpeedupPoint { workers, ratio });
    }
}
