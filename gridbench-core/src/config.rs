//! Harness configuration
//!
//! Centralizes the enumerations the harness scans so they are explicit
//! inputs to the entry points rather than module-level state. Tests inject
//! small enumerations; the CLI builds a config from flags.

use crate::error::{BenchError, Result};
use serde::Serialize;

/// Repetitions per (size, worker count) cell; every average is the mean of
/// exactly this many independent invocations.
pub const DEFAULT_REPETITIONS: usize = 3;

/// Worker counts scanned by the scaling phase, ascending.
pub const DEFAULT_WORKER_COUNTS: &[usize] = &[2, 4, 6, 8, 12];

/// Default problem sizes with their parameter-combination counts.
pub const DEFAULT_SIZES: &[(&str, u32)] = &[("small", 12), ("medium", 24), ("large", 36)];

/// A named parameter-combination count fed to the external grid search.
///
/// `combinations` is display-only: it appears in curve labels but never
/// influences measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProblemSize {
    pub name: String,
    pub combinations: u32,
}

impl ProblemSize {
    pub fn new(name: impl Into<String>, combinations: u32) -> Self {
        Self {
            name: name.into(),
            combinations,
        }
    }

    /// Label used for the chart legend, e.g. `small(12)`
    pub fn label(&self) -> String {
        format!("{}({})", self.name, self.combinations)
    }
}

/// Configuration for one full harness run
#[derive(Debug, Clone)]
pub struct SpeedupConfig {
    /// Problem sizes to benchmark, in presentation order
    pub sizes: Vec<ProblemSize>,
    /// Worker counts to scan, ascending
    pub worker_counts: Vec<usize>,
    /// Invocations per cell
    pub repetitions: usize,
}

impl Default for SpeedupConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES
                .iter()
                .map(|(name, count)| ProblemSize::new(*name, *count))
                .collect(),
            worker_counts: DEFAULT_WORKER_COUNTS.to_vec(),
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

impl SpeedupConfig {
    /// Check the enumerations are usable before any process is spawned
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::Config("no problem sizes configured".into()));
        }
        if self.worker_counts.is_empty() {
            return Err(BenchError::Config("no worker counts configured".into()));
        }
        if self.worker_counts.iter().any(|&w| w == 0) {
            return Err(BenchError::Config("worker count must be positive".into()));
        }
        if self.worker_counts.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(BenchError::Config(
                "worker counts must be strictly ascending".into(),
            ));
        }
        if self.repetitions == 0 {
            return Err(BenchError::Config("repetitions must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_constants() {
        let config = SpeedupConfig::default();
        assert_eq!(config.repetitions, 3);
        assert_eq!(config.worker_counts, vec![2, 4, 6, 8, 12]);
        assert_eq!(config.sizes.len(), 3);
        assert_eq!(config.sizes[0].name, "small");
        assert_eq!(config.sizes[2].combinations, 36);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(SpeedupConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_sizes_rejected() {
        let config = SpeedupConfig {
            sizes: vec![],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_worker_count_rejected() {
        let config = SpeedupConfig {
            worker_counts: vec![0, 2],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unordered_worker_counts_rejected() {
        let config = SpeedupConfig {
            worker_counts: vec![4, 2, 8],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_repetitions_rejected() {
        let config = SpeedupConfig {
            repetitions: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_problem_size_label() {
        let size = ProblemSize::new("medium", 24);
        assert_eq!(size.label(), "medium(24)");
    }
}
