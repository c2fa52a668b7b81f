//! Benchmark harness for an external parallel grid-search program
//!
//! This crate measures the wall-clock speedup of an external grid-search
//! program across worker counts and parameter-space sizes, renders the
//! resulting speedup curves to a chart, and separately scores a
//! support-vector classifier with k-fold cross-validation. The grid search
//! itself and the SVM training are external collaborators; nothing here
//! implements either.

pub mod config;
pub mod error;
pub mod harness;
pub mod metrics;
pub mod report;
pub mod runner;
pub mod svm;

pub use config::{ProblemSize, SpeedupConfig};
pub use error::{BenchError, Result};
pub use harness::{measure_baselines, measure_speedups, BaselineTable};
pub use metrics::{SpeedupCurve, SpeedupPoint};
pub use runner::{GridSearchRunner, ProcessRunner};
