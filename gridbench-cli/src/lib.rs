//! Gridbench CLI library
//!
//! Command-line interface for the grid-search speedup harness and the
//! SVM cross-validation scorer.

pub mod commands;
pub mod error;

pub use error::{CliError, CliResult};
