//! CLI command implementations

use clap::Subcommand;

pub mod score;
pub mod speedup;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Benchmark the external grid search and plot its parallel speedup
    Speedup(speedup::SpeedupArgs),

    /// Score an SVM classifier with k-fold cross-validation
    Score(score::ScoreArgs),
}
