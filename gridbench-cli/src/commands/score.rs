//! Score command implementation

use anyhow::{Context, Result};
use clap::Args;
use gridbench_core::svm::{self, Dataset, SvmKernel};
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the score command
#[derive(Debug, Args)]
pub struct ScoreArgs {
    /// Number of cross-validation folds
    #[arg(value_name = "FOLDS", value_parser = clap::value_parser!(u32).range(2..))]
    pub folds: u32,

    /// Kernel function for the support-vector classifier
    #[arg(value_name = "KERNEL", value_enum)]
    pub kernel: Kernel,

    /// Regularization strength C
    #[arg(value_name = "C")]
    pub c: f64,

    /// Kernel coefficient gamma
    #[arg(value_name = "GAMMA")]
    pub gamma: f64,

    /// Dataset CSV: class label in column 0, features in the rest
    #[arg(long, value_name = "FILE", default_value = "data/mnist_resampled.csv")]
    pub data: PathBuf,
}

/// Kernels accepted by the underlying classifier
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Kernel {
    Linear,
    Rbf,
    Poly,
    Sigmoid,
}

impl From<Kernel> for SvmKernel {
    fn from(kernel: Kernel) -> Self {
        match kernel {
            Kernel::Linear => SvmKernel::Linear,
            Kernel::Rbf => SvmKernel::Rbf,
            Kernel::Poly => SvmKernel::Poly,
            Kernel::Sigmoid => SvmKernel::Sigmoid,
        }
    }
}

impl ScoreArgs {
    /// Execute the score command: load, standardize, cross-validate, and
    /// print the mean held-out accuracy to stdout without a trailing newline.
    pub fn execute(&self) -> Result<()> {
        let dataset = Dataset::load(&self.data)
            .with_context(|| format!("failed to load dataset '{}'", self.data.display()))?;

        let accuracy = svm::score_svm(
            &dataset,
            self.folds as usize,
            self.kernel.into(),
            self.c,
            self.gamma,
        )
        .context("cross-validation failed")?;

        print!("{accuracy}");
        std::io::stdout().flush().context("failed to flush stdout")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_mapping() {
        assert_eq!(SvmKernel::from(Kernel::Linear), SvmKernel::Linear);
        assert_eq!(SvmKernel::from(Kernel::Rbf), SvmKernel::Rbf);
        assert_eq!(SvmKernel::from(Kernel::Poly), SvmKernel::Poly);
        assert_eq!(SvmKernel::from(Kernel::Sigmoid), SvmKernel::Sigmoid);
    }
}
