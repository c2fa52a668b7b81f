//! Speedup command implementation

use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use gridbench_core::{
    measure_baselines, measure_speedups, report, ProblemSize, ProcessRunner, SpeedupConfig,
};
use std::path::PathBuf;

/// Arguments for the speedup command
#[derive(Debug, Args)]
pub struct SpeedupArgs {
    /// External grid-search command; split on whitespace, so interpreter
    /// invocations like "go run ./gridsearch.go" work
    #[arg(short, long, value_name = "CMD", required = true)]
    pub program: String,

    /// Fixed argument passed to every invocation after the size name
    #[arg(long, value_name = "VALUE", default_value = "2")]
    pub fixed_arg: String,

    /// Problem sizes as name:count pairs
    #[arg(
        long,
        value_name = "NAME:COUNT",
        value_delimiter = ',',
        value_parser = parse_size,
        default_value = "small:12,medium:24,large:36"
    )]
    pub sizes: Vec<ProblemSize>,

    /// Worker counts to scan, ascending
    #[arg(
        long,
        value_name = "N",
        value_delimiter = ',',
        default_values_t = [2usize, 4, 6, 8, 12]
    )]
    pub workers: Vec<usize>,

    /// Invocations averaged per measurement cell
    #[arg(short, long, default_value_t = 3)]
    pub repetitions: usize,

    /// Output path for the speedup chart (directory must exist)
    #[arg(short, long, value_name = "FILE", default_value = "graphs/parallel-speedup.png")]
    pub output: PathBuf,

    /// Also write a JSON report to this path
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse a `name:count` problem-size specification
fn parse_size(value: &str) -> Result<ProblemSize, String> {
    let (name, count) = value
        .split_once(':')
        .ok_or_else(|| format!("expected NAME:COUNT, got '{value}'"))?;
    if name.is_empty() {
        return Err(format!("empty size name in '{value}'"));
    }
    let count: u32 = count
        .parse()
        .map_err(|_| format!("invalid combination count in '{value}'"))?;
    Ok(ProblemSize::new(name, count))
}

impl SpeedupArgs {
    /// Execute the speedup command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        if self.program.split_whitespace().next().is_none() {
            return Err(CliError::InvalidArgument(
                "program command must not be empty".to_string(),
            )
            .into());
        }

        let config = SpeedupConfig {
            sizes: self.sizes.clone(),
            worker_counts: self.workers.clone(),
            repetitions: self.repetitions,
        };
        let mut runner = ProcessRunner::new(&self.program, &self.fixed_arg);

        let baselines = measure_baselines(&config, &mut runner)
            .context("baseline measurement failed")?;
        let curves = measure_speedups(&config, &baselines, &mut runner)
            .context("scaling measurement failed")?;

        if let Some(json_path) = &self.json {
            report::write_json_report(&baselines, &curves, json_path)
                .context("failed to write JSON report")?;
            log::info!("JSON report written to {}", json_path.display());
        }

        report::render_speedup_chart(&curves, &self.output)
            .context("failed to write speedup chart")?;
        log::info!("speedup chart written to {}", self.output.display());
        Ok(())
    }

    /// Initialize logging based on verbosity level; harness progress is
    /// emitted at info level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        let default = if self.quiet { "error" } else { log_level };
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(default),
        )
        .try_init();
    }
}
