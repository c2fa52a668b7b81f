//! Black-box invocation of the external grid-search program
//!
//! The harness only ever observes the external computation through one
//! capability: launch it with given parameters and measure wall-clock time
//! from process start to process exit. That capability is a trait so tests
//! can substitute a deterministic stub without spawning processes.

use crate::config::ProblemSize;
use std::process::Command;
use std::time::{Duration, Instant};

/// Capability to run the external grid search once and time it.
pub trait GridSearchRunner {
    /// Invoke the external computation for `size` with the given worker
    /// count (`None` selects the sequential configuration) and return the
    /// wall-clock duration of the whole invocation.
    fn measure(&mut self, size: &ProblemSize, workers: Option<usize>) -> Duration;
}

/// Runs the real external program as a subprocess.
///
/// Arguments are positional: `<size_name> <fixed_arg> [<worker_count>]`.
/// The worker argument is omitted for the sequential baseline, matching the
/// external program's own mode selection. Exit status never affects the
/// recorded sample: a failing invocation still occupied wall-clock time and
/// that time is what gets recorded. A warning is logged for visibility.
pub struct ProcessRunner {
    program: String,
    leading_args: Vec<String>,
    fixed_arg: String,
}

impl ProcessRunner {
    /// Build a runner from a command line and the fixed pass-through
    /// argument. `command` is split on whitespace; the first token is the
    /// executable and the rest are leading arguments (so interpreter-style
    /// commands like `go run ./gridsearch.go` work).
    pub fn new(command: &str, fixed_arg: impl Into<String>) -> Self {
        let mut tokens = command.split_whitespace().map(str::to_string);
        let program = tokens.next().unwrap_or_default();
        Self {
            program,
            leading_args: tokens.collect(),
            fixed_arg: fixed_arg.into(),
        }
    }

    fn build_command(&self, size: &ProblemSize, workers: Option<usize>) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.leading_args);
        cmd.arg(&size.name).arg(&self.fixed_arg);
        if let Some(workers) = workers {
            cmd.arg(workers.to_string());
        }
        cmd
    }
}

impl GridSearchRunner for ProcessRunner {
    fn measure(&mut self, size: &ProblemSize, workers: Option<usize>) -> Duration {
        let mut cmd = self.build_command(size, workers);
        let start = Instant::now();
        match cmd.status() {
            Ok(status) if !status.success() => {
                log::warn!(
                    "grid search exited with {} for size '{}' (workers: {:?}); \
                     sample recorded anyway",
                    status,
                    size.name,
                    workers
                );
            }
            Err(err) => {
                log::warn!(
                    "failed to launch '{}' for size '{}': {}; sample recorded anyway",
                    self.program,
                    size.name,
                    err
                );
            }
            Ok(_) => {}
        }
        start.elapsed()
    }
}
