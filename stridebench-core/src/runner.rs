//! Benchmark Scheduling
//!
//! `BenchRunner` dispatches the warmup and measured rounds of one callable
//! across a fixed-size worker pool and blocks until every round has joined.
//! Warmup results are discarded by dispatch index, not completion order.

use log::debug;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use thiserror::Error;

use crate::calibrate::{calibrate_iterations, CalibrationError};
use crate::config::BenchConfig;
use crate::probe::{run_round, RoundOutcome};
use crate::sample::Sample;
use crate::LOG_TARGET;

/// Errors raised while scheduling a benchmark run.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The worker pool could not be constructed.
    #[error("failed to build worker pool: {0}")]
    Pool(String),

    /// Iteration calibration failed before any round was dispatched.
    #[error(transparent)]
    Calibration(#[from] CalibrationError),

    /// A round's callable panicked. The whole run is aborted and no
    /// partial results are kept.
    #[error("round {round} failed: {message}")]
    RoundFailed {
        /// Dispatch index of the failed round.
        round: usize,
        /// Panic message from the callable.
        message: String,
    },
}

/// All samples collected for one benchmarked callable, plus its identity.
#[derive(Debug, Clone)]
pub struct TestMeasurement {
    /// Benchmarked method name.
    pub title: String,
    /// Name of the enclosing test type.
    pub class_name: String,
    /// One sample per measured round, in dispatch order.
    pub samples: Vec<Sample>,
    /// Iterations per round (1 unless calibrated).
    pub iterations: u64,
}

/// Runs one benchmarked callable under a [`BenchConfig`].
///
/// An explicit runner object built from a config and a plain callable;
/// the callable stays undecorated and is invoked directly by the probe.
#[derive(Debug, Clone)]
pub struct BenchRunner {
    config: BenchConfig,
    title: String,
    class_name: String,
}

impl BenchRunner {
    /// Create a runner for the callable identified by `title` / `class_name`.
    pub fn new(
        config: BenchConfig,
        title: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            config,
            title: title.into(),
            class_name: class_name.into(),
        }
    }

    /// The configuration this runner was built from.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run all warmup and measured rounds and return the collected samples.
    ///
    /// Blocks until the pool has drained. Any panicking round aborts the
    /// whole run; there is no timeout, so a hung callable blocks forever.
    pub fn run<F>(&self, f: F) -> Result<TestMeasurement, RunnerError>
    where
        F: Fn() + Sync,
    {
        self.config
            .validate()
            .map_err(RunnerError::InvalidConfig)?;

        let iterations = match self.config.estimated_time {
            Some(target) => calibrate_iterations(&self.title, target, &f)?,
            None => 1,
        };

        let total = self.config.total_rounds();
        // One pool per run, torn down when it goes out of scope.
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.config.threads)
            .build()
            .map_err(|e| RunnerError::Pool(e.to_string()))?;

        let mut outcomes: Vec<(usize, RoundOutcome)> = pool.install(|| {
            (0..total)
                .into_par_iter()
                .map(|index| (index, run_round(&self.title, iterations, &f)))
                .collect()
        });

        // Completion order across workers is arbitrary; the warmup/measured
        // partition is by dispatch index.
        outcomes.sort_by_key(|(index, _)| *index);

        let mut samples = Vec::with_capacity(self.config.rounds);
        for (index, outcome) in outcomes {
            match outcome {
                RoundOutcome::Measured(sample) => {
                    if index >= self.config.warmup_rounds {
                        samples.push(sample);
                    }
                }
                RoundOutcome::Failed(message) => {
                    return Err(RunnerError::RoundFailed {
                        round: index,
                        message,
                    });
                }
            }
        }

        debug!(
            target: LOG_TARGET,
            "test {}: kept {} measured rounds, discarded {} warmup",
            self.title,
            samples.len(),
            self.config.warmup_rounds
        );

        Ok(TestMeasurement {
            title: self.title.clone(),
            class_name: self.class_name.clone(),
            samples,
            iterations,
        })
    }
}
