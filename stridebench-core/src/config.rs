//! Benchmark Run Configuration

use std::time::Duration;

/// Configuration attached to one benchmarked callable.
///
/// Immutable once handed to a [`crate::BenchRunner`]. `rounds` measured
/// invocations are preceded by `warmup_rounds` invocations whose results
/// are discarded; all of them are dispatched across `threads` workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of measured rounds.
    pub rounds: usize,
    /// Number of warmup rounds dispatched before the measured ones.
    pub warmup_rounds: usize,
    /// Size of the worker pool.
    pub threads: usize,
    /// Target wall time for one round. When set, the iteration count is
    /// calibrated upward until a single round reaches this duration.
    pub estimated_time: Option<Duration>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            rounds: 1,
            warmup_rounds: 0,
            threads: 1,
            estimated_time: None,
        }
    }
}

impl BenchConfig {
    /// Create a configuration with `rounds` measured rounds and defaults
    /// for everything else.
    pub fn new(rounds: usize) -> Self {
        Self {
            rounds,
            ..Self::default()
        }
    }

    /// Set the number of warmup rounds.
    pub fn warmup_rounds(mut self, warmup_rounds: usize) -> Self {
        self.warmup_rounds = warmup_rounds;
        self
    }

    /// Set the worker pool size.
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Enable iteration calibration toward `target` wall time per round.
    pub fn estimated_time(mut self, target: Duration) -> Self {
        self.estimated_time = Some(target);
        self
    }

    /// Total rounds dispatched to the pool, warmup included.
    pub fn total_rounds(&self) -> usize {
        self.warmup_rounds + self.rounds
    }

    /// Validate configuration values, returning a description of the first
    /// error found.
    pub fn validate(&self) -> Result<(), String> {
        if self.rounds == 0 {
            return Err("rounds must be >= 1".to_string());
        }
        if self.threads == 0 {
            return Err("threads must be >= 1".to_string());
        }
        if let Some(target) = self.estimated_time {
            if target.is_zero() {
                return Err("estimated_time must be > 0".to_string());
            }
        }
        Ok(())
    }
}
