#![warn(missing_docs)]
//! # Stridebench
//!
//! Micro-benchmarking harness for test methods. A benchmarked callable is
//! run repeatedly across a fixed-size worker pool, warmup rounds first and
//! measured rounds after; per-round wall-clock and CPU-time samples are
//! aggregated (min, max, mean, median, 90th percentile, throughput) and
//! written as one pretty-printed JSON report per test module.
//!
//! ## Quick start
//!
//! ```no_run
//! use stridebench::{BenchConfig, BenchRunner, BenchmarkPlugin};
//!
//! let mut plugin = BenchmarkPlugin::new();
//!
//! let runner = BenchRunner::new(
//!     BenchConfig::new(10).warmup_rounds(2).threads(4),
//!     "testGenerateRandomNumber",
//!     "Test",
//! );
//! let measurement = runner.run(|| {
//!     // code under test
//! }).unwrap();
//! plugin.record(measurement);
//!
//! // Called by the host test runner once the module is done:
//! plugin.context_finished(Some("my_module")).unwrap();
//! ```
//!
//! ## Calibration
//!
//! With [`BenchConfig::estimated_time`] set, the iteration count per round
//! is scaled upward (at most [`MAX_CALIBRATION_ROUNDS`] attempts) until a
//! single round reaches the target wall time, normalizing elapsed times
//! across machines.

mod config;
mod plugin;

// Re-export core types
pub use stridebench_core::{
    calibrate_iterations, run_round, BenchConfig, BenchRunner, CalibrationError, ResourceSnapshot,
    RoundOutcome, RunnerError, Sample, TestMeasurement, LOG_TARGET, MAX_CALIBRATION_ROUNDS,
};

// Re-export report types
pub use stridebench_report::{
    to_indented_json, MeasurementCollector, PerformanceResult, ReportError, ReportWriter,
};

// Re-export stats
pub use stridebench_stats::{median, percentile};

pub use config::{OutputSection, RunnerSection, StrideConfig};
pub use plugin::{BenchmarkPlugin, PluginOptions};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        BenchConfig, BenchRunner, BenchmarkPlugin, MeasurementCollector, PerformanceResult,
        PluginOptions, ReportWriter, StrideConfig,
    };
}
