#![warn(missing_docs)]
//! Stridebench Core - Measurement Runtime
//!
//! This crate provides the execution environment for benchmarked callables:
//! - `BenchConfig` describing a benchmark run
//! - Resource-usage snapshots (user/system CPU time via `getrusage` on Unix)
//! - The round probe that executes a callable and captures timing deltas
//! - The iteration calibrator for normalizing round duration across machines
//! - `BenchRunner`, the fixed-size worker-pool scheduler

mod calibrate;
mod config;
mod probe;
mod rusage;
mod runner;
mod sample;

pub use calibrate::{calibrate_iterations, CalibrationError, MAX_CALIBRATION_ROUNDS};
pub use config::BenchConfig;
pub use probe::{run_round, RoundOutcome};
pub use rusage::{parent_pid, snapshot, ResourceSnapshot};
pub use runner::{BenchRunner, RunnerError, TestMeasurement};
pub use sample::Sample;

/// Logging target used for all diagnostic output from this crate.
pub const LOG_TARGET: &str = "stridebench";
