#![warn(missing_docs)]
//! Stridebench Report
//!
//! Turns collected measurements into user-facing results:
//! - `MeasurementCollector`, the per-module accumulation context
//! - `PerformanceResult`, the aggregated record for one benchmarked method
//! - `ReportWriter`, which flushes one pretty-printed JSON file per module

mod collector;
mod result;
mod writer;

pub use collector::MeasurementCollector;
pub use result::PerformanceResult;
pub use writer::{to_indented_json, ReportError, ReportWriter};
