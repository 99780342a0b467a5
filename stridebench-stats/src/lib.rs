#![warn(missing_docs)]
//! Stridebench Stats
//!
//! Pure statistics used by the aggregator: linear-interpolation percentile
//! estimation and basic sample summaries (sum, mean, min, max). No
//! dependencies; everything operates on `f64` slices.

mod percentiles;
mod summary;

pub use percentiles::{median, percentile};
pub use summary::{max, mean, min, sorted_copy, sum};
