//! Aggregated Results

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use stridebench_core::TestMeasurement;
use stridebench_stats::{max, mean, min, percentile, sorted_copy, sum};

/// The user-facing aggregated record for one benchmarked method.
///
/// Every statistic is derived solely from the samples of the measurement
/// it was built from; a result is never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceResult {
    /// Benchmarked method name.
    pub title: String,
    /// Name of the enclosing test type.
    pub class: String,
    /// Number of measured rounds.
    pub rounds: usize,
    /// Iterations per round (1 unless calibrated).
    pub iterations: u64,
    /// Sum of per-round wall times, in seconds.
    pub execution_time: f64,
    /// Fastest round's wall time.
    pub min: f64,
    /// Slowest round's wall time.
    pub max: f64,
    /// Mean wall time per round.
    pub average: f64,
    /// Median wall time per round.
    pub median: f64,
    /// 90th-percentile wall time per round.
    pub percentile_90: f64,
    /// Throughput in iterations per second of wall time; 0.0 when the
    /// mean wall time is zero.
    pub ops_per_second: f64,
    /// Throughput in iterations per second of user CPU time; 0.0 when the
    /// mean user time is zero.
    pub ops_per_second_user: f64,
    /// Arithmetic mean of every resource field present in the samples.
    pub means: BTreeMap<String, f64>,
}

impl PerformanceResult {
    /// Aggregate one measurement, or `None` when it holds no samples.
    pub fn from_measurement(measurement: &TestMeasurement) -> Option<Self> {
        if measurement.samples.is_empty() {
            return None;
        }

        let wall: Vec<f64> = measurement.samples.iter().map(|s| s.wall_time).collect();
        let user: Vec<f64> = measurement.samples.iter().map(|s| s.user_time).collect();

        let mut means = BTreeMap::new();
        for sample in &measurement.samples {
            for (name, value) in sample.fields() {
                *means.entry(name.to_string()).or_insert(0.0) += value;
            }
        }
        for value in means.values_mut() {
            *value /= measurement.samples.len() as f64;
        }

        let sorted_wall = sorted_copy(&wall);
        let average = mean(&wall);

        Some(Self {
            title: measurement.title.clone(),
            class: measurement.class_name.clone(),
            rounds: measurement.samples.len(),
            iterations: measurement.iterations,
            execution_time: sum(&wall),
            min: min(&wall),
            max: max(&wall),
            average,
            median: percentile(&sorted_wall, 0.5).unwrap_or(0.0),
            percentile_90: percentile(&sorted_wall, 0.9).unwrap_or(0.0),
            ops_per_second: throughput(measurement.iterations, average),
            ops_per_second_user: throughput(measurement.iterations, mean(&user)),
            means,
        })
    }
}

/// Iterations per second against a mean time, with the defined zero
/// fallback instead of dividing by zero.
fn throughput(iterations: u64, mean_time: f64) -> f64 {
    if mean_time > 0.0 {
        iterations as f64 / mean_time
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stridebench_core::Sample;

    fn measurement(samples: Vec<Sample>, iterations: u64) -> TestMeasurement {
        TestMeasurement {
            title: "testAggregation".to_string(),
            class_name: "ResultTest".to_string(),
            samples,
            iterations,
        }
    }

    #[test]
    fn test_aggregates_wall_time_statistics() {
        let samples = vec![
            Sample::new(1.0, 0.5, 0.1),
            Sample::new(2.0, 1.0, 0.1),
            Sample::new(3.0, 1.5, 0.1),
            Sample::new(4.0, 2.0, 0.1),
        ];
        let result = PerformanceResult::from_measurement(&measurement(samples, 1)).unwrap();

        assert_eq!(result.rounds, 4);
        assert_eq!(result.execution_time, 10.0);
        assert_eq!(result.min, 1.0);
        assert_eq!(result.max, 4.0);
        assert_eq!(result.average, 2.5);
        assert_eq!(result.median, 2.5);
        assert!((result.percentile_90 - 3.7).abs() < 1e-9);
    }

    #[test]
    fn test_per_field_means() {
        let samples = vec![Sample::new(2.0, 1.0, 0.5), Sample::new(4.0, 3.0, 1.5)];
        let result = PerformanceResult::from_measurement(&measurement(samples, 1)).unwrap();

        assert_eq!(result.means["wall_time"], 3.0);
        assert_eq!(result.means["user_time"], 2.0);
        assert_eq!(result.means["sys_time"], 1.0);
    }

    #[test]
    fn test_throughput_from_mean_time() {
        let samples = vec![Sample::new(0.5, 0.25, 0.0), Sample::new(0.5, 0.25, 0.0)];
        let result = PerformanceResult::from_measurement(&measurement(samples, 100)).unwrap();

        // 100 iterations / 0.5s mean wall = 200 ops/s
        assert_eq!(result.ops_per_second, 200.0);
        // 100 iterations / 0.25s mean user = 400 ops/s
        assert_eq!(result.ops_per_second_user, 400.0);
    }

    #[test]
    fn test_zero_mean_time_gives_zero_throughput() {
        let samples = vec![Sample::new(0.0, 0.0, 0.0)];
        let result = PerformanceResult::from_measurement(&measurement(samples, 100)).unwrap();

        assert_eq!(result.ops_per_second, 0.0);
        assert_eq!(result.ops_per_second_user, 0.0);
    }

    #[test]
    fn test_single_round_degenerates_to_that_value() {
        let samples = vec![Sample::new(1.5, 1.0, 0.2)];
        let result = PerformanceResult::from_measurement(&measurement(samples, 1)).unwrap();

        assert_eq!(result.rounds, 1);
        assert_eq!(result.min, 1.5);
        assert_eq!(result.max, 1.5);
        assert_eq!(result.average, 1.5);
        assert_eq!(result.median, 1.5);
        assert_eq!(result.percentile_90, 1.5);
    }

    #[test]
    fn test_empty_measurement_yields_no_result() {
        assert!(PerformanceResult::from_measurement(&measurement(Vec::new(), 1)).is_none());
    }
}
