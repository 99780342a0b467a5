//! Measurement Collection
//!
//! An explicit context object scoped to one module run. It must be drained
//! before the next module's results are computed so results never bleed
//! between modules; keeping the state here instead of in a process-wide
//! global also lets module runs proceed concurrently.

use stridebench_core::TestMeasurement;

/// Accumulates [`TestMeasurement`]s for one module run, in insertion order.
#[derive(Debug, Default)]
pub struct MeasurementCollector {
    measurements: Vec<TestMeasurement>,
}

impl MeasurementCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one finished benchmark's measurement.
    pub fn record(&mut self, measurement: TestMeasurement) {
        self.measurements.push(measurement);
    }

    /// Number of measurements collected so far.
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// Take all measurements, leaving the collector empty for the next
    /// module.
    pub fn drain(&mut self) -> Vec<TestMeasurement> {
        std::mem::take(&mut self.measurements)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stridebench_core::Sample;

    fn measurement(title: &str) -> TestMeasurement {
        TestMeasurement {
            title: title.to_string(),
            class_name: "CollectorTest".to_string(),
            samples: vec![Sample::wall_only(0.1)],
            iterations: 1,
        }
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut collector = MeasurementCollector::new();
        collector.record(measurement("first"));
        collector.record(measurement("second"));

        let drained = collector.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].title, "first");
        assert_eq!(drained[1].title, "second");
    }

    #[test]
    fn test_drain_leaves_collector_empty() {
        let mut collector = MeasurementCollector::new();
        collector.record(measurement("only"));
        assert_eq!(collector.len(), 1);

        let _ = collector.drain();
        assert!(collector.is_empty());
        assert!(collector.drain().is_empty());
    }
}
