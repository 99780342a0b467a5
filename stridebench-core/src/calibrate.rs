//! Iteration Calibration
//!
//! Trial-runs the probe with an escalating iteration count until a single
//! round's wall time reaches the target duration, so elapsed times are
//! comparable across machines of different speeds.

use std::time::Duration;

use log::debug;
use thiserror::Error;

use crate::probe::{run_round, RoundOutcome};
use crate::LOG_TARGET;

/// Hard cap on calibration attempts.
pub const MAX_CALIBRATION_ROUNDS: usize = 10;

/// Errors raised while calibrating the iteration count.
#[derive(Debug, Error)]
pub enum CalibrationError {
    /// The callable finished in zero measured time; the scaling factor
    /// would divide by zero. The test body must do nontrivial work.
    #[error("measured time was zero on calibration attempt {attempt}; the callable must do nontrivial work")]
    ZeroMeasurement {
        /// Attempt number (1-based) on which the zero reading occurred.
        attempt: usize,
    },
    /// The callable panicked during a calibration round.
    #[error("benchmark panicked during calibration: {0}")]
    Panicked(String),
}

/// Calibrate the iteration count for `f` toward `target` wall time per round.
///
/// Runs at most [`MAX_CALIBRATION_ROUNDS`] trial rounds, multiplying the
/// count by `ceil(target / measured)` after each round that falls short.
/// The returned count is fixed for all subsequent measured rounds.
pub fn calibrate_iterations<F>(
    title: &str,
    target: Duration,
    f: &F,
) -> Result<u64, CalibrationError>
where
    F: Fn() + Sync,
{
    let iterations = calibrate_with(target, |iterations| {
        match run_round(title, iterations, f) {
            RoundOutcome::Measured(sample) => Ok(sample.wall_time),
            RoundOutcome::Failed(message) => Err(CalibrationError::Panicked(message)),
        }
    })?;
    debug!(target: LOG_TARGET, "test {title}: estimated iterations {iterations}");
    Ok(iterations)
}

/// The scaling loop, generic over the measurement so tests can drive it
/// with synthetic timings.
pub(crate) fn calibrate_with<M>(target: Duration, mut measure: M) -> Result<u64, CalibrationError>
where
    M: FnMut(u64) -> Result<f64, CalibrationError>,
{
    let target_secs = target.as_secs_f64();
    let mut iterations: u64 = 1;

    for attempt in 1..=MAX_CALIBRATION_ROUNDS {
        let measured = measure(iterations)?;
        if measured >= target_secs {
            return Ok(iterations);
        }
        if measured == 0.0 {
            return Err(CalibrationError::ZeroMeasurement { attempt });
        }
        let factor = (target_secs / measured).ceil() as u64;
        iterations = iterations.saturating_mul(factor);
    }

    // Attempt cap reached: the count stands as calibrated so far.
    Ok(iterations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_when_target_reached() {
        let mut attempts = 0;
        let result = calibrate_with(Duration::from_secs(1), |_| {
            attempts += 1;
            Ok(2.0)
        });
        assert_eq!(result.unwrap(), 1);
        assert_eq!(attempts, 1);
    }

    #[test]
    fn test_scales_by_ceil_of_ratio() {
        let mut counts = Vec::new();
        let result = calibrate_with(Duration::from_secs(1), |iterations| {
            counts.push(iterations);
            // 0.3s per probe until enough iterations accumulate
            Ok(if iterations >= 4 { 1.5 } else { 0.3 })
        });
        // ceil(1.0 / 0.3) = 4
        assert_eq!(counts, vec![1, 4]);
        assert_eq!(result.unwrap(), 4);
    }

    #[test]
    fn test_never_exceeds_attempt_cap() {
        let mut attempts = 0;
        // Never reaches the target, so the loop must stop at the cap.
        let result = calibrate_with(Duration::from_secs(1), |_| {
            attempts += 1;
            Ok(0.9)
        });
        assert!(result.is_ok());
        assert_eq!(attempts, MAX_CALIBRATION_ROUNDS);
    }

    #[test]
    fn test_zero_measurement_is_fatal() {
        let result = calibrate_with(Duration::from_secs(1), |_| Ok(0.0));
        assert!(matches!(
            result,
            Err(CalibrationError::ZeroMeasurement { attempt: 1 })
        ));
    }

    #[test]
    fn test_panic_during_calibration_is_fatal() {
        let result = calibrate_with(Duration::from_secs(1), |_| {
            Err(CalibrationError::Panicked("down in flames".to_string()))
        });
        assert!(matches!(result, Err(CalibrationError::Panicked(_))));
    }

    #[test]
    fn test_real_probe_calibrates_fast_callable() {
        // A 1ns target is met by any real invocation on the first attempt.
        let result = calibrate_iterations("noop", Duration::from_nanos(1), &|| {
            std::hint::black_box(1 + 1);
        });
        assert_eq!(result.unwrap(), 1);
    }
}
