//! Round Probe
//!
//! Executes the benchmarked callable for one round and captures wall-clock
//! and CPU-time deltas by snapshotting resource usage immediately before and
//! after the invocation.

use std::any::Any;
use std::hint::black_box;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use log::debug;

use crate::rusage;
use crate::sample::Sample;
use crate::LOG_TARGET;

/// Outcome of one dispatched round.
///
/// A panic in the callable is caught and tagged here instead of unwinding
/// through the worker pool; the runner turns it into a fatal error.
#[derive(Debug, Clone)]
pub enum RoundOutcome {
    /// The callable completed and deltas were captured.
    Measured(Sample),
    /// The callable panicked with this message.
    Failed(String),
}

/// Run `f` `iterations` times and capture the round's resource deltas.
///
/// `iterations` is 1 unless the run was calibrated; the whole batch counts
/// as one round.
pub fn run_round<F>(title: &str, iterations: u64, f: &F) -> RoundOutcome
where
    F: Fn() + Sync,
{
    debug!(
        target: LOG_TARGET,
        "test {title}: pid {} ppid {}",
        std::process::id(),
        rusage::parent_pid()
    );

    let before = rusage::snapshot();
    let start = Instant::now();
    let result = catch_unwind(AssertUnwindSafe(|| {
        for _ in 0..iterations {
            black_box(f());
        }
    }));
    let wall_time = start.elapsed().as_secs_f64();
    let after = rusage::snapshot();

    match result {
        Ok(()) => {
            let cpu = after.delta(&before);
            RoundOutcome::Measured(Sample::new(wall_time, cpu.user_time, cpu.sys_time))
        }
        Err(panic) => RoundOutcome::Failed(panic_message(panic)),
    }
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
