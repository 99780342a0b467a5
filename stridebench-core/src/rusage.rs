//! Resource-Usage Snapshots
//!
//! User/system CPU time via `getrusage` on Unix, with a zeroed fallback on
//! other platforms (only wall-clock time is available there). On Linux the
//! counters are per-thread, so concurrent rounds on sibling pool threads
//! never charge each other's CPU.

/// Which counters `getrusage` reads. A round runs entirely on one pool
/// thread, so per-thread counters attribute CPU to the round that spent it.
#[cfg(target_os = "linux")]
const RUSAGE_WHO: libc::c_int = libc::RUSAGE_THREAD;

/// No per-thread counters outside Linux; process-wide is the best
/// available. Concurrent rounds may observe each other's CPU there.
#[cfg(all(unix, not(target_os = "linux")))]
const RUSAGE_WHO: libc::c_int = libc::RUSAGE_SELF;

/// CPU time counters at one point in time, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResourceSnapshot {
    /// User-mode CPU time.
    pub user_time: f64,
    /// Kernel-mode CPU time.
    pub sys_time: f64,
}

impl ResourceSnapshot {
    /// Per-counter delta against an earlier snapshot, clamped at zero.
    pub fn delta(&self, earlier: &ResourceSnapshot) -> ResourceSnapshot {
        ResourceSnapshot {
            user_time: (self.user_time - earlier.user_time).max(0.0),
            sys_time: (self.sys_time - earlier.sys_time).max(0.0),
        }
    }
}

/// Capture the calling thread's CPU time counters (the whole process's on
/// Unixes without per-thread rusage).
#[cfg(unix)]
pub fn snapshot() -> ResourceSnapshot {
    use std::mem::MaybeUninit;

    // SAFETY: getrusage only writes into the struct we hand it.
    unsafe {
        let mut usage = MaybeUninit::<libc::rusage>::zeroed();
        if libc::getrusage(RUSAGE_WHO, usage.as_mut_ptr()) != 0 {
            return ResourceSnapshot::default();
        }
        let usage = usage.assume_init();
        ResourceSnapshot {
            user_time: timeval_secs(usage.ru_utime),
            sys_time: timeval_secs(usage.ru_stime),
        }
    }
}

#[cfg(unix)]
fn timeval_secs(tv: libc::timeval) -> f64 {
    tv.tv_sec as f64 + tv.tv_usec as f64 / 1_000_000.0
}

/// CPU time tracking not supported on this platform.
#[cfg(not(unix))]
pub fn snapshot() -> ResourceSnapshot {
    ResourceSnapshot::default()
}

/// Parent process id, for diagnostics. 0 where unavailable.
#[cfg(unix)]
pub fn parent_pid() -> u32 {
    // SAFETY: getppid has no failure mode.
    unsafe { libc::getppid() as u32 }
}

/// Parent process id, for diagnostics. 0 where unavailable.
#[cfg(not(unix))]
pub fn parent_pid() -> u32 {
    0
}
