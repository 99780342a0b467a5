//! Per-Round Samples

/// Raw resource deltas for one measured round, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    /// Wall-clock time for the round.
    pub wall_time: f64,
    /// User-mode CPU time consumed during the round.
    pub user_time: f64,
    /// Kernel-mode CPU time consumed during the round.
    pub sys_time: f64,
}

impl Sample {
    /// Create a sample from explicit deltas.
    pub fn new(wall_time: f64, user_time: f64, sys_time: f64) -> Self {
        Self {
            wall_time,
            user_time,
            sys_time,
        }
    }

    /// Wall-clock-only sample (CPU counters unavailable).
    pub fn wall_only(wall_time: f64) -> Self {
        Self {
            wall_time,
            ..Self::default()
        }
    }

    /// Named view of every resource field, for generic aggregation.
    pub fn fields(&self) -> [(&'static str, f64); 3] {
        [
            ("wall_time", self.wall_time),
            ("user_time", self.user_time),
            ("sys_time", self.sys_time),
        ]
    }
}
