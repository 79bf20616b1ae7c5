//! Monotonic time abstraction.
//!
//! All timeout logic in this crate compares durations measured from a single
//! monotonic origin ("time since boot"), never wall-clock time. The crate is
//! `no_std`, so the std-backed clock lives in the simulator binary; tests and
//! simulations drive a [`ManualClock`] instead.

use core::time::Duration;

use crate::config::{TICK_PERIOD, UI_FREQ};

/// Source of monotonic "now" values.
///
/// Implementations must be monotonic: successive `now()` calls never go
/// backwards. A tick that arrives late simply yields a larger delta, which
/// the timeout comparisons handle as the intended degradation path.
pub trait Clock {
    /// Monotonic time elapsed since boot.
    fn now(&self) -> Duration;
}

/// Hand-advanced clock for tests and simulations.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    /// Create a clock at time zero.
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    /// Create a clock at an arbitrary start time.
    pub const fn starting_at(now: Duration) -> Self {
        Self { now }
    }

    /// Advance the clock by `delta`.
    pub fn advance(&mut self, delta: Duration) {
        self.now += delta;
    }

    /// Advance the clock by one nominal tick.
    pub fn advance_tick(&mut self) {
        self.now += TICK_PERIOD;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }
}

/// Duration covered by `n` nominal ticks.
#[inline]
pub const fn ticks(n: u32) -> Duration {
    Duration::from_millis(n as u64 * 1000 / UI_FREQ as u64)
}
