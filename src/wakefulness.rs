//! Awake/asleep countdown state machine for the display.
//!
//! The device starts awake and falls asleep after a fixed number of ticks
//! without interaction evidence (motion, touch, or an external wake signal).
//! Display power changes are reported as edge-triggered return values: the
//! caller sees `Some(on)` exactly once per transition, never on the ticks a
//! state merely holds. Both states are re-enterable.

use crate::config::SLEEP_COUNTDOWN_TICKS;

/// Timeout-driven wakefulness state machine.
#[derive(Debug)]
pub struct WakefulnessController {
    awake: bool,
    countdown: u32,
}

impl WakefulnessController {
    /// Create the controller awake with a full sleep countdown.
    pub const fn new() -> Self {
        Self {
            awake: true,
            countdown: SLEEP_COUNTDOWN_TICKS,
        }
    }

    /// Explicit wake request from a collaborator (button press, ignition).
    ///
    /// With `reset` the device wakes unconditionally and the countdown
    /// restarts in full. Without it, the countdown is only extended if the
    /// device is still awake; an asleep device stays asleep unless
    /// explicitly told otherwise.
    ///
    /// Returns `Some(true)` on the asleep-to-awake edge, `None` otherwise.
    pub fn request_wake(&mut self, reset: bool) -> Option<bool> {
        if reset {
            self.countdown = SLEEP_COUNTDOWN_TICKS;
            if !self.awake {
                self.awake = true;
                return Some(true);
            }
        } else if self.awake {
            self.countdown = SLEEP_COUNTDOWN_TICKS;
        }
        None
    }

    /// Advance the machine by one tick.
    ///
    /// Interaction evidence observed this tick restarts the countdown and
    /// wakes the device. Otherwise the countdown decrements; on reaching
    /// zero the device transitions to asleep.
    ///
    /// Returns `Some(on)` only on a display-power transition.
    pub fn tick(&mut self, has_interaction_evidence: bool) -> Option<bool> {
        if has_interaction_evidence {
            self.countdown = SLEEP_COUNTDOWN_TICKS;
            if !self.awake {
                self.awake = true;
                return Some(true);
            }
            return None;
        }

        if self.countdown > 0 {
            self.countdown -= 1;
            if self.countdown == 0 && self.awake {
                self.awake = false;
                return Some(false);
            }
        }
        None
    }

    /// Whether the display should currently be powered.
    #[inline]
    pub const fn is_awake(&self) -> bool {
        self.awake
    }

    /// Ticks remaining until sleep (0 when asleep).
    #[inline]
    pub const fn countdown(&self) -> u32 {
        self.countdown
    }
}

impl Default for WakefulnessController {
    fn default() -> Self {
        Self::new()
    }
}
