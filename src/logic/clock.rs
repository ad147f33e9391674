//! Match clock: mm:ss count-up (football) or countdown (basketball), one step per tick.

use crate::models::ClockTime;
use serde::Serialize;

/// Clock state driven by the host once per second.
///
/// Not synchronized to wall time: a missed tick is simply lost.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MatchClock {
    pub initial: ClockTime,
    pub current: ClockTime,
    pub countdown: bool,
    pub disabled: bool,
    pub running: bool,
}

impl MatchClock {
    /// Clock counting up from `initial`, stopped.
    pub fn count_up(initial: ClockTime) -> Self {
        Self {
            initial,
            current: initial,
            countdown: false,
            disabled: false,
            running: false,
        }
    }

    /// Clock counting down from `initial` to 00:00, stopped.
    pub fn countdown(initial: ClockTime) -> Self {
        Self {
            countdown: true,
            ..Self::count_up(initial)
        }
    }

    /// Start or pause. A countdown sitting at 00:00 stays stopped.
    pub fn toggle(&mut self) {
        if self.running {
            self.running = false;
        } else if !(self.countdown && self.current.is_zero()) {
            self.running = true;
        }
    }

    /// Back to the initial reading, stopped.
    pub fn reset(&mut self) {
        self.current = self.initial;
        self.running = false;
    }

    /// Change the initial reading and reset to it.
    pub fn reset_to(&mut self, initial: ClockTime) {
        self.initial = initial;
        self.reset();
    }

    /// A disabled clock does not advance on tick.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Advance one second. Returns the new reading, or `None` when nothing was emitted.
    pub fn tick(&mut self) -> Option<ClockTime> {
        if !self.running || self.disabled {
            return None;
        }
        if self.countdown {
            if self.current.is_zero() {
                self.running = false;
                return None;
            }
            self.current = self.current.minus_one();
            if self.current.is_zero() {
                self.running = false;
            }
        } else {
            self.current = self.current.plus_one();
        }
        Some(self.current)
    }
}
