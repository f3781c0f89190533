//! Auto-off countdown state machine.
//!
//! ```text
//!          arm()                 expired flag seen
//!  Idle ──────────▶ Running ─────────────────────▶ Expired
//!   ▲                │  ▲                              │
//!   │                └──┘ arm() re-loads full duration │
//!   └──────────────────── consume() ───────────────────┘
//! ```
//!
//! Arming always stops the peripheral and clears its expired flag before
//! loading, so a flag left over from an earlier countdown cannot fire
//! against the new one.

use core::time::Duration;

use crate::app::ports::TimerPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Expired,
}

#[derive(Debug)]
pub struct AutoOffTimer {
    duration: Duration,
    state: TimerState,
}

impl AutoOffTimer {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            state: TimerState::Idle,
        }
    }

    /// Start (or restart) the countdown from full duration.
    /// Returns `true` if a countdown was already running.
    pub fn arm(&mut self, timer: &mut impl TimerPort) -> bool {
        let rearmed = self.state == TimerState::Running;
        timer.stop();
        timer.clear_expired();
        timer.start(self.duration);
        self.state = TimerState::Running;
        rearmed
    }

    /// Check the peripheral once.  Returns `true` on the Running → Expired edge.
    pub fn poll(&mut self, timer: &mut impl TimerPort) -> bool {
        if self.state == TimerState::Running && timer.is_expired() {
            self.state = TimerState::Expired;
            return true;
        }
        false
    }

    /// Acknowledge an expiry: stop, clear the flag, return to Idle.
    pub fn consume(&mut self, timer: &mut impl TimerPort) {
        timer.stop();
        timer.clear_expired();
        self.state = TimerState::Idle;
    }

    /// Reset the peripheral to a known-quiet state (power-on).
    pub fn reset(&mut self, timer: &mut impl TimerPort) {
        self.consume(timer);
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Time left, only while Running.
    pub fn remaining(&self, timer: &mut impl TimerPort) -> Option<Duration> {
        if self.state == TimerState::Running {
            timer.remaining()
        } else {
            None
        }
    }
}
