//! Software countdown timer over an injected [`Clock`].
//!
//! Mirrors the private-timer register contract so the controller cannot
//! tell the two apart: a sticky expired flag that must be acknowledged,
//! and auto-reload (once the deadline passes the next period begins
//! immediately, so an un-acknowledged running timer keeps re-expiring).
//!
//! The timer is polled; nothing here sleeps or spins.

use core::time::Duration;

use crate::app::ports::{Clock, TimerPort};

pub struct SoftTimer<C: Clock> {
    clock: C,
    period_us: u64,
    /// Absolute deadline while running.
    deadline_us: Option<u64>,
    expired: bool,
}

impl<C: Clock> SoftTimer<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            period_us: 0,
            deadline_us: None,
            expired: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.deadline_us.is_some()
    }

    /// Latch the flag and reload if the deadline has passed.
    fn update(&mut self) {
        let Some(deadline) = self.deadline_us else {
            return;
        };
        let now = self.clock.now_us();
        if now >= deadline {
            self.expired = true;
            // Skip whole periods missed while nobody polled.
            let overshoot = now - deadline;
            let periods = overshoot / self.period_us.max(1) + 1;
            self.deadline_us =
                Some(deadline.saturating_add(periods.saturating_mul(self.period_us)));
        }
    }
}

impl<C: Clock> TimerPort for SoftTimer<C> {
    fn start(&mut self, duration: Duration) {
        self.period_us = (duration.as_micros().min(u128::from(u64::MAX)) as u64).max(1);
        self.deadline_us = Some(self.clock.now_us().saturating_add(self.period_us));
    }

    fn stop(&mut self) {
        self.deadline_us = None;
    }

    fn is_expired(&mut self) -> bool {
        self.update();
        self.expired
    }

    fn clear_expired(&mut self) {
        self.expired = false;
    }

    fn remaining(&mut self) -> Option<Duration> {
        self.update();
        self.deadline_us
            .map(|d| Duration::from_micros(d.saturating_sub(self.clock.now_us())))
    }
}
