//! Elapsed-time sources implementing [`Clock`].
//!
//! - [`StdClock`]: `std::time::Instant`, for hosted runs.
//! - [`CycleClock`]: credits a fixed step per loop iteration.  Stands in
//!   for a hardware counter on targets where the loop itself is the only
//!   notion of time.
//! - [`ManualClock`]: advanced explicitly; simulation and tests.

use core::cell::Cell;
use core::time::Duration;

use crate::app::ports::Clock;

/// Monotonic wall-clock time since construction.
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    start: std::time::Instant,
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl StdClock {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

impl Clock for StdClock {
    fn now_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

/// Clock that advances by `step_us` each time [`advance`](Self::advance)
/// is called, once per polling cycle.
#[derive(Debug)]
pub struct CycleClock {
    step_us: u64,
    now_us: Cell<u64>,
}

impl CycleClock {
    pub fn new(step_us: u64) -> Self {
        Self {
            step_us,
            now_us: Cell::new(0),
        }
    }

    pub fn advance(&self) {
        self.now_us.set(self.now_us.get().saturating_add(self.step_us));
    }
}

impl Clock for CycleClock {
    fn now_us(&self) -> u64 {
        self.now_us.get()
    }
}

/// Clock driven entirely by the caller.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_us: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now_us: Cell::new(0),
        }
    }

    pub fn advance(&self, by: Duration) {
        let by_us = by.as_micros().min(u128::from(u64::MAX)) as u64;
        self.now_us.set(self.now_us.get().saturating_add(by_us));
    }

    pub fn advance_us(&self, by_us: u64) {
        self.now_us.set(self.now_us.get().saturating_add(by_us));
    }
}

impl Clock for ManualClock {
    fn now_us(&self) -> u64 {
        self.now_us.get()
    }
}
