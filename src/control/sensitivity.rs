//! Bounded sensitivity level.
//!
//! The level lives in `1..=10` and clamps at both ends.  Higher sensitivity
//! means fewer trigger edges are needed to confirm motion: the confirmation
//! threshold is `11 - level`.

use core::fmt;

/// Motion sensitivity, always within [`MIN`](Self::MIN)..=[`MAX`](Self::MAX).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sensitivity(u8);

impl Sensitivity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: u8 = 5;

    /// Build a level, clamping out-of-range values to the nearest bound.
    pub fn new(level: u8) -> Self {
        Self(level.clamp(Self::MIN, Self::MAX))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Raise by one step.  Returns `false` when already at [`MAX`](Self::MAX).
    pub fn increase(&mut self) -> bool {
        let prev = self.0;
        self.0 = (self.0 + 1).min(Self::MAX);
        self.0 != prev
    }

    /// Lower by one step.  Returns `false` when already at [`MIN`](Self::MIN).
    pub fn decrease(&mut self) -> bool {
        let prev = self.0;
        self.0 = self.0.saturating_sub(1).max(Self::MIN);
        self.0 != prev
    }

    /// Trigger edges required to confirm motion at this level (1..=10).
    pub fn confirmation_threshold(self) -> u8 {
        Self::MAX + 1 - self.0
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
