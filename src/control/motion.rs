//! Motion confirmation counter.
//!
//! Every accepted trigger edge bumps a press counter.  Motion is confirmed
//! once the counter reaches the threshold derived from the sensitivity in
//! effect *at that edge*, so adjusting sensitivity mid-accumulation shifts
//! the remaining distance immediately.

use super::sensitivity::Sensitivity;

/// Result of registering one trigger edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Not enough edges yet.
    Pending { count: u32, threshold: u8 },
    /// Threshold reached; the counter has been reset.
    Confirmed,
}

#[derive(Debug, Default)]
pub struct MotionConfirmer {
    press_count: u32,
}

impl MotionConfirmer {
    pub fn new() -> Self {
        Self { press_count: 0 }
    }

    /// Count one qualifying trigger edge.
    pub fn register_trigger(&mut self, sensitivity: Sensitivity) -> TriggerOutcome {
        self.press_count = self.press_count.saturating_add(1);
        let threshold = sensitivity.confirmation_threshold();
        if self.press_count >= u32::from(threshold) {
            self.press_count = 0;
            TriggerOutcome::Confirmed
        } else {
            TriggerOutcome::Pending {
                count: self.press_count,
                threshold,
            }
        }
    }

    pub fn press_count(&self) -> u32 {
        self.press_count
    }
}
