//! Outbound controller events.
//!
//! The [`LightController`](super::service::LightController) emits these
//! through the [`EventSink`](super::ports::EventSink) port and also returns
//! them in each cycle's [`CycleReport`].

use heapless::Vec;

use crate::control::input::Action;

/// Upper bound on events a single cycle can produce.
pub const MAX_EVENTS_PER_CYCLE: usize = 8;

/// Structured events emitted by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Controller initialised; carries the starting sensitivity.
    Started { sensitivity: u8 },

    /// Sensitivity adjusted (or clamped at a bound: `level` is unchanged).
    SensitivityChanged { level: u8 },

    /// A trigger edge counted toward confirmation.
    MotionProgress { count: u32, threshold: u8 },

    /// Motion confirmed; light on and auto-off armed.
    /// `rearmed` is true if a countdown was already running.
    MotionConfirmed { rearmed: bool },

    /// Motion confirmed while the audio alert is enabled.
    AudioAlert,

    /// The alert switch changed.
    AudioAlertToggled { enabled: bool },

    /// Auto-off countdown expired; light off.
    LightOff,

    /// A button edge arrived inside its cooldown window.
    ActionSuppressed(Action),
}

/// What the numeric display should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayStatus {
    pub sensitivity: u8,
    /// Whole seconds left on the auto-off countdown (rounded up).
    pub remaining_secs: Option<u32>,
    pub light_on: bool,
    pub audio_alert: bool,
}

/// Summary of one control cycle.
#[derive(Debug, Clone, Default)]
pub struct CycleReport {
    /// The button action accepted this cycle, if any.
    pub action: Option<Action>,
    pub events: Vec<ControlEvent, MAX_EVENTS_PER_CYCLE>,
}

impl CycleReport {
    pub fn contains(&self, event: &ControlEvent) -> bool {
        self.events.contains(event)
    }

    pub fn motion_confirmed(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, ControlEvent::MotionConfirmed { .. }))
    }
}
