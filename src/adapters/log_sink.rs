//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured controller events to the
//! `log` facade (console on hosted builds).

use log::{debug, info};

use crate::app::events::ControlEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`ControlEvent`].
pub struct LogEventSink;

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &ControlEvent) {
        match event {
            ControlEvent::Started { sensitivity } => {
                info!("START | sensitivity={}", sensitivity);
            }
            ControlEvent::SensitivityChanged { level } => {
                info!("SENS  | level={}", level);
            }
            ControlEvent::MotionProgress { count, threshold } => {
                info!("MOTION| press {}/{}", count, threshold);
            }
            ControlEvent::MotionConfirmed { rearmed } => {
                info!(
                    "MOTION| confirmed, light on{}",
                    if *rearmed { " (rearmed)" } else { "" }
                );
            }
            ControlEvent::AudioAlert => {
                info!("ALERT | motion detected");
            }
            ControlEvent::AudioAlertToggled { enabled } => {
                info!("ALERT | {}", if *enabled { "enabled" } else { "disabled" });
            }
            ControlEvent::LightOff => {
                info!("LIGHT | off (auto-off expired)");
            }
            ControlEvent::ActionSuppressed(action) => {
                debug!("INPUT | {:?} suppressed by cooldown", action);
            }
        }
    }
}
