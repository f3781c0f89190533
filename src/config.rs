//! System configuration parameters
//!
//! All tunable parameters for the motion light controller.
//! Values come from [`SystemConfig::default()`] or, on hosted builds, a JSON
//! file named by the `MOTIONLIGHT_CONFIG` environment variable.

use serde::{Deserialize, Serialize};

use crate::control::sensitivity::Sensitivity;
use crate::error::ConfigError;
use crate::registers;

/// How the cooldown gate tracks the last accepted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CooldownScope {
    /// Each logical action (up, down, trigger) has its own cooldown window.
    PerAction,
    /// One window shared by every button action.
    Global,
}

/// Which bit of the button register maps to which logical action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonMap {
    pub sensitivity_up: u32,
    pub sensitivity_down: u32,
    pub motion_trigger: u32,
}

impl Default for ButtonMap {
    fn default() -> Self {
        Self {
            sensitivity_up: registers::KEY_SENSITIVITY_UP,
            sensitivity_down: registers::KEY_SENSITIVITY_DOWN,
            motion_trigger: registers::KEY_MOTION_TRIGGER,
        }
    }
}

/// Longest accepted auto-off duration (one hour).
pub const MAX_AUTO_OFF_MS: u32 = 3_600_000;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Sensitivity ---
    /// Sensitivity level at power-on (1-10)
    pub initial_sensitivity: u8,

    // --- Debounce ---
    /// Minimum time between two accepted instances of the same action (µs)
    pub cooldown_us: u64,
    /// Whether the cooldown window is per action or shared
    pub cooldown_scope: CooldownScope,

    // --- Auto-off ---
    /// Light stays on this long after the last confirmed motion (ms)
    pub auto_off_ms: u32,

    // --- Timing ---
    /// Hosted loop pacing (ms); the bare polling loop ignores this
    pub poll_interval_ms: u32,
    /// Elapsed time credited per cycle by the cycle clock (µs)
    pub cycle_step_us: u64,

    // --- I/O map ---
    pub buttons: ButtonMap,
    /// Switch bit that enables the audio alert
    pub alert_switch_mask: u32,
    /// Output bit driving the light relay / LED
    pub light_mask: u32,
    /// Output bit mirroring the audio alert state
    pub status_mask: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            initial_sensitivity: Sensitivity::DEFAULT,

            cooldown_us: 60_000,
            cooldown_scope: CooldownScope::PerAction,

            auto_off_ms: 10_000, // 10 s

            poll_interval_ms: 10,  // 100 Hz
            cycle_step_us: 1_000,

            buttons: ButtonMap::default(),
            alert_switch_mask: registers::SW_AUDIO_ALERT,
            light_mask: registers::LEDR_LIGHT,
            status_mask: registers::LEDR_ALERT_STATUS,
        }
    }
}

impl SystemConfig {
    /// Reject configurations the controller cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(Sensitivity::MIN..=Sensitivity::MAX).contains(&self.initial_sensitivity) {
            return Err(ConfigError::ValidationFailed(
                "initial_sensitivity must be within 1..=10",
            ));
        }
        if self.auto_off_ms == 0 || self.auto_off_ms > MAX_AUTO_OFF_MS {
            return Err(ConfigError::ValidationFailed(
                "auto_off_ms must be within 1..=3_600_000",
            ));
        }
        if self.poll_interval_ms == 0 || self.cycle_step_us == 0 {
            return Err(ConfigError::ValidationFailed(
                "poll_interval_ms and cycle_step_us must be non-zero",
            ));
        }

        let b = &self.buttons;
        if !(b.sensitivity_up.is_power_of_two()
            && b.sensitivity_down.is_power_of_two()
            && b.motion_trigger.is_power_of_two())
        {
            return Err(ConfigError::ValidationFailed("button masks must be single bits"));
        }
        if b.sensitivity_up & b.sensitivity_down != 0
            || b.sensitivity_up & b.motion_trigger != 0
            || b.sensitivity_down & b.motion_trigger != 0
        {
            return Err(ConfigError::ValidationFailed("button masks must not overlap"));
        }

        if !self.alert_switch_mask.is_power_of_two() {
            return Err(ConfigError::ValidationFailed("alert_switch_mask must be a single bit"));
        }
        if self.light_mask == 0 || self.light_mask & self.status_mask != 0 {
            return Err(ConfigError::ValidationFailed(
                "light_mask must be non-zero and distinct from status_mask",
            ));
        }
        Ok(())
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|_| ConfigError::Corrupted)?;
        config.validate()?;
        Ok(config)
    }
}
