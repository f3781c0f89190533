//! Application service, the hexagonal core.
//!
//! [`LightController`] owns every piece of controller state: sensitivity,
//! press counter, motion flag, alert flag, input history and the auto-off
//! state machine.  All I/O flows through port traits injected at call
//! sites, making the entire service testable with mock adapters.
//!
//! ```text
//!   InputPort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!       Clock ──▶ │       LightController        │ ──▶ DisplayPort
//!   TimerPort ◀──▶│ Input · Motion · AutoOff ... │ ──▶ OutputPort
//!                 └──────────────────────────────┘
//! ```

use core::time::Duration;

use log::info;

use crate::config::SystemConfig;
use crate::control::alert::AlertSwitch;
use crate::control::auto_off::{AutoOffTimer, TimerState};
use crate::control::input::{Action, InputReader, ReadOutcome};
use crate::control::motion::{MotionConfirmer, TriggerOutcome};
use crate::control::sensitivity::Sensitivity;

use super::events::{ControlEvent, CycleReport, DisplayStatus};
use super::ports::{Clock, DisplayPort, EventSink, InputPort, OutputPort, TimerPort};

// ───────────────────────────────────────────────────────────────
// LightController
// ───────────────────────────────────────────────────────────────

/// The controller context.  One instance per process; never shared.
pub struct LightController {
    reader: InputReader,
    sensitivity: Sensitivity,
    motion: MotionConfirmer,
    auto_off: AutoOffTimer,
    alert: AlertSwitch,
    /// True from confirmation until the auto-off countdown fires.
    motion_active: bool,
    /// Last value written to the light output.
    light_on: bool,
    cycle_count: u64,
}

impl LightController {
    /// Construct the controller from configuration.
    ///
    /// Does **not** touch hardware; call [`start`](Self::start) next.
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            reader: InputReader::new(config.buttons, config.cooldown_us, config.cooldown_scope),
            sensitivity: Sensitivity::new(config.initial_sensitivity),
            motion: MotionConfirmer::new(),
            auto_off: AutoOffTimer::new(Duration::from_millis(u64::from(config.auto_off_ms))),
            alert: AlertSwitch::new(config.alert_switch_mask),
            motion_active: false,
            light_on: false,
            cycle_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Bring outputs and the countdown peripheral to a known state:
    /// timer stopped with its flag cleared, light and status off.
    pub fn start(
        &mut self,
        hw: &mut (impl OutputPort + TimerPort),
        sink: &mut impl EventSink,
    ) {
        self.auto_off.reset(hw);
        hw.set_light(false);
        hw.set_status(false);
        self.light_on = false;
        sink.emit(&ControlEvent::Started {
            sensitivity: self.sensitivity.level(),
        });
        info!("Controller started, sensitivity {}", self.sensitivity);
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full cycle:
    /// inputs → action → switch → expiry → outputs → display.
    pub fn tick(
        &mut self,
        hw: &mut (impl InputPort + OutputPort + TimerPort + DisplayPort),
        clock: &impl Clock,
        sink: &mut impl EventSink,
    ) -> CycleReport {
        self.cycle_count = self.cycle_count.wrapping_add(1);
        let mut report = CycleReport::default();

        // 1. Sample inputs
        let buttons = hw.read_buttons();
        let switches = hw.read_switches();

        // 2. Debounce → at most one action
        match self.reader.poll(buttons, clock.now_us()) {
            ReadOutcome::Accepted(action) => {
                report.action = Some(action);
                // 3. Dispatch exactly once
                self.dispatch(action, hw, &mut report);
            }
            ReadOutcome::Suppressed(action) => {
                push(&mut report, ControlEvent::ActionSuppressed(action));
            }
            ReadOutcome::Quiet => {}
        }

        // 4. Alert switch
        if let Some(enabled) = self.alert.poll(switches) {
            info!("Audio alert {}", if enabled { "enabled" } else { "disabled" });
            hw.set_status(enabled);
            push(&mut report, ControlEvent::AudioAlertToggled { enabled });
        }

        // 5. Auto-off expiry
        if self.motion_active && self.auto_off.poll(hw) {
            self.auto_off.consume(hw);
            self.motion_active = false;
            info!("Auto-off expired, light off");
            push(&mut report, ControlEvent::LightOff);
        }

        // Reconcile the light with the motion flag
        if self.light_on != self.motion_active {
            hw.set_light(self.motion_active);
            self.light_on = self.motion_active;
        }

        // 6. Display
        let status = self.display_status(hw);
        hw.show(&status);

        for event in &report.events {
            sink.emit(event);
        }
        report
    }

    fn dispatch(&mut self, action: Action, timer: &mut impl TimerPort, report: &mut CycleReport) {
        match action {
            Action::SensitivityUp => {
                self.sensitivity.increase();
                info!("Sensitivity increased: {}", self.sensitivity);
                push(
                    report,
                    ControlEvent::SensitivityChanged {
                        level: self.sensitivity.level(),
                    },
                );
            }
            Action::SensitivityDown => {
                self.sensitivity.decrease();
                info!("Sensitivity decreased: {}", self.sensitivity);
                push(
                    report,
                    ControlEvent::SensitivityChanged {
                        level: self.sensitivity.level(),
                    },
                );
            }
            Action::MotionTrigger => match self.motion.register_trigger(self.sensitivity) {
                TriggerOutcome::Pending { count, threshold } => {
                    info!("Motion press count: {}/{}", count, threshold);
                    push(report, ControlEvent::MotionProgress { count, threshold });
                }
                TriggerOutcome::Confirmed => {
                    let rearmed = self.auto_off.arm(timer);
                    self.motion_active = true;
                    info!(
                        "Motion detected, light on for {:?}{}",
                        self.auto_off.duration(),
                        if rearmed { " (countdown restarted)" } else { "" }
                    );
                    push(report, ControlEvent::MotionConfirmed { rearmed });
                    if self.alert.enabled() {
                        push(report, ControlEvent::AudioAlert);
                    }
                }
            },
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Snapshot for the display collaborator.
    pub fn display_status(&self, timer: &mut impl TimerPort) -> DisplayStatus {
        let remaining_secs = self
            .auto_off
            .remaining(timer)
            .map(|d| d.as_micros().div_ceil(1_000_000).min(u128::from(u32::MAX)) as u32);
        DisplayStatus {
            sensitivity: self.sensitivity.level(),
            remaining_secs,
            light_on: self.light_on,
            audio_alert: self.alert.enabled(),
        }
    }

    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    pub fn press_count(&self) -> u32 {
        self.motion.press_count()
    }

    pub fn motion_active(&self) -> bool {
        self.motion_active
    }

    pub fn light_on(&self) -> bool {
        self.light_on
    }

    pub fn audio_alert_enabled(&self) -> bool {
        self.alert.enabled()
    }

    pub fn timer_state(&self) -> TimerState {
        self.auto_off.state()
    }

    /// Cycles executed since construction.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }
}

/// Record an event; the per-cycle bound is never reached in practice.
fn push(report: &mut CycleReport, event: ControlEvent) {
    if report.events.push(event).is_err() {
        log::warn!("cycle report full, dropped {:?}", event);
    }
}
