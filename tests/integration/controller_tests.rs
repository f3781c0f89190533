//! LightController tests against the recording [`MockBoard`].

use std::time::Duration;

use motionlight::adapters::time::ManualClock;
use motionlight::app::events::{ControlEvent, CycleReport, MAX_EVENTS_PER_CYCLE};
use motionlight::app::service::LightController;
use motionlight::config::{CooldownScope, SystemConfig};
use motionlight::control::auto_off::TimerState;
use motionlight::control::input::Action;

use super::mock_hw::{HwCall, MockBoard, RecordingSink};

const UP: u32 = 0b001;
const DOWN: u32 = 0b010;
const MOTION: u32 = 0b100;

// ── Harness ───────────────────────────────────────────────────

struct Rig {
    ctl: LightController,
    board: MockBoard,
    clock: ManualClock,
    sink: RecordingSink,
}

impl Rig {
    fn new(config: SystemConfig) -> Self {
        let mut board = MockBoard::new();
        let mut sink = RecordingSink::new();
        let mut ctl = LightController::new(&config);
        ctl.start(&mut board, &mut sink);
        Self {
            ctl,
            board,
            clock: ManualClock::new(),
            sink,
        }
    }

    fn with_sensitivity(level: u8) -> Self {
        Self::new(SystemConfig {
            initial_sensitivity: level,
            ..Default::default()
        })
    }

    fn cycle(&mut self) -> CycleReport {
        self.ctl.tick(&mut self.board, &self.clock, &mut self.sink)
    }

    /// Press-and-release well outside the cooldown window.
    fn press(&mut self, buttons: u32) -> CycleReport {
        self.clock.advance(Duration::from_millis(100));
        self.board.buttons = buttons;
        let report = self.cycle();
        self.board.buttons = 0;
        self.cycle();
        report
    }
}

// ── Lifecycle ─────────────────────────────────────────────────

#[test]
fn start_quiets_timer_and_outputs() {
    let rig = Rig::with_sensitivity(5);
    assert_eq!(
        rig.board.calls,
        vec![
            HwCall::TimerStop,
            HwCall::TimerClear,
            HwCall::SetLight(false),
            HwCall::SetStatus(false),
        ]
    );
    assert_eq!(rig.sink.events, vec![ControlEvent::Started { sensitivity: 5 }]);
    assert_eq!(rig.ctl.timer_state(), TimerState::Idle);
}

#[test]
fn every_cycle_updates_the_display() {
    let mut rig = Rig::with_sensitivity(5);
    for _ in 0..4 {
        rig.cycle();
    }
    assert_eq!(rig.board.displays.len(), 4);
    assert_eq!(rig.ctl.cycle_count(), 4);
    let shown = rig.board.last_display().copied();
    assert_eq!(shown.map(|d| d.sensitivity), Some(5));
    assert_eq!(shown.and_then(|d| d.remaining_secs), None);
}

// ── Sensitivity ───────────────────────────────────────────────

#[test]
fn sensitivity_up_saturates_at_ten() {
    let mut rig = Rig::with_sensitivity(9);
    rig.press(UP);
    rig.press(UP);
    assert_eq!(rig.ctl.sensitivity().level(), 10);
    assert_eq!(
        rig.sink
            .count(|e| *e == ControlEvent::SensitivityChanged { level: 10 }),
        2
    );
}

#[test]
fn sensitivity_down_saturates_at_one() {
    let mut rig = Rig::with_sensitivity(2);
    for _ in 0..3 {
        rig.press(DOWN);
    }
    assert_eq!(rig.ctl.sensitivity().level(), 1);
}

// ── Edge detection and cooldown ───────────────────────────────

#[test]
fn held_button_acts_once() {
    let mut rig = Rig::with_sensitivity(5);
    rig.board.buttons = UP;
    let mut actions = 0;
    for _ in 0..20 {
        rig.clock.advance(Duration::from_millis(100));
        if rig.cycle().action.is_some() {
            actions += 1;
        }
    }
    assert_eq!(actions, 1);
    assert_eq!(rig.ctl.sensitivity().level(), 6);
}

#[test]
fn fast_repeat_is_suppressed_and_not_replayed() {
    let mut rig = Rig::with_sensitivity(5);
    rig.board.buttons = UP;
    assert_eq!(rig.cycle().action, Some(Action::SensitivityUp));
    rig.board.buttons = 0;
    rig.cycle();

    rig.clock.advance(Duration::from_millis(10));
    rig.board.buttons = UP;
    let report = rig.cycle();
    assert_eq!(report.action, None);
    assert!(report.contains(&ControlEvent::ActionSuppressed(Action::SensitivityUp)));
    assert_eq!(rig.ctl.sensitivity().level(), 6);

    // Still held once the window has passed: the edge is gone.
    rig.clock.advance(Duration::from_millis(100));
    assert_eq!(rig.cycle().action, None);
    assert_eq!(rig.ctl.sensitivity().level(), 6);
}

#[test]
fn simultaneous_presses_take_highest_priority_only() {
    let mut rig = Rig::with_sensitivity(5);
    let report = rig.press(UP | DOWN | MOTION);
    assert_eq!(report.action, Some(Action::SensitivityUp));
    assert_eq!(rig.ctl.sensitivity().level(), 6);
    assert_eq!(rig.ctl.press_count(), 0);
}

#[test]
fn per_action_cooldowns_are_independent() {
    let mut rig = Rig::with_sensitivity(5);
    rig.board.buttons = UP;
    rig.cycle();
    rig.clock.advance(Duration::from_millis(5));
    rig.board.buttons = DOWN;
    assert_eq!(rig.cycle().action, Some(Action::SensitivityDown));
}

#[test]
fn trigger_is_not_lost_behind_a_cooling_button() {
    let mut rig = Rig::with_sensitivity(10);
    rig.board.buttons = UP;
    rig.cycle();
    rig.board.buttons = 0;
    rig.cycle();

    rig.clock.advance(Duration::from_millis(5));
    rig.board.buttons = UP | MOTION;
    let report = rig.cycle();
    assert_eq!(report.action, Some(Action::MotionTrigger));
    assert!(report.motion_confirmed());
    assert!(rig.ctl.motion_active());
    assert!(rig.board.light);
}

#[test]
fn global_cooldown_blocks_other_actions() {
    let mut rig = Rig::new(SystemConfig {
        cooldown_scope: CooldownScope::Global,
        ..Default::default()
    });
    rig.board.buttons = UP;
    rig.cycle();
    rig.clock.advance(Duration::from_millis(5));
    rig.board.buttons = DOWN;
    let report = rig.cycle();
    assert_eq!(report.action, None);
    assert!(report.contains(&ControlEvent::ActionSuppressed(Action::SensitivityDown)));
}

// ── Motion confirmation ───────────────────────────────────────

#[test]
fn motion_needs_threshold_presses() {
    let mut rig = Rig::with_sensitivity(5);
    for n in 1..=5u32 {
        let report = rig.press(MOTION);
        assert!(report.contains(&ControlEvent::MotionProgress {
            count: n,
            threshold: 6
        }));
        assert!(!rig.board.light);
    }
    assert_eq!(rig.ctl.press_count(), 5);
    assert_eq!(rig.board.timer_starts(), 0);

    let report = rig.press(MOTION);
    assert!(report.motion_confirmed());
    assert!(rig.board.light);
    assert!(rig.ctl.motion_active());
    assert_eq!(rig.ctl.press_count(), 0);
    assert_eq!(rig.board.count(HwCall::TimerStart(Duration::from_secs(10))), 1);
    assert_eq!(rig.ctl.timer_state(), TimerState::Running);
}

#[test]
fn sensitivity_change_between_presses_uses_current_threshold() {
    let mut rig = Rig::with_sensitivity(5);
    rig.press(MOTION);
    rig.press(MOTION);
    // Raising to 9 drops the threshold to 2; the next press confirms.
    for _ in 0..4 {
        rig.press(UP);
    }
    assert!(rig.press(MOTION).motion_confirmed());
}

#[test]
fn retrigger_restarts_countdown() {
    let mut rig = Rig::with_sensitivity(10);
    let first = rig.press(MOTION);
    assert!(first.contains(&ControlEvent::MotionConfirmed { rearmed: false }));

    rig.board.calls.clear();
    let second = rig.press(MOTION);
    assert!(second.contains(&ControlEvent::MotionConfirmed { rearmed: true }));
    assert_eq!(
        rig.board.calls,
        vec![
            HwCall::TimerStop,
            HwCall::TimerClear,
            HwCall::TimerStart(Duration::from_secs(10)),
        ]
    );
    assert!(rig.board.light);
}

// ── Auto-off ──────────────────────────────────────────────────

#[test]
fn expiry_turns_light_off_and_acknowledges() {
    let mut rig = Rig::with_sensitivity(10);
    rig.press(MOTION);
    rig.board.calls.clear();

    rig.board.expire();
    let report = rig.cycle();
    assert!(report.contains(&ControlEvent::LightOff));
    assert!(!rig.board.light);
    assert!(!rig.board.timer_flag());
    assert!(!rig.board.timer_running());
    assert_eq!(
        rig.board.calls,
        vec![HwCall::TimerStop, HwCall::TimerClear, HwCall::SetLight(false)]
    );
    assert_eq!(rig.ctl.timer_state(), TimerState::Idle);
    assert!(!rig.ctl.motion_active());

    // No repeat on later cycles.
    assert!(!rig.cycle().contains(&ControlEvent::LightOff));
}

#[test]
fn stale_flag_without_motion_is_ignored() {
    let mut rig = Rig::with_sensitivity(10);
    rig.board.expire();
    for _ in 0..3 {
        assert!(!rig.cycle().contains(&ControlEvent::LightOff));
    }
    assert!(!rig.board.light);

    // Arming clears the stale flag before the countdown starts.
    rig.press(MOTION);
    assert!(rig.board.light);
    assert!(!rig.board.timer_flag());
    assert!(!rig.cycle().contains(&ControlEvent::LightOff));
    assert!(rig.board.light);
}

#[test]
fn display_rounds_remaining_time_up() {
    let mut rig = Rig::with_sensitivity(10);
    rig.press(MOTION);
    rig.board.set_remaining(Duration::from_millis(3_200));
    rig.cycle();
    assert_eq!(
        rig.board.last_display().and_then(|d| d.remaining_secs),
        Some(4)
    );
    assert_eq!(rig.board.last_display().map(|d| d.light_on), Some(true));
}

// ── Audio alert ───────────────────────────────────────────────

#[test]
fn alert_switch_toggles_on_change_only() {
    let mut rig = Rig::with_sensitivity(5);
    rig.board.switches = 1;
    assert!(rig.cycle().contains(&ControlEvent::AudioAlertToggled { enabled: true }));
    assert!(rig.board.status);
    assert!(rig.cycle().events.is_empty());

    rig.board.switches = 0;
    assert!(rig.cycle().contains(&ControlEvent::AudioAlertToggled { enabled: false }));
    assert!(!rig.board.status);
    assert!(!rig.ctl.audio_alert_enabled());
}

#[test]
fn unrelated_switches_are_ignored() {
    let mut rig = Rig::with_sensitivity(5);
    rig.board.switches = 0b1110;
    assert!(rig.cycle().events.is_empty());
    assert!(!rig.ctl.audio_alert_enabled());
}

#[test]
fn audio_alert_fires_with_motion_only_when_enabled() {
    let mut rig = Rig::with_sensitivity(10);
    let quiet = rig.press(MOTION);
    assert!(!quiet.contains(&ControlEvent::AudioAlert));

    rig.board.switches = 1;
    rig.cycle();
    let loud = rig.press(MOTION);
    assert!(loud.contains(&ControlEvent::AudioAlert));
}

#[test]
fn report_stays_within_bound() {
    let mut rig = Rig::with_sensitivity(10);
    rig.board.expire();
    rig.board.switches = 1;
    rig.board.buttons = MOTION;
    let report = rig.cycle();
    assert!(report.events.len() <= MAX_EVENTS_PER_CYCLE);
    assert!(report.motion_confirmed());
    assert!(report.contains(&ControlEvent::AudioAlertToggled { enabled: true }));
}
