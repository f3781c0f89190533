//! Mock board adapter for integration tests.
//!
//! Records every output and timer call so tests can assert on the full
//! command history.  Timer expiry is raised by hand with [`MockBoard::expire`].

use std::time::Duration;

use motionlight::app::events::{ControlEvent, DisplayStatus};
use motionlight::app::ports::{DisplayPort, EventSink, InputPort, OutputPort, TimerPort};

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwCall {
    SetLight(bool),
    SetStatus(bool),
    TimerStart(Duration),
    TimerStop,
    TimerClear,
}

// ── MockBoard ─────────────────────────────────────────────────

pub struct MockBoard {
    pub buttons: u32,
    pub switches: u32,
    pub calls: Vec<HwCall>,
    pub displays: Vec<DisplayStatus>,
    pub light: bool,
    pub status: bool,
    timer_running: bool,
    timer_flag: bool,
    timer_remaining: Option<Duration>,
}

#[allow(dead_code)]
impl MockBoard {
    pub fn new() -> Self {
        Self {
            buttons: 0,
            switches: 0,
            calls: Vec::new(),
            displays: Vec::new(),
            light: false,
            status: false,
            timer_running: false,
            timer_flag: false,
            timer_remaining: None,
        }
    }

    /// Latch the countdown's expired flag, as the peripheral would.
    pub fn expire(&mut self) {
        self.timer_flag = true;
        self.timer_remaining = Some(Duration::ZERO);
    }

    pub fn set_remaining(&mut self, remaining: Duration) {
        self.timer_remaining = Some(remaining);
    }

    pub fn timer_running(&self) -> bool {
        self.timer_running
    }

    pub fn timer_flag(&self) -> bool {
        self.timer_flag
    }

    pub fn count(&self, call: HwCall) -> usize {
        self.calls.iter().filter(|c| **c == call).count()
    }

    pub fn timer_starts(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HwCall::TimerStart(_)))
            .count()
    }

    pub fn last_display(&self) -> Option<&DisplayStatus> {
        self.displays.last()
    }
}

impl Default for MockBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPort for MockBoard {
    fn read_buttons(&mut self) -> u32 {
        self.buttons
    }

    fn read_switches(&mut self) -> u32 {
        self.switches
    }
}

impl OutputPort for MockBoard {
    fn set_light(&mut self, on: bool) {
        self.light = on;
        self.calls.push(HwCall::SetLight(on));
    }

    fn set_status(&mut self, on: bool) {
        self.status = on;
        self.calls.push(HwCall::SetStatus(on));
    }
}

impl TimerPort for MockBoard {
    fn start(&mut self, duration: Duration) {
        self.timer_running = true;
        self.timer_remaining = Some(duration);
        self.calls.push(HwCall::TimerStart(duration));
    }

    fn stop(&mut self) {
        self.timer_running = false;
        self.calls.push(HwCall::TimerStop);
    }

    fn is_expired(&mut self) -> bool {
        self.timer_flag
    }

    fn clear_expired(&mut self) {
        self.timer_flag = false;
        self.calls.push(HwCall::TimerClear);
    }

    fn remaining(&mut self) -> Option<Duration> {
        if self.timer_running {
            self.timer_remaining
        } else {
            None
        }
    }
}

impl DisplayPort for MockBoard {
    fn show(&mut self, status: &DisplayStatus) {
        self.displays.push(*status);
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<ControlEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&ControlEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &ControlEvent) {
        self.events.push(*event);
    }
}
