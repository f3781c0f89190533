#![no_main]

//! Drive the controller with arbitrary register traffic and clock steps.
//!
//! Each 9-byte chunk is one cycle: buttons (u32 LE), switches (u32 LE),
//! and a clock step in 10 ms units.

use libfuzzer_sys::fuzz_target;

use motionlight::adapters::sim::SimBoard;
use motionlight::adapters::time::ManualClock;
use motionlight::app::events::{ControlEvent, MAX_EVENTS_PER_CYCLE};
use motionlight::app::ports::EventSink;
use motionlight::app::service::LightController;
use motionlight::config::SystemConfig;

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &ControlEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let Some((&level, rest)) = data.split_first() else {
        return;
    };
    let clock = ManualClock::new();
    let config = SystemConfig {
        initial_sensitivity: level % 10 + 1,
        ..Default::default()
    };
    let mut board = SimBoard::new(&config, &clock);
    let mut ctl = LightController::new(&config);
    ctl.start(&mut board, &mut NullSink);

    for chunk in rest.chunks_exact(9) {
        let buttons = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let switches = u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);
        clock.advance_us(u64::from(chunk[8]) * 10_000);

        board.set_inputs(buttons, switches);
        let report = ctl.tick(&mut board, &clock, &mut NullSink);

        assert!(report.events.len() <= MAX_EVENTS_PER_CYCLE);
        assert_eq!(board.light_on(), ctl.motion_active());
        assert!((1..=10).contains(&ctl.sensitivity().level()));
    }
});
