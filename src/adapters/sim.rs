//! In-memory board for hosted simulation.
//!
//! Input registers are plain values set by the caller (the stdin feeder in
//! `main`, or a test).  The LED bank is a shared register word driven
//! through [`MaskedBit`] pins, the countdown is a [`SoftTimer`] on the
//! injected clock, and the display keeps the encoded HEX word.

use core::cell::Cell;
use core::time::Duration;
use std::rc::Rc;

use embedded_hal::digital::StatefulOutputPin;
use log::info;

use crate::adapters::pins::PinOutputs;
use crate::app::events::DisplayStatus;
use crate::app::ports::{Clock, DisplayPort, InputPort, OutputPort, TimerPort};
use crate::config::SystemConfig;
use crate::drivers::masked_output::{MaskedBit, Register};
use crate::drivers::seven_segment;
use crate::drivers::soft_timer::SoftTimer;

type LedBit = MaskedBit<Rc<Cell<u32>>>;

pub struct SimBoard<C: Clock> {
    buttons: u32,
    switches: u32,
    leds: Rc<Cell<u32>>,
    outputs: PinOutputs<LedBit, LedBit>,
    timer: SoftTimer<C>,
    hex_word: u32,
    last_display: Option<DisplayStatus>,
}

impl<C: Clock> SimBoard<C> {
    pub fn new(config: &SystemConfig, clock: C) -> Self {
        let leds = Rc::new(Cell::new(0));
        let outputs = PinOutputs::new(
            MaskedBit::new(Rc::clone(&leds), config.light_mask),
            MaskedBit::new(Rc::clone(&leds), config.status_mask),
        );
        Self {
            buttons: 0,
            switches: 0,
            leds,
            outputs,
            timer: SoftTimer::new(clock),
            hex_word: 0,
            last_display: None,
        }
    }

    /// Latch new input register values; they persist until the next call.
    pub fn set_inputs(&mut self, buttons: u32, switches: u32) {
        self.buttons = buttons;
        self.switches = switches;
    }

    pub fn led_register(&self) -> u32 {
        self.leds.read()
    }

    /// Overwrite the LED bank, e.g. to model another owner's bits.
    pub fn set_led_register(&mut self, value: u32) {
        self.leds.write(value);
    }

    pub fn light_on(&mut self) -> bool {
        self.outputs.light_mut().is_set_high().unwrap_or(false)
    }

    pub fn status_on(&mut self) -> bool {
        self.outputs.status_mut().is_set_high().unwrap_or(false)
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn hex_word(&self) -> u32 {
        self.hex_word
    }

    pub fn last_display(&self) -> Option<DisplayStatus> {
        self.last_display
    }
}

impl<C: Clock> InputPort for SimBoard<C> {
    fn read_buttons(&mut self) -> u32 {
        self.buttons
    }

    fn read_switches(&mut self) -> u32 {
        self.switches
    }
}

impl<C: Clock> OutputPort for SimBoard<C> {
    fn set_light(&mut self, on: bool) {
        self.outputs.set_light(on);
    }

    fn set_status(&mut self, on: bool) {
        self.outputs.set_status(on);
    }
}

impl<C: Clock> TimerPort for SimBoard<C> {
    fn start(&mut self, duration: Duration) {
        self.timer.start(duration);
    }

    fn stop(&mut self) {
        self.timer.stop();
    }

    fn is_expired(&mut self) -> bool {
        self.timer.is_expired()
    }

    fn clear_expired(&mut self) {
        self.timer.clear_expired();
    }

    fn remaining(&mut self) -> Option<Duration> {
        self.timer.remaining()
    }
}

impl<C: Clock> DisplayPort for SimBoard<C> {
    fn show(&mut self, status: &DisplayStatus) {
        self.hex_word = seven_segment::encode_status(status);
        if self.last_display.as_ref() != Some(status) {
            info!(
                "HEX   | {:02} {:02} | light={} alert={}",
                status.remaining_secs.unwrap_or(0).min(99),
                status.sensitivity,
                if status.light_on { "ON" } else { "off" },
                if status.audio_alert { "ON" } else { "off" },
            );
            self.last_display = Some(*status);
        }
    }
}
