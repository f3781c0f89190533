//! [`OutputPort`] over any pair of `embedded_hal` output pins.
//!
//! Lets the controller drive GPIO from any HAL as well as the masked
//! register bits in [`drivers::masked_output`](crate::drivers::masked_output).

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::app::ports::OutputPort;

pub struct PinOutputs<L: OutputPin, S: OutputPin> {
    light: L,
    status: S,
}

impl<L: OutputPin, S: OutputPin> PinOutputs<L, S> {
    pub fn new(light: L, status: S) -> Self {
        Self { light, status }
    }

    pub fn light_mut(&mut self) -> &mut L {
        &mut self.light
    }

    pub fn status_mut(&mut self) -> &mut S {
        &mut self.status
    }
}

fn drive<P: OutputPin>(pin: &mut P, on: bool, name: &str) {
    let result = if on { pin.set_high() } else { pin.set_low() };
    if let Err(e) = result {
        warn!("{} pin write failed: {:?}", name, e);
    }
}

impl<L: OutputPin, S: OutputPin> OutputPort for PinOutputs<L, S> {
    fn set_light(&mut self, on: bool) {
        drive(&mut self.light, on, "light");
    }

    fn set_status(&mut self, on: bool) {
        drive(&mut self.status, on, "status");
    }
}
