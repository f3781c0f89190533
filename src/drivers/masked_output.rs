//! Single-bit outputs on a shared register.
//!
//! The LED bank is one 32-bit register with several independent users.
//! [`MaskedBit`] owns exactly one mask within it and exposes it as an
//! `embedded_hal` output pin; every write is a read-modify-write that
//! leaves the remaining bits untouched.

use core::cell::Cell;
use core::convert::Infallible;
use std::rc::Rc;

use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

/// A 32-bit read/write register.
pub trait Register {
    fn read(&self) -> u32;
    fn write(&self, value: u32);

    fn set_bits(&self, mask: u32) {
        self.write(self.read() | mask);
    }

    fn clear_bits(&self, mask: u32) {
        self.write(self.read() & !mask);
    }
}

impl Register for Cell<u32> {
    fn read(&self) -> u32 {
        self.get()
    }

    fn write(&self, value: u32) {
        self.set(value);
    }
}

impl<R: Register + ?Sized> Register for Rc<R> {
    fn read(&self) -> u32 {
        (**self).read()
    }

    fn write(&self, value: u32) {
        (**self).write(value);
    }
}

/// One bit (or group of bits) of a shared register, driven as a pin.
pub struct MaskedBit<R: Register> {
    reg: R,
    mask: u32,
}

impl<R: Register> MaskedBit<R> {
    pub fn new(reg: R, mask: u32) -> Self {
        Self { reg, mask }
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }
}

impl<R: Register> ErrorType for MaskedBit<R> {
    type Error = Infallible;
}

impl<R: Register> OutputPin for MaskedBit<R> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.reg.clear_bits(self.mask);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.reg.set_bits(self.mask);
        Ok(())
    }
}

impl<R: Register> StatefulOutputPin for MaskedBit<R> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.reg.read() & self.mask == self.mask)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.reg.read() & self.mask == 0)
    }
}
