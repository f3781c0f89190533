//! Volatile register adapter for the DE1-SoC style memory map.
//!
//! Bridges the port traits to the parallel I/O ports and the Cortex-A9
//! private timer listed in [`registers`](crate::registers).  This is the
//! only module that dereferences raw addresses.
//!
//! Library-only: the addresses are physical, so the board must run with the
//! I/O region identity-mapped (bare metal, MMU off or flat-mapped).  Under a
//! hosted OS these addresses are not mapped and the hosted binary uses
//! [`SimBoard`](crate::adapters::sim::SimBoard) instead.  A bare-metal loop
//! pairs the board with a [`CycleClock`](crate::adapters::time::CycleClock):
//!
//! ```ignore
//! let clock = CycleClock::new(config.cycle_step_us);
//! let mut board = unsafe { MmioBoard::de1_soc(&config) };
//! controller.start(&mut board, &mut sink);
//! loop {
//!     controller.tick(&mut board, &clock, &mut sink);
//!     clock.advance();
//! }
//! ```

use core::ptr::{read_volatile, write_volatile};
use core::time::Duration;

use log::warn;

use crate::adapters::pins::PinOutputs;
use crate::app::events::DisplayStatus;
use crate::app::ports::{DisplayPort, InputPort, OutputPort, TimerPort};
use crate::config::SystemConfig;
use crate::drivers::masked_output::{MaskedBit, Register};
use crate::drivers::seven_segment;
use crate::registers;

/// A 32-bit device register at a fixed address.
#[derive(Debug, Clone, Copy)]
pub struct MmioRegister(*mut u32);

impl MmioRegister {
    /// # Safety
    /// `addr` must be a mapped, 4-byte aligned device register for the
    /// lifetime of the returned handle.
    pub const unsafe fn new(addr: usize) -> Self {
        Self(addr as *mut u32)
    }
}

impl Register for MmioRegister {
    fn read(&self) -> u32 {
        // SAFETY: validity of the address is the constructor's contract.
        unsafe { read_volatile(self.0) }
    }

    fn write(&self, value: u32) {
        // SAFETY: as above.
        unsafe { write_volatile(self.0, value) }
    }
}

// ── Cortex-A9 private timer ───────────────────────────────────

pub struct PrivateTimer {
    load: MmioRegister,
    counter: MmioRegister,
    control: MmioRegister,
    status: MmioRegister,
}

impl PrivateTimer {
    /// # Safety
    /// `base` must be the mapped private timer block.
    pub unsafe fn new(base: usize) -> Self {
        // SAFETY: offsets stay within the timer block per caller contract.
        unsafe {
            Self {
                load: MmioRegister::new(base + registers::TIMER_LOAD),
                counter: MmioRegister::new(base + registers::TIMER_COUNTER),
                control: MmioRegister::new(base + registers::TIMER_CONTROL),
                status: MmioRegister::new(base + registers::TIMER_STATUS),
            }
        }
    }
}

/// Prescaler and load value for a countdown of `duration`.
///
/// Picks the smallest prescaler whose period fits the 32-bit load register,
/// so the full configured duration is kept up to 256 * 2^32 PERIPHCLK
/// cycles (~5497 s at 200 MHz).  Longer requests are clamped to that.
pub fn timer_setting(duration: Duration) -> (u8, u32) {
    let ticks = duration.as_nanos() * u128::from(registers::TIMER_CLOCK_HZ) / 1_000_000_000;
    let divisor = ticks.div_ceil(u128::from(u32::MAX)).max(1);
    if divisor > 256 {
        warn!("timer: {:?} exceeds the longest prescaled period, clamped", duration);
        return (u8::MAX, u32::MAX);
    }
    let load = u32::try_from(ticks / divisor).unwrap_or(u32::MAX);
    ((divisor - 1) as u8, load)
}

impl TimerPort for PrivateTimer {
    fn start(&mut self, duration: Duration) {
        let (prescaler, load) = timer_setting(duration);
        self.load.write(load);
        self.control.write(
            registers::TIMER_CONTROL_START
                | (u32::from(prescaler) << registers::TIMER_PRESCALER_SHIFT),
        );
    }

    fn stop(&mut self) {
        self.control.write(0);
    }

    fn is_expired(&mut self) -> bool {
        self.status.read() & registers::TIMER_STATUS_EVENT != 0
    }

    fn clear_expired(&mut self) {
        self.status.write(registers::TIMER_STATUS_EVENT);
    }

    fn remaining(&mut self) -> Option<Duration> {
        let control = self.control.read();
        if control & 0b1 == 0 {
            return None;
        }
        let prescaler =
            (control & registers::TIMER_PRESCALER_MASK) >> registers::TIMER_PRESCALER_SHIFT;
        let ticks = u128::from(self.counter.read()) * (u128::from(prescaler) + 1);
        let nanos = ticks * 1_000_000_000 / u128::from(registers::TIMER_CLOCK_HZ);
        Some(Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX)))
    }
}

// ── Board ─────────────────────────────────────────────────────

pub struct MmioBoard {
    keys: MmioRegister,
    switches: MmioRegister,
    hex: MmioRegister,
    outputs: PinOutputs<MaskedBit<MmioRegister>, MaskedBit<MmioRegister>>,
    timer: PrivateTimer,
}

impl MmioBoard {
    /// Board at the fixed DE1-SoC addresses.
    ///
    /// # Safety
    /// The addresses in [`registers`] must be identity-mapped device memory
    /// and no other code may drive the light/status bits or the timer.
    pub unsafe fn de1_soc(config: &SystemConfig) -> Self {
        // SAFETY: forwarded from the caller.
        unsafe {
            let leds = MmioRegister::new(registers::LEDR_BASE);
            Self {
                keys: MmioRegister::new(registers::KEY_BASE),
                switches: MmioRegister::new(registers::SW_BASE),
                hex: MmioRegister::new(registers::HEX3_HEX0_BASE),
                outputs: PinOutputs::new(
                    MaskedBit::new(leds, config.light_mask),
                    MaskedBit::new(leds, config.status_mask),
                ),
                timer: PrivateTimer::new(registers::PRIVATE_TIMER_BASE),
            }
        }
    }
}

impl InputPort for MmioBoard {
    fn read_buttons(&mut self) -> u32 {
        self.keys.read()
    }

    fn read_switches(&mut self) -> u32 {
        self.switches.read()
    }
}

impl OutputPort for MmioBoard {
    fn set_light(&mut self, on: bool) {
        self.outputs.set_light(on);
    }

    fn set_status(&mut self, on: bool) {
        self.outputs.set_status(on);
    }
}

impl TimerPort for MmioBoard {
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

impl DisplayPort for MmioBoard {
    fn show(&mut self, status: &DisplayStatus) {
        self.hex.write(seven_segment::encode_status(status));
    }
}
