//! Memory-mapped register addresses and bit assignments.
//!
//! Single source of truth: every adapter references this module rather than
//! hard-coding addresses or masks.  Addresses follow the DE1-SoC lightweight
//! FPGA bridge and the Cortex-A9 MPCore private peripheral region.

// ---------------------------------------------------------------------------
// Parallel I/O ports (lightweight HPS-to-FPGA bridge)
// ---------------------------------------------------------------------------

/// Red LED bank (LEDR9-0), read/write.
pub const LEDR_BASE: usize = 0xFF20_0000;
/// Seven-segment digits HEX3-HEX0, one byte per digit.
pub const HEX3_HEX0_BASE: usize = 0xFF20_0020;
/// Slide switches (SW9-0), read-only.
pub const SW_BASE: usize = 0xFF20_0040;
/// Push buttons (KEY3-0), read-only, active high after the PIO.
pub const KEY_BASE: usize = 0xFF20_0050;

// ---------------------------------------------------------------------------
// Cortex-A9 private timer
// ---------------------------------------------------------------------------

pub const PRIVATE_TIMER_BASE: usize = 0xFFFE_C600;
/// Offsets from [`PRIVATE_TIMER_BASE`].
pub const TIMER_LOAD: usize = 0x00;
pub const TIMER_COUNTER: usize = 0x04;
pub const TIMER_CONTROL: usize = 0x08;
pub const TIMER_STATUS: usize = 0x0C;

/// Control: E (enable) | A (auto-reload).
pub const TIMER_CONTROL_START: u32 = 0b011;
/// Control bits 15:8: prescaler. The counter decrements every
/// `prescaler + 1` PERIPHCLK cycles.
pub const TIMER_PRESCALER_SHIFT: u32 = 8;
pub const TIMER_PRESCALER_MASK: u32 = 0xFF << TIMER_PRESCALER_SHIFT;
/// Status: F (event flag), write 1 to clear.
pub const TIMER_STATUS_EVENT: u32 = 0b1;
/// Private timer clock (PERIPHCLK) in Hz.
pub const TIMER_CLOCK_HZ: u64 = 200_000_000;

// ---------------------------------------------------------------------------
// Bit assignments
// ---------------------------------------------------------------------------

/// KEY0: raise sensitivity.
pub const KEY_SENSITIVITY_UP: u32 = 1 << 0;
/// KEY1: lower sensitivity.
pub const KEY_SENSITIVITY_DOWN: u32 = 1 << 1;
/// KEY2: simulated motion sensor pulse.
pub const KEY_MOTION_TRIGGER: u32 = 1 << 2;

/// SW0: audio alert enable.
pub const SW_AUDIO_ALERT: u32 = 1 << 0;

/// LEDR0: light relay.
pub const LEDR_LIGHT: u32 = 1 << 0;
/// LEDR1: audio alert status indicator.
pub const LEDR_ALERT_STATUS: u32 = 1 << 1;
