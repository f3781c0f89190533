//! Seven-segment encoding for the HEX3-HEX0 display word.
//!
//! | Digits    | Shows                                   |
//! |-----------|-----------------------------------------|
//! | HEX3-HEX2 | auto-off seconds remaining (00 if idle) |
//! | HEX1-HEX0 | sensitivity level                       |
//!
//! Segment bit order is `.gfedcba`, active high.

use crate::app::events::DisplayStatus;

/// Segment patterns for decimal digits 0-9.
pub const DIGITS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// Two decimal digits; values above 99 saturate to 99.
pub fn encode_pair(value: u32) -> u16 {
    let v = value.min(99) as usize;
    (u16::from(DIGITS[v / 10]) << 8) | u16::from(DIGITS[v % 10])
}

/// Full 32-bit HEX3-HEX0 word for a display status.
pub fn encode_status(status: &DisplayStatus) -> u32 {
    let secs = status.remaining_secs.unwrap_or(0);
    (u32::from(encode_pair(secs)) << 16) | u32::from(encode_pair(u32::from(status.sensitivity)))
}
