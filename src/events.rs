//! Input sample queue.
//!
//! Register snapshots are produced outside the control loop (a key/switch
//! interrupt on target, the stdin feeder thread on the host) and consumed
//! by the loop, one sample per cycle.
//!
//! ```text
//! ┌─────────────┐              ┌──────────────┐              ┌──────────────┐
//! │ KEY/SW IRQ  │─────────────▶│ SAMPLE_QUEUE │─────────────▶│  Main Loop   │
//! │ stdin feed  │ InputSample  │  (bounded)   │  pop_sample  │  (consumer)  │
//! └─────────────┘              └──────────────┘              └──────────────┘
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

/// Maximum number of pending samples.
const SAMPLE_QUEUE_DEPTH: usize = 16;

/// One snapshot of the button and switch registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSample {
    pub buttons: u32,
    pub switches: u32,
}

impl InputSample {
    /// Parse `"<buttons> <switches>"`, each decimal or `0x` hex.
    /// A missing switch field reads as 0.
    pub fn parse(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let buttons = parse_word(fields.next()?)?;
        let switches = match fields.next() {
            Some(f) => parse_word(f)?,
            None => 0,
        };
        if fields.next().is_some() {
            return None;
        }
        Some(Self { buttons, switches })
    }
}

fn parse_word(field: &str) -> Option<u32> {
    match field.strip_prefix("0x").or_else(|| field.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16).ok(),
        None => field.parse().ok(),
    }
}

static SAMPLE_QUEUE: Channel<CriticalSectionRawMutex, InputSample, SAMPLE_QUEUE_DEPTH> =
    Channel::new();

/// Push a sample from producer context.
/// Returns `false` if the queue is full (sample dropped).
pub fn push_sample(sample: InputSample) -> bool {
    SAMPLE_QUEUE.try_send(sample).is_ok()
}

/// Pop the oldest pending sample.
pub fn pop_sample() -> Option<InputSample> {
    SAMPLE_QUEUE.try_receive().ok()
}

/// Number of pending samples.
pub fn queue_len() -> usize {
    SAMPLE_QUEUE.len()
}
