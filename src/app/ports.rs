//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ LightController (domain)
//! ```
//!
//! Driven adapters (register banks, timers, clocks, event sinks) implement
//! these traits.  The [`LightController`](super::service::LightController)
//! consumes them via generics, so the domain core never touches hardware
//! directly.
//!
//! None of the ports are fallible: register reads always succeed and
//! register writes have no failure signal on this platform.

use core::time::Duration;

use super::events::{ControlEvent, DisplayStatus};

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Raw input registers, sampled once per cycle.
pub trait InputPort {
    /// Push-button bank.  Bit layout per [`ButtonMap`](crate::config::ButtonMap).
    fn read_buttons(&mut self) -> u32;

    /// Slide-switch bank.
    fn read_switches(&mut self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Output bits owned by the controller.
///
/// Implementations MUST set/clear only the bit in question; other bits of a
/// shared output register belong to someone else.
pub trait OutputPort {
    /// Drive the light relay / LED.
    fn set_light(&mut self, on: bool);

    /// Drive the secondary status indicator.
    fn set_status(&mut self, on: bool);
}

// ───────────────────────────────────────────────────────────────
// Timer port (driven adapter: countdown peripheral)
// ───────────────────────────────────────────────────────────────

/// One-channel countdown peripheral.
///
/// The expired flag is sticky: once [`is_expired`](Self::is_expired)
/// reports `true` it keeps doing so until [`clear_expired`](Self::clear_expired).
pub trait TimerPort {
    /// Load `duration` and start counting down.
    fn start(&mut self, duration: Duration);

    /// Stop counting.  Does not touch the expired flag.
    fn stop(&mut self);

    /// Whether the countdown has reached zero since the flag was last cleared.
    fn is_expired(&mut self) -> bool;

    /// Acknowledge an expiry.
    fn clear_expired(&mut self);

    /// Time left before expiry, or `None` when stopped.
    fn remaining(&mut self) -> Option<Duration>;
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic elapsed-time source.  Used only by the cooldown gate.
pub trait Clock {
    /// Microseconds since an arbitrary fixed origin.  Never decreases.
    fn now_us(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}

// ───────────────────────────────────────────────────────────────
// Display port (observability only)
// ───────────────────────────────────────────────────────────────

/// Numeric display collaborator.  Refreshed at the end of every cycle.
pub trait DisplayPort {
    fn show(&mut self, status: &DisplayStatus);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`ControlEvent`]s through this port.
/// Adapters decide where they go (serial log, test recorder, ...).
pub trait EventSink {
    fn emit(&mut self, event: &ControlEvent);
}
