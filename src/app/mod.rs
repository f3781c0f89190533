//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the orchestration for the motion light: the
//! per-cycle sequencing of input debounce, sensitivity, motion
//! confirmation, alert switch and auto-off.  All interaction with
//! hardware happens through **port traits** defined in [`ports`], keeping
//! this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
