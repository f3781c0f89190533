//! Motion-activated lighting controller library.
//!
//! Exposes the pure control logic, the port traits and the board adapters
//! for integration testing and the host simulator.  Raw register access
//! is confined to `adapters::mmio`, behind the `mmio` feature.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod events;
pub mod registers;

pub mod adapters;
pub mod drivers;
