//! Pure control components. No I/O, no clocks of their own.
//!
//! Each component owns one slice of controller state and is driven by the
//! [`LightController`](crate::app::service::LightController) in a fixed
//! order every cycle.

pub mod alert;
pub mod auto_off;
pub mod input;
pub mod motion;
pub mod sensitivity;
