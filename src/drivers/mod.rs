//! Register-level helpers shared by the board adapters.

pub mod masked_output;
pub mod seven_segment;
pub mod soft_timer;
