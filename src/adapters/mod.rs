//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements                         | Connects to                 |
//! |------------|------------------------------------|-----------------------------|
//! | `log_sink` | EventSink                          | `log` facade                |
//! | `mmio`     | Input/Output/Timer/DisplayPort     | DE1-SoC registers (feature) |
//! | `pins`     | OutputPort                         | any `embedded_hal` pins     |
//! | `sim`      | Input/Output/Timer/DisplayPort     | in-memory registers         |
//! | `time`     | Clock                              | Instant / cycle / manual    |

pub mod log_sink;
#[cfg(feature = "mmio")]
pub mod mmio;
pub mod pins;
pub mod sim;
pub mod time;
