//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter     | Implements                  | Connects to                 |
//! |-------------|-----------------------------|-----------------------------|
//! | `gpio_door` | Door                        | reed switch + latch pins    |
//! | `log_sink`  | EventSink                   | `log` output                |
//! | `sim`       | Door, DirtFilter,           | in-memory simulation        |
//! |             | WaterPump, Engine           |                             |

pub mod gpio_door;
pub mod log_sink;
pub mod sim;
