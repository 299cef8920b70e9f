//! Adapters — concrete implementations of the port traits.
//!
//! | Adapter    | Implements     | Connects to                  |
//! |------------|----------------|------------------------------|
//! | `arrivals` | ArrivalSource  | CLI values, stdin / pipe     |
//! | `time`     | Clock          | `std::time`, `thread::sleep` |

pub mod arrivals;
pub mod time;
