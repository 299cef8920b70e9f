//! Wire protocol for `unicornd`.
//!
//! ```text
//!  Command ──▶ codec::encode ──▶ Frame (≤193 B) ──▶ Transport::write_frame
//! ```
//!
//! The protocol carries no request id or resynchronisation marker, so
//! frames from two writers must never interleave. The client owns its
//! transport and takes `&mut self` for every command.

pub mod codec;
pub mod transport;
