//! Display client and rendering.
//!
//! ```text
//!  glyphs ──┐
//!           ├──▶ Client ──▶ protocol::codec ──▶ Transport
//!  matrix ──┘
//! ```

pub mod client;
pub mod glyphs;
pub mod matrix;
