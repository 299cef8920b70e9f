//! Unicorn ETA library.
//!
//! Client for the `unicornd` LED daemon plus the rendering pipeline that
//! turns digit glyphs and supersampled shapes into pixel commands. The
//! binary in `main.rs` is a thin shell over these modules.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod pixel;
pub mod protocol;

pub use display::client::Client;
pub use error::{Error, Result, ValidationError};
pub use pixel::{Pixel, Position};
