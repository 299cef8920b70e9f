//! Unified error types for the display client.
//!
//! Two classes of failure exist. Validation errors are detected locally
//! before a single byte reaches the socket and leave the transport
//! untouched. Transport errors (connect, write) are terminal for the call
//! in flight and are never retried here; the caller decides whether to
//! reconnect.

use core::fmt;
use std::io;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible display operation funnels into this type.
#[derive(Debug)]
pub enum Error {
    /// An argument was out of range; nothing was written.
    Validation(ValidationError),
    /// The daemon socket could not be opened.
    Connect { path: PathBuf, source: io::Error },
    /// Writing a frame to the daemon failed or timed out.
    Write(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "invalid argument: {e}"),
            Self::Connect { path, source } => {
                write!(f, "cannot connect to {}: {source}", path.display())
            }
            Self::Write(e) => write!(f, "write to daemon failed: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Connect { source, .. } => Some(source),
            Self::Write(e) => Some(e),
        }
    }
}

impl Error {
    /// True for errors raised before anything touched the transport.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// ---------------------------------------------------------------------------
// Validation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Brightness above 255.
    Brightness(u32),
    /// Coordinate outside 0..=7.
    Position { x: u32, y: u32 },
    /// Colour channel above 255.
    Channel { r: u32, g: u32, b: u32 },
    /// A full-frame update did not carry exactly 64 pixels.
    PixelCount(usize),
    /// No glyph exists for this value.
    Digit(u32),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brightness(v) => write!(f, "brightness must be 0..255, passed: {v}"),
            Self::Position { x, y } => {
                write!(f, "`x`, `y` must be 0..7, passed `x: {x}`, `y: {y}`")
            }
            Self::Channel { r, g, b } => write!(
                f,
                "`r`, `g`, `b` must be 0..255, passed `r:{r}`, `g:{g}`, `b:{b}`"
            ),
            Self::PixelCount(n) => write!(f, "expected 64 pixels, got {n}"),
            Self::Digit(d) => write!(f, "no glyph for digit {d}"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
