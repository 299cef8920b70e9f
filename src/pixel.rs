//! Colour and position primitives.
//!
//! A [`Pixel`] always holds valid channels: wide inputs go through
//! [`Pixel::new`], which rejects anything above 255 instead of clamping.
//! A [`Position`] is always inside the 8×8 matrix for the same reason.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Matrix edge length in physical pixels.
pub const WIDTH: usize = 8;

/// Number of physical pixels.
pub const PIXEL_COUNT: usize = WIDTH * WIDTH;

/// RGB colour, one byte per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    /// Colour from bytes; cannot fail.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Colour from wide integers. Any channel above 255 is an error.
    pub fn new(r: u32, g: u32, b: u32) -> Result<Self, ValidationError> {
        match (u8::try_from(r), u8::try_from(g), u8::try_from(b)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self { r, g, b }),
            _ => Err(ValidationError::Channel { r, g, b }),
        }
    }

    pub const fn is_black(self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }
}

/// Physical matrix coordinate, both axes 0..=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    pub fn new(x: u32, y: u32) -> Result<Self, ValidationError> {
        if x as usize >= WIDTH || y as usize >= WIDTH {
            return Err(ValidationError::Position { x, y });
        }
        Ok(Self {
            x: x as u8,
            y: y as u8,
        })
    }

    /// Const constructor for static tables. Out-of-range input fails
    /// at compile time when used in a `static`.
    pub const fn at(x: u8, y: u8) -> Self {
        assert!((x as usize) < WIDTH && (y as usize) < WIDTH);
        Self { x, y }
    }

    pub const fn x(self) -> u8 {
        self.x
    }

    pub const fn y(self) -> u8 {
        self.y
    }
}

/// Byte order of the three colour bytes on the wire.
///
/// The reference `unicornd` swaps its red and green labels, so frames
/// must carry green first for the LEDs to show the intended colour.
/// `Rgb` exists for a daemon with that defect fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelOrder {
    #[default]
    Grb,
    Rgb,
}

impl ChannelOrder {
    /// Channel bytes in wire order.
    pub const fn apply(self, p: Pixel) -> [u8; 3] {
        match self {
            Self::Grb => [p.g, p.r, p.b],
            Self::Rgb => [p.r, p.g, p.b],
        }
    }
}

// ── Well-known colours ────────────────────────────────────────

pub const RED: Pixel = Pixel::rgb(230, 0, 0);
pub const ORANGE: Pixel = Pixel::rgb(230, 150, 0);
pub const GREEN: Pixel = Pixel::rgb(0, 255, 0);
pub const BLUE: Pixel = Pixel::rgb(0, 0, 255);
pub const CYAN: Pixel = Pixel::rgb(0, 255, 255);
pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);
pub const WHITE: Pixel = Pixel::rgb(255, 230, 230);
