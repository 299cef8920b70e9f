//! Digit glyphs for the two 4×8 panels of the matrix.
//!
//! Two-digit values are drawn as a pair of single-digit glyphs, tens on
//! [`Panel::Left`] and ones on [`Panel::Right`]. Coordinates are physical
//! `(x, y)` as sent to the daemon; the panel split follows the way the
//! pHAT is mounted, not the matrix axes.
//!
//! Drawing only touches the lit cells, so callers clear the display
//! before drawing a new value.

use crate::display::client::Client;
use crate::error::{Result, ValidationError};
use crate::pixel::{BLACK, Pixel, Position};
use crate::protocol::transport::Transport;

/// Half of the matrix a glyph lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Panel {
    Left = 0,
    Right = 1,
}

/// Lit cells of one character, plus cells it drives black.
#[derive(Debug)]
pub struct Glyph {
    pub lit: &'static [Position],
    pub blank: &'static [Position],
}

const fn p(x: u8, y: u8) -> Position {
    Position::at(x, y)
}

macro_rules! digit {
    ($(($x:literal, $y:literal)),* $(,)?) => {
        Glyph {
            lit: &[$(p($x, $y)),*],
            blank: &[],
        }
    };
}

/// Indexed `[panel][digit]`.
static DIGITS: [[Glyph; 10]; 2] = [
    [
        digit![(3, 7), (3, 6), (3, 5), (2, 0), (2, 2), (1, 7), (1, 5), (0, 0), (0, 1), (0, 2)],
        digit![(3, 6), (2, 0), (2, 1), (1, 6), (0, 1)],
        digit![(2, 0), (3, 6), (3, 5), (2, 2), (1, 6), (0, 0), (0, 1), (0, 2)],
        digit![(3, 7), (3, 6), (3, 5), (2, 2), (2, 1), (1, 5), (0, 2), (0, 1), (0, 0)],
        digit![(3, 7), (2, 0), (2, 1), (2, 2), (1, 5), (0, 2)],
        digit![(3, 7), (3, 6), (3, 5), (2, 0), (1, 6), (0, 0), (0, 1), (0, 2)],
        digit![(3, 7), (3, 6), (3, 5), (2, 0), (1, 7), (1, 6), (1, 5), (0, 0), (0, 1), (0, 2)],
        digit![(3, 7), (3, 6), (3, 5), (2, 2), (1, 6), (0, 0)],
        digit![(3, 7), (3, 6), (3, 5), (2, 0), (2, 2), (1, 7), (1, 6), (1, 5), (0, 0), (0, 1), (0, 2)],
        digit![(3, 7), (3, 6), (3, 5), (2, 0), (2, 1), (2, 2), (1, 5), (0, 2)],
    ],
    [
        digit![(3, 2), (3, 1), (3, 0), (2, 5), (2, 7), (1, 2), (1, 0), (0, 5), (0, 6), (0, 7)],
        digit![(3, 1), (2, 5), (2, 6), (1, 1), (0, 6)],
        digit![(3, 1), (3, 0), (2, 5), (2, 7), (1, 1), (0, 5), (0, 6), (0, 7)],
        digit![(3, 2), (3, 1), (3, 0), (2, 6), (2, 7), (1, 0), (0, 5), (0, 6), (0, 7)],
        digit![(3, 2), (2, 5), (2, 6), (2, 7), (1, 0), (0, 7)],
        digit![(3, 2), (3, 1), (3, 0), (2, 5), (1, 1), (0, 5), (0, 6), (0, 7)],
        digit![(3, 2), (3, 1), (3, 0), (2, 5), (1, 2), (1, 1), (1, 0), (0, 5), (0, 6), (0, 7)],
        digit![(3, 2), (3, 1), (3, 0), (2, 7), (1, 1), (0, 5)],
        digit![(3, 2), (3, 1), (3, 0), (2, 5), (2, 7), (1, 2), (1, 1), (1, 0), (0, 5), (0, 6), (0, 7)],
        digit![(3, 2), (3, 1), (3, 0), (2, 5), (2, 6), (2, 7), (1, 0), (0, 7)],
    ],
];

/// Fallback "!" shown for values without a digit rendering. Panel 0 only.
pub static EXCLAMATION: Glyph = Glyph {
    lit: &[
        p(0, 0), p(0, 1), p(0, 2), p(0, 3), p(0, 4), p(0, 6), p(0, 7),
        p(1, 7), p(1, 6), p(1, 5), p(1, 4), p(1, 3), p(1, 1), p(1, 0),
    ],
    blank: &[p(0, 5), p(1, 2)],
};

/// Glyph for `digit` on `panel`, if one exists.
pub fn glyph(digit: u32, panel: Panel) -> Option<&'static Glyph> {
    DIGITS[panel as usize].get(digit as usize)
}

fn draw<T: Transport>(client: &mut Client<T>, g: &Glyph, colour: Pixel) -> Result<()> {
    for &pos in g.lit {
        client.set_pixel_at(pos, colour)?;
    }
    for &pos in g.blank {
        client.set_pixel_at(pos, BLACK)?;
    }
    Ok(())
}

/// Draw a single digit 0–9. Nothing is written for other values.
pub fn draw_digit<T: Transport>(
    client: &mut Client<T>,
    digit: u32,
    panel: Panel,
    colour: Pixel,
) -> Result<()> {
    let g = glyph(digit, panel).ok_or(ValidationError::Digit(digit))?;
    draw(client, g, colour)
}

pub fn draw_exclamation<T: Transport>(client: &mut Client<T>, colour: Pixel) -> Result<()> {
    draw(client, &EXCLAMATION, colour)
}
