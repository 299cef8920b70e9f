//! `unicornd` command codec.
//!
//! Wire format (every field is one byte, no length prefix):
//! ```text
//! ┌────────┬──────────────────────────────────────┬────────┐
//! │ Opcode │ Payload                              │ Length │
//! ├────────┼──────────────────────────────────────┼────────┤
//! │ 0      │ value                                │ 2      │
//! │ 1      │ x, y, c0, c1, c2                     │ 6      │
//! │ 2      │ 64 × (c0, c1, c2), row-major         │ 193    │
//! │ 3      │ —                                    │ 1      │
//! └────────┴──────────────────────────────────────┴────────┘
//! ```
//!
//! The daemon infers the frame length from the opcode alone, so a frame
//! must never be emitted with a byte missing or extra. `c0..c2` are the
//! colour channels in [`ChannelOrder`] order (green, red, blue for the
//! stock daemon).
//!
//! The encoder does not validate; [`Pixel`] and [`Position`] cannot hold
//! out-of-range values, and the client checks raw arguments before a
//! [`Command`] is ever built.

use core::fmt;

use crate::pixel::{ChannelOrder, PIXEL_COUNT, Pixel, Position};

/// Largest frame on the wire (`SetAllPixels`).
pub const MAX_FRAME_LEN: usize = 1 + PIXEL_COUNT * 3;

/// Encoded frame, stack allocated.
pub type Frame = heapless::Vec<u8, MAX_FRAME_LEN>;

/// Frame length indexed by opcode byte.
const FRAME_LEN: [usize; 4] = [2, 6, MAX_FRAME_LEN, 1];

/// First byte of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    SetBrightness = 0,
    SetPixel = 1,
    SetAllPixels = 2,
    Show = 3,
}

impl Opcode {
    pub const fn from_byte(b: u8) -> Option<Self> {
        match b {
            0 => Some(Self::SetBrightness),
            1 => Some(Self::SetPixel),
            2 => Some(Self::SetAllPixels),
            3 => Some(Self::Show),
            _ => None,
        }
    }

    /// Total frame length including the opcode byte.
    pub const fn frame_len(self) -> usize {
        FRAME_LEN[self as usize]
    }
}

/// One daemon command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetBrightness(u8),
    SetPixel(Position, Pixel),
    SetAllPixels([Pixel; PIXEL_COUNT]),
    Show,
}

impl Command {
    pub const fn opcode(&self) -> Opcode {
        match self {
            Self::SetBrightness(_) => Opcode::SetBrightness,
            Self::SetPixel(..) => Opcode::SetPixel,
            Self::SetAllPixels(_) => Opcode::SetAllPixels,
            Self::Show => Opcode::Show,
        }
    }
}

fn put(frame: &mut Frame, bytes: &[u8]) {
    let fits = frame.extend_from_slice(bytes).is_ok();
    debug_assert!(fits, "frame buffer overflow");
}

/// Encode a command into its exact wire bytes.
pub fn encode(cmd: &Command, order: ChannelOrder) -> Frame {
    let op = cmd.opcode();
    let mut frame = Frame::new();
    put(&mut frame, &[op as u8]);

    match cmd {
        Command::SetBrightness(v) => put(&mut frame, &[*v]),
        Command::SetPixel(pos, colour) => {
            put(&mut frame, &[pos.x(), pos.y()]);
            put(&mut frame, &order.apply(*colour));
        }
        Command::SetAllPixels(pixels) => {
            for p in pixels {
                put(&mut frame, &order.apply(*p));
            }
        }
        Command::Show => {}
    }

    assert_eq!(
        frame.len(),
        op.frame_len(),
        "encoded {:?} frame has the wrong length",
        op
    );
    frame
}

// ───────────────────────────────────────────────────────────────
// Decoding
// ───────────────────────────────────────────────────────────────

/// Errors from [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Not enough bytes for the frame announced by the opcode.
    Incomplete { needed: usize, available: usize },
    /// First byte is not a known opcode.
    UnknownOpcode(u8),
    /// `SetPixel` coordinates outside the matrix.
    InvalidPosition { x: u8, y: u8 },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete { needed, available } => {
                write!(f, "incomplete frame: need {needed} bytes, have {available}")
            }
            Self::UnknownOpcode(b) => write!(f, "unknown opcode {b}"),
            Self::InvalidPosition { x, y } => write!(f, "invalid position ({x}, {y})"),
        }
    }
}

impl std::error::Error for DecodeError {}

fn colour(order: ChannelOrder, c: &[u8]) -> Pixel {
    match order {
        ChannelOrder::Grb => Pixel::rgb(c[1], c[0], c[2]),
        ChannelOrder::Rgb => Pixel::rgb(c[0], c[1], c[2]),
    }
}

/// Decode one frame from the front of `bytes`.
///
/// Returns the command and the number of bytes it occupied.
pub fn decode(bytes: &[u8], order: ChannelOrder) -> Result<(Command, usize), DecodeError> {
    let Some(&first) = bytes.first() else {
        return Err(DecodeError::Incomplete {
            needed: 1,
            available: 0,
        });
    };
    let op = Opcode::from_byte(first).ok_or(DecodeError::UnknownOpcode(first))?;
    let len = op.frame_len();
    if bytes.len() < len {
        return Err(DecodeError::Incomplete {
            needed: len,
            available: bytes.len(),
        });
    }
    let body = &bytes[1..len];

    let cmd = match op {
        Opcode::SetBrightness => Command::SetBrightness(body[0]),
        Opcode::SetPixel => {
            let (x, y) = (body[0], body[1]);
            let pos = Position::new(x.into(), y.into())
                .map_err(|_| DecodeError::InvalidPosition { x, y })?;
            Command::SetPixel(pos, colour(order, &body[2..5]))
        }
        Opcode::SetAllPixels => {
            let mut pixels = [Pixel::default(); PIXEL_COUNT];
            for (p, chunk) in pixels.iter_mut().zip(body.chunks_exact(3)) {
                *p = colour(order, chunk);
            }
            Command::SetAllPixels(pixels)
        }
        Opcode::Show => Command::Show,
    };

    Ok((cmd, len))
}

/// Decode a byte stream made only of whole frames.
pub fn decode_all(mut bytes: &[u8], order: ChannelOrder) -> Result<Vec<Command>, DecodeError> {
    let mut out = Vec::new();
    while !bytes.is_empty() {
        let (cmd, used) = decode(bytes, order)?;
        out.push(cmd);
        bytes = &bytes[used..];
    }
    Ok(out)
}
