//! Display client for `unicornd`.
//!
//! Validates raw arguments, builds a [`Command`], encodes it and writes
//! the frame in one call. Nothing is buffered or retried: a failed write
//! is returned to the caller as [`Error::Write`].
//!
//! The daemon keeps two phases — mutate (`set_pixel`, `set_all_pixels`)
//! then flush (`show`). The client itself keeps no state between calls
//! besides its channel order and verbosity.

use std::path::Path;
use std::time::Duration;

use log::info;

use crate::error::{Error, Result, ValidationError};
use crate::pixel::{BLACK, ChannelOrder, PIXEL_COUNT, Pixel, Position};
use crate::protocol::codec::{self, Command};
use crate::protocol::transport::{Transport, UnixSocketTransport};

pub struct Client<T: Transport> {
    transport: T,
    order: ChannelOrder,
    verbose: bool,
}

impl Client<UnixSocketTransport> {
    /// Connect to the daemon socket at `path`.
    pub fn connect(
        path: impl AsRef<Path>,
        write_timeout: Option<Duration>,
        verbose: bool,
    ) -> Result<Self> {
        if verbose {
            info!("Connecting to ({})...", path.as_ref().display());
        }
        let transport = UnixSocketTransport::connect(path, write_timeout)?;
        Ok(Self::new(transport, verbose))
    }
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T, verbose: bool) -> Self {
        Self {
            transport,
            order: ChannelOrder::default(),
            verbose,
        }
    }

    /// Override the wire channel order (for a daemon without the
    /// red/green label swap).
    #[must_use]
    pub fn with_channel_order(mut self, order: ChannelOrder) -> Self {
        self.order = order;
        self
    }

    pub fn channel_order(&self) -> ChannelOrder {
        self.order
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    fn send(&mut self, cmd: &Command) -> Result<()> {
        let frame = codec::encode(cmd, self.order);
        self.transport.write_frame(&frame).map_err(Error::Write)
    }

    /// Set global brightness, 0..=255.
    pub fn set_brightness(&mut self, value: u32) -> Result<()> {
        if self.verbose {
            info!("Setting brightness to ({})", value);
        }
        let value = u8::try_from(value).map_err(|_| ValidationError::Brightness(value))?;
        self.send(&Command::SetBrightness(value))
    }

    /// Set one pixel from raw coordinates and channels.
    pub fn set_pixel(&mut self, x: u32, y: u32, r: u32, g: u32, b: u32) -> Result<()> {
        let pos = Position::new(x, y)?;
        let colour = Pixel::new(r, g, b)?;
        self.set_pixel_at(pos, colour)
    }

    /// Set one pixel from already-validated values.
    pub fn set_pixel_at(&mut self, pos: Position, colour: Pixel) -> Result<()> {
        if self.verbose {
            info!(
                "Setting pixel `x:{}`, `y:{}` to rgb({}, {}, {})",
                pos.x(),
                pos.y(),
                colour.r,
                colour.g,
                colour.b
            );
        }
        self.send(&Command::SetPixel(pos, colour))
    }

    /// Set every pixel in one frame. `pixels` is row-major and must hold
    /// exactly 64 entries.
    pub fn set_all_pixels(&mut self, pixels: &[Pixel]) -> Result<()> {
        if self.verbose {
            info!("Setting all pixels...");
        }
        let pixels: [Pixel; PIXEL_COUNT] = pixels
            .try_into()
            .map_err(|_| ValidationError::PixelCount(pixels.len()))?;
        self.send(&Command::SetAllPixels(pixels))
    }

    /// Make the buffered state visible.
    pub fn show(&mut self) -> Result<()> {
        if self.verbose {
            info!("Displaying pixels");
        }
        self.send(&Command::Show)
    }

    /// Blank every pixel and show the result.
    pub fn clear(&mut self) -> Result<()> {
        if self.verbose {
            info!("Display cleared");
        }
        self.set_all_pixels(&[BLACK; PIXEL_COUNT])?;
        self.show()
    }

    /// Suppress diagnostic output.
    pub fn silent(&mut self) {
        self.verbose = false;
    }

    /// Log every command before it is sent.
    pub fn verbose(&mut self) {
        self.verbose = true;
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}
