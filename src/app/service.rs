//! Display service — turns arrival minutes into frames.
//!
//! [`DisplayService`] holds the timing and brightness settings and drives
//! a [`Client`] through the port traits. It never opens sockets or reads
//! input itself.
//!
//! ## Colour and panel selection
//!
//! | Minutes   | Rendering                          | Colour  |
//! |-----------|------------------------------------|---------|
//! | 0–3       | digit on left panel                | red     |
//! | 4–5       | digit on left panel                | orange  |
//! | 6–9       | digit on right panel               | green   |
//! | 10–99     | tens left, ones right              | white   |
//! | 100+      | exclamation mark                   | red     |

use std::time::Duration;

use log::{debug, info};

use crate::config::{BATCH_SLACK, DisplayConfig};
use crate::display::client::Client;
use crate::display::glyphs::{Panel, draw_digit, draw_exclamation};
use crate::error::Result;
use crate::pixel::{BLACK, ORANGE, PIXEL_COUNT, Pixel};
use crate::protocol::transport::Transport;

use super::ports::{ArrivalSource, Clock};

/// Arrival imminent.
pub const COLOUR_SOON: Pixel = Pixel::rgb(255, 0, 0);
/// Leave now.
pub const COLOUR_HURRY: Pixel = ORANGE;
/// Comfortable margin.
pub const COLOUR_OK: Pixel = Pixel::rgb(0, 255, 0);
/// Two-digit values.
pub const COLOUR_LATER: Pixel = Pixel::rgb(255, 255, 255);
/// No rendering for the value.
pub const COLOUR_ERROR: Pixel = Pixel::rgb(255, 0, 0);

pub struct DisplayService {
    brightness: u8,
    startup_hold: Duration,
    frame_interval: Duration,
    refresh_interval: Duration,
}

impl DisplayService {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            brightness: config.brightness,
            startup_hold: config.startup_hold(),
            frame_interval: config.frame_interval(),
            refresh_interval: config.refresh_interval(),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Set brightness, flash a blank frame and leave the display clear.
    pub fn start<T: Transport>(
        &self,
        client: &mut Client<T>,
        clock: &mut impl Clock,
    ) -> Result<()> {
        client.set_brightness(u32::from(self.brightness))?;
        client.set_all_pixels(&[BLACK; PIXEL_COUNT])?;
        client.show()?;
        clock.sleep(self.startup_hold);
        client.clear()?;
        info!("Display init OK. Waiting for input...");
        Ok(())
    }

    // ── Rendering ─────────────────────────────────────────────

    /// Clear the display and show one value.
    pub fn render<T: Transport>(&self, client: &mut Client<T>, minutes: u32) -> Result<()> {
        client.clear()?;

        match minutes {
            0..=3 => draw_digit(client, minutes, Panel::Left, COLOUR_SOON)?,
            4..=5 => draw_digit(client, minutes, Panel::Left, COLOUR_HURRY)?,
            6..=9 => draw_digit(client, minutes, Panel::Right, COLOUR_OK)?,
            10..=99 => {
                draw_digit(client, minutes / 10, Panel::Left, COLOUR_LATER)?;
                draw_digit(client, minutes % 10, Panel::Right, COLOUR_LATER)?;
            }
            _ => draw_exclamation(client, COLOUR_ERROR)?,
        }

        client.show()
    }

    /// Cycle through one batch, soonest first, until the refresh
    /// interval is nearly used up. Returns the number of frames shown.
    pub fn run_batch<T: Transport>(
        &self,
        client: &mut Client<T>,
        clock: &mut impl Clock,
        minutes: &[u32],
    ) -> Result<usize> {
        let started = clock.now();
        let budget = self.refresh_interval.saturating_sub(BATCH_SLACK);

        if minutes.is_empty() {
            debug!("Empty batch, blanking display");
            client.clear()?;
            clock.sleep(budget);
            return Ok(0);
        }

        let mut sorted = minutes.to_vec();
        sorted.sort_unstable();

        let mut shown = 0;
        loop {
            for &m in &sorted {
                if clock.now().duration_since(started) >= budget {
                    info!("Batch expired after {} frames. Waiting for new data.", shown);
                    return Ok(shown);
                }
                self.render(client, m)?;
                shown += 1;
                clock.sleep(self.frame_interval);
            }
        }
    }

    /// Pull batches from `source` until it runs dry, then blank the display.
    pub fn run<T: Transport>(
        &self,
        client: &mut Client<T>,
        clock: &mut impl Clock,
        source: &mut impl ArrivalSource,
    ) -> anyhow::Result<()> {
        while let Some(batch) = source.next_batch()? {
            info!("New arrivals: {:?}", batch);
            self.run_batch(client, clock, &batch)?;
        }
        info!("Arrival source exhausted");
        client.clear()?;
        Ok(())
    }
}
