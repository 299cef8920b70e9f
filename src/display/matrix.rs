//! 8×8 frame buffer and 128×128 supersample canvas.
//!
//! Shapes are rasterised at 16× linear resolution and box-filtered down
//! to the physical grid, which gives a cheap antialiasing effect on a
//! display with only 64 pixels.
//!
//! ## Indexing
//!
//! Both grids are indexed `[i][j]`. Matrix cell `[i][j]` is the mean of
//! supersample cells `[16i..16i+16][16j..16j+16]`, and [`de_matrix`]
//! flattens `[i][j]` to `8·i + j`.

use core::f64::consts::PI;

use crate::pixel::{PIXEL_COUNT, Pixel, WIDTH};

/// Supersample edge length.
pub const SUPERSAMPLE_WIDTH: usize = 128;

/// Linear oversampling factor.
const SCALE: usize = SUPERSAMPLE_WIDTH / WIDTH;

/// Cells averaged into one physical pixel.
const BLOCK_AREA: u32 = (SCALE * SCALE) as u32;

const CENTRE: f64 = (SUPERSAMPLE_WIDTH / 2) as f64;
const MAX_INDEX: f64 = (SUPERSAMPLE_WIDTH - 1) as f64;

/// Physical frame buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matrix(pub [[Pixel; WIDTH]; WIDTH]);

/// Oversampled canvas, heap allocated (48 KiB).
#[derive(Clone, PartialEq, Eq)]
pub struct Supersample(Box<[[Pixel; SUPERSAMPLE_WIDTH]; SUPERSAMPLE_WIDTH]>);

impl Default for Supersample {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Supersample {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let lit = self.0.iter().flatten().filter(|p| !p.is_black()).count();
        f.debug_struct("Supersample").field("lit", &lit).finish()
    }
}

impl Supersample {
    /// All-black canvas.
    pub fn new() -> Self {
        Self(Box::new(
            [[Pixel::default(); SUPERSAMPLE_WIDTH]; SUPERSAMPLE_WIDTH],
        ))
    }

    pub fn get(&self, i: usize, j: usize) -> Pixel {
        self.0[i][j]
    }

    pub fn set(&mut self, i: usize, j: usize, colour: Pixel) {
        self.0[i][j] = colour;
    }

    /// Paint every cell.
    pub fn fill(&mut self, colour: Pixel) {
        for row in self.0.iter_mut() {
            row.fill(colour);
        }
    }

    /// Per-channel mean of the 16×16 block behind matrix cell `[i][j]`.
    fn block_mean(&self, i: usize, j: usize) -> (u32, u32, u32) {
        let (mut r, mut g, mut b) = (0u32, 0u32, 0u32);
        for row in &self.0[i * SCALE..(i + 1) * SCALE] {
            for p in &row[j * SCALE..(j + 1) * SCALE] {
                r += u32::from(p.r);
                g += u32::from(p.g);
                b += u32::from(p.b);
            }
        }
        (r / BLOCK_AREA, g / BLOCK_AREA, b / BLOCK_AREA)
    }
}

fn clamp_channel(v: u32) -> u8 {
    v.min(255) as u8
}

/// Approximate a filled disc of `radius` supersample cells, offset from
/// the canvas centre by `offset`.
///
/// Draws concentric one-degree rings from `radius` down to 1, so cells
/// near the centre are hit many times while the rim is hit once. Points
/// past the canvas edge are clamped onto it.
pub fn circle(radius: i32, offset: (i32, i32), colour: Pixel) -> Supersample {
    let mut s = Supersample::new();
    let (ox, oy) = (f64::from(offset.0), f64::from(offset.1));

    for ring in (1..=radius).rev() {
        let ring = f64::from(ring);
        for deg in 0..360 {
            let theta = f64::from(deg) * PI / 180.0;
            let x = (CENTRE + ox + ring * theta.cos()).clamp(0.0, MAX_INDEX);
            let y = (CENTRE + oy + ring * theta.sin()).clamp(0.0, MAX_INDEX);
            s.set(x as usize, y as usize, colour);
        }
    }
    s
}

impl Matrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, i: usize, j: usize) -> Pixel {
        self.0[i][j]
    }

    pub fn set(&mut self, i: usize, j: usize, colour: Pixel) {
        self.0[i][j] = colour;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Downsample `s`, overwriting every cell.
    pub fn map_supersample(&mut self, s: &Supersample) {
        for i in 0..WIDTH {
            for j in 0..WIDTH {
                let (r, g, b) = s.block_mean(i, j);
                self.0[i][j] = Pixel::rgb(clamp_channel(r), clamp_channel(g), clamp_channel(b));
            }
        }
    }

    /// Downsample `s` and add it onto the current contents, saturating
    /// at 255 per channel.
    pub fn add_supersample(&mut self, s: &Supersample) {
        for i in 0..WIDTH {
            for j in 0..WIDTH {
                let (r, g, b) = s.block_mean(i, j);
                let cur = self.0[i][j];
                self.0[i][j] = Pixel::rgb(
                    clamp_channel(u32::from(cur.r) + r),
                    clamp_channel(u32::from(cur.g) + g),
                    clamp_channel(u32::from(cur.b) + b),
                );
            }
        }
    }
}

/// Flatten the grid row-major for [`Client::set_all_pixels`](super::client::Client::set_all_pixels).
pub fn de_matrix(m: &Matrix) -> [Pixel; PIXEL_COUNT] {
    let mut flat = [Pixel::default(); PIXEL_COUNT];
    for (n, p) in m.0.iter().flatten().enumerate() {
        flat[n] = *p;
    }
    flat
}
