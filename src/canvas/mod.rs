//! Output canvas: dimmed background plus claimed sprite pixels.
//!
//! Every pixel ends in exactly one of two states. `Dimmed` holds a quarter
//! intensity copy of the source; `Claimed` holds the source color verbatim.
//! A claim may replace a dimmed pixel, but dimming never replaces a claim.

use crate::color::Rgba;
use crate::image::{ImageView, OwnedImage};
use crate::util::SpriteScanResult;

/// Channel divisor applied to unclaimed pixels.
pub const DIM_DIVISOR: u8 = 4;

/// Write state of a canvas pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PixelState {
    /// Not written yet.
    #[default]
    Unwritten,
    /// Holds a dimmed copy of the source pixel.
    Dimmed,
    /// Holds the source pixel as part of a matched footprint.
    Claimed,
}

/// Returns the dimmed version of `color`; alpha is preserved.
#[inline]
pub fn dim(color: Rgba) -> Rgba {
    Rgba::new(
        color.r / DIM_DIVISOR,
        color.g / DIM_DIVISOR,
        color.b / DIM_DIVISOR,
        color.a,
    )
}

/// Mutable output buffer with per-pixel write state.
#[derive(Clone, Debug)]
pub struct Canvas {
    pixels: OwnedImage<Rgba>,
    states: Vec<PixelState>,
}

impl Canvas {
    /// Creates an unwritten canvas.
    pub fn new(width: usize, height: usize) -> SpriteScanResult<Self> {
        let pixels = OwnedImage::from_fn(width, height, |_, _| Rgba::TRANSPARENT)?;
        let states = vec![PixelState::Unwritten; pixels.data().len()];
        Ok(Self { pixels, states })
    }

    /// Returns the canvas width in pixels.
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    /// Returns the canvas height in pixels.
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Returns the state of `(x, y)`, or `None` outside the canvas.
    pub fn state(&self, x: usize, y: usize) -> Option<PixelState> {
        self.index(x, y).map(|idx| self.states[idx])
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        self.pixels.get(x, y).copied()
    }

    /// Returns `true` if `(x, y)` belongs to a matched footprint.
    pub fn is_claimed(&self, x: usize, y: usize) -> bool {
        self.state(x, y) == Some(PixelState::Claimed)
    }

    /// Writes the dimmed source pixel at `(x, y)` unless something was already written there.
    pub fn dim_from(&mut self, source: ImageView<'_, Rgba>, x: usize, y: usize) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        if self.states[idx] != PixelState::Unwritten {
            return;
        }
        if let (Some(&src), Some(dst)) = (source.get(x, y), self.pixels.get_mut(x, y)) {
            *dst = dim(src);
            self.states[idx] = PixelState::Dimmed;
        }
    }

    /// Writes `color` at `(x, y)` and marks it claimed, replacing any earlier write.
    pub fn claim(&mut self, x: usize, y: usize, color: Rgba) {
        let Some(idx) = self.index(x, y) else {
            return;
        };
        if let Some(dst) = self.pixels.get_mut(x, y) {
            *dst = color;
            self.states[idx] = PixelState::Claimed;
        }
    }

    /// Borrowed view of the composited pixels.
    pub fn view(&self) -> ImageView<'_, Rgba> {
        self.pixels.view()
    }

    /// Consumes the canvas and returns the composited image.
    pub fn into_image(self) -> OwnedImage<Rgba> {
        self.pixels
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width() && y < self.height()).then(|| y * self.width() + x)
    }
}
