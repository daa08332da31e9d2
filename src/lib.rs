//! Spritescan finds small multi-pixel sprites in raster images.
//!
//! Sprites are described by role templates (body, visor, background,
//! wildcard) rather than by colors, so one template matches a sprite in any
//! palette. The matcher scans every origin, accepts the first library variant
//! whose cells all pass, claims that footprint on an output canvas and dims
//! every other pixel. PNG input and output is available through the
//! `image-io` feature; structured logging through the `tracing` feature.

pub mod bank;
pub mod canvas;
pub mod color;
pub mod image;
pub mod lowlevel;
pub mod search;
pub mod template;
mod trace;
pub mod util;

pub use bank::{TemplateLibrary, Variant};
pub use canvas::{Canvas, PixelState};
pub use color::{color_distance, is_same, Rgba};
pub use crate::image::{ImageView, OwnedImage};
pub use search::{ClaimPolicy, MatchConfig, Matcher, ScanOutcome, SpriteMatch};
pub use template::{Cell, Role, Template};
pub use util::{SpriteScanError, SpriteScanResult};

#[cfg(feature = "image-io")]
pub use crate::image::io;
