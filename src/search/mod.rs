//! Scan/match engine.
//!
//! The matcher visits every image coordinate in raster order with `x` as the
//! outer loop and `y` as the inner loop. At each origin it tries the library
//! variants in priority order and accepts the first one whose every cell
//! passes. Accepted footprints are claimed on the output canvas; everything
//! else is dimmed. The order is observable through first-match-wins and the
//! claimed-origin check, so it must not change.

pub(crate) mod scan;

use crate::bank::{TemplateLibrary, Variant};
use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::image::{ImageView, OwnedImage};
use crate::trace::{trace_debug, trace_event, trace_span};
use crate::util::SpriteScanResult;
use scan::variant_matches_at;

/// How earlier claims restrict later matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClaimPolicy {
    /// Skip an origin only if the origin pixel itself is claimed.
    ///
    /// Footprints that overlap away from their origins are both accepted and
    /// the later claim overwrites the shared pixels.
    #[default]
    OriginOnly,
    /// Also reject a variant if any of its body or visor cells is claimed;
    /// the next variant in library order is tried instead.
    Footprint,
}

/// Tolerances and policies for a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    /// Anchor colors closer than this are too similar to identify a sprite.
    pub distinct_tolerance: u32,
    /// Body and visor cells must be closer than this to their reference color.
    pub region_tolerance: u32,
    /// Background cells must be at least this far from the body color.
    pub background_tolerance: u32,
    /// Overlap handling between accepted matches.
    pub claim_policy: ClaimPolicy,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            distinct_tolerance: 16,
            region_tolerance: 8,
            background_tolerance: 6,
            claim_policy: ClaimPolicy::OriginOnly,
        }
    }
}

/// An accepted match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteMatch {
    /// X coordinate (column) of the origin.
    pub x: usize,
    /// Y coordinate (row) of the origin.
    pub y: usize,
    /// Index of the variant in the library.
    pub variant: usize,
    /// Index of the base template the variant came from.
    pub base_index: usize,
    /// Whether the variant is mirrored.
    pub mirrored: bool,
}

/// Result of scanning one image.
#[derive(Clone, Debug)]
pub struct ScanOutcome {
    canvas: Canvas,
    matches: Vec<SpriteMatch>,
}

impl ScanOutcome {
    /// Number of accepted matches.
    pub fn count(&self) -> usize {
        self.matches.len()
    }

    /// Accepted matches in scan order.
    pub fn matches(&self) -> &[SpriteMatch] {
        &self.matches
    }

    /// The composited canvas, including per-pixel state.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Consumes the outcome and returns the composited image.
    pub fn into_image(self) -> OwnedImage<Rgba> {
        self.canvas.into_image()
    }
}

/// Sprite matcher over a template library.
pub struct Matcher {
    library: TemplateLibrary,
    cfg: MatchConfig,
}

impl Matcher {
    /// Creates a matcher with the default configuration.
    pub fn new(library: TemplateLibrary) -> Self {
        Self {
            library,
            cfg: MatchConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, cfg: MatchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Returns the template library.
    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    /// Scans `image`, returning the composited canvas and every accepted match.
    ///
    /// Individual origins never fail; they are skipped. The only error is a
    /// canvas that cannot be allocated for the view's dimensions.
    pub fn scan(&self, image: ImageView<'_, Rgba>) -> SpriteScanResult<ScanOutcome> {
        let width = image.width();
        let height = image.height();
        let _span = trace_span!(
            "scan",
            width = width,
            height = height,
            variants = self.library.len()
        )
        .entered();

        let mut canvas = Canvas::new(width, height)?;
        let mut matches = Vec::new();

        for x in 0..width {
            for y in 0..height {
                let matched = if canvas.is_claimed(x, y) {
                    None
                } else {
                    self.first_match_at(image, &canvas, x, y)
                };

                canvas.dim_from(image, x, y);

                let Some(index) = matched else {
                    continue;
                };
                let variant = &self.library.variants()[index];
                claim_footprint(&mut canvas, image, variant, x, y);
                trace_debug!("sprite_matched", x = x, y = y, variant = index);
                matches.push(SpriteMatch {
                    x,
                    y,
                    variant: index,
                    base_index: variant.base_index(),
                    mirrored: variant.mirrored(),
                });
            }
        }

        trace_event!("scan_complete", matches = matches.len());
        Ok(ScanOutcome { canvas, matches })
    }

    /// Index of the first variant accepted at `(x, y)`, ignoring whether the origin is claimed.
    pub fn first_match_at(
        &self,
        image: ImageView<'_, Rgba>,
        canvas: &Canvas,
        x: usize,
        y: usize,
    ) -> Option<usize> {
        self.library.variants().iter().position(|variant| {
            variant_matches_at(image, variant, x, y, &self.cfg)
                && (self.cfg.claim_policy == ClaimPolicy::OriginOnly
                    || !footprint_claimed(canvas, variant, x, y))
        })
    }
}

fn footprint_claimed(canvas: &Canvas, variant: &Variant, x: usize, y: usize) -> bool {
    variant
        .template()
        .cells()
        .any(|(dx, dy, cell)| cell.is_claimed() && canvas.is_claimed(x + dx, y + dy))
}

fn claim_footprint(
    canvas: &mut Canvas,
    image: ImageView<'_, Rgba>,
    variant: &Variant,
    x: usize,
    y: usize,
) {
    for (dx, dy, cell) in variant.template().cells() {
        if !cell.is_claimed() {
            continue;
        }
        if let Some(&src) = image.get(x + dx, y + dy) {
            canvas.claim(x + dx, y + dy, src);
        }
    }
}
