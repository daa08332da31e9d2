//! The template library: every matchable variant, in priority order.
//!
//! Each base template contributes itself followed by its horizontal mirror,
//! so the library reads `[base0, mirror0, base1, mirror1, ...]`. The order is
//! the tie-break when several variants match at one origin. Anchors are
//! resolved once per variant while the library is built; a template without
//! a body or visor anchor aborts the build before any image is scanned.

mod catalog;

pub use catalog::{base_templates, BASE_TEMPLATES};

use crate::template::Template;
use crate::trace::{trace_event, trace_span};
use crate::util::SpriteScanResult;

/// A template ready for matching, with its anchors resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variant {
    template: Template,
    body_anchor: (usize, usize),
    visor_anchor: (usize, usize),
    width: usize,
    height: usize,
    base_index: usize,
    mirrored: bool,
}

impl Variant {
    /// Resolves anchors for `template`.
    pub fn compile(template: Template, base_index: usize, mirrored: bool) -> SpriteScanResult<Self> {
        let body_anchor = template.body_anchor()?;
        let visor_anchor = template.visor_anchor()?;
        Ok(Self {
            width: template.width(),
            height: template.height(),
            template,
            body_anchor,
            visor_anchor,
            base_index,
            mirrored,
        })
    }

    /// Returns the underlying cell grid.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Offset `(dx, dy)` of the body reference pixel.
    pub fn body_anchor(&self) -> (usize, usize) {
        self.body_anchor
    }

    /// Offset `(dx, dy)` of the visor reference pixel.
    pub fn visor_anchor(&self) -> (usize, usize) {
        self.visor_anchor
    }

    /// Width of the footprint's bounding box.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height of the footprint's bounding box.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Index of the base template this variant was derived from.
    pub fn base_index(&self) -> usize {
        self.base_index
    }

    /// Whether this variant is the horizontal mirror of its base.
    pub fn mirrored(&self) -> bool {
        self.mirrored
    }
}

/// Ordered collection of variants.
#[derive(Clone, Debug)]
pub struct TemplateLibrary {
    variants: Vec<Variant>,
}

impl TemplateLibrary {
    /// Builds the library from the built-in catalog.
    pub fn standard() -> SpriteScanResult<Self> {
        Self::from_templates(&base_templates())
    }

    /// Builds a library from base templates, appending each one and its mirror.
    pub fn from_templates(bases: &[Template]) -> SpriteScanResult<Self> {
        let _span = trace_span!("build_library", bases = bases.len()).entered();

        let mut variants = Vec::with_capacity(bases.len() * 2);
        for (base_index, base) in bases.iter().enumerate() {
            variants.push(Variant::compile(base.clone(), base_index, false)?);
            variants.push(Variant::compile(base.mirror_horizontal(), base_index, true)?);
        }

        trace_event!("library_built", variants = variants.len());
        Ok(Self { variants })
    }

    /// Returns the variants in priority order.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    /// Returns the variant at `index`.
    pub fn get(&self, index: usize) -> Option<&Variant> {
        self.variants.get(index)
    }

    /// Number of variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns `true` if the library has no variants.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
