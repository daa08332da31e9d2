//! Per-origin evaluation of a single variant.

use crate::bank::Variant;
use crate::color::{is_same, Rgba};
use crate::image::ImageView;
use crate::search::MatchConfig;
use crate::template::{Cell, Role};

/// Reference colors sampled at a variant's anchors for one origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reference {
    /// Color under the body anchor.
    pub body: Rgba,
    /// Color under the visor anchor.
    pub visor: Rgba,
}

/// Samples the anchor colors of `variant` placed at `(x, y)`.
///
/// Returns `None` if either anchor lies outside the image.
pub fn sample_reference(
    image: ImageView<'_, Rgba>,
    variant: &Variant,
    x: usize,
    y: usize,
) -> Option<Reference> {
    let (bx, by) = variant.body_anchor();
    let (vx, vy) = variant.visor_anchor();
    let body = *image.get(x.checked_add(bx)?, y.checked_add(by)?)?;
    let visor = *image.get(x.checked_add(vx)?, y.checked_add(vy)?)?;
    Some(Reference { body, visor })
}

/// Tests one role against a pixel.
#[inline]
pub fn role_passes(role: Role, pixel: Rgba, reference: Reference, cfg: &MatchConfig) -> bool {
    match role {
        Role::Wildcard => true,
        Role::Body => is_same(pixel, reference.body, cfg.region_tolerance),
        Role::Visor => is_same(pixel, reference.visor, cfg.region_tolerance),
        Role::Background => !is_same(pixel, reference.body, cfg.background_tolerance),
    }
}

/// Tests one cell against a pixel; `Either` cells pass if one of their roles does.
#[inline]
pub fn cell_passes(cell: Cell, pixel: Rgba, reference: Reference, cfg: &MatchConfig) -> bool {
    match cell {
        Cell::Is(role) => role_passes(role, pixel, reference, cfg),
        Cell::Either(a, b) => {
            role_passes(a, pixel, reference, cfg) || role_passes(b, pixel, reference, cfg)
        }
    }
}

/// Returns `true` if `variant` matches with its top-left corner at `(x, y)`.
///
/// The variant is rejected when its bounding box leaves the image, when its
/// two anchor colors are within `distinct_tolerance` of each other, or when
/// any cell fails its role's predicate. Claims are not consulted here.
pub fn variant_matches_at(
    image: ImageView<'_, Rgba>,
    variant: &Variant,
    x: usize,
    y: usize,
    cfg: &MatchConfig,
) -> bool {
    if !image.contains_box(x, y, variant.width(), variant.height()) {
        return false;
    }
    let Some(reference) = sample_reference(image, variant, x, y) else {
        return false;
    };
    if is_same(reference.body, reference.visor, cfg.distinct_tolerance) {
        return false;
    }

    variant.template().cells().all(|(dx, dy, cell)| {
        if cell.is(Role::Wildcard) {
            return true;
        }
        match image.get(x + dx, y + dy) {
            Some(&pixel) => cell_passes(cell, pixel, reference, cfg),
            None => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{cell_passes, variant_matches_at, Reference};
    use crate::bank::Variant;
    use crate::color::Rgba;
    use crate::image::OwnedImage;
    use crate::search::MatchConfig;
    use crate::template::{Cell, Role, Template};

    const BODY: Rgba = Rgba::opaque(200, 30, 30);
    const VISOR: Rgba = Rgba::opaque(120, 200, 230);

    fn reference() -> Reference {
        Reference {
            body: BODY,
            visor: VISOR,
        }
    }

    #[test]
    fn either_cell_accepts_both_sub_rules() {
        let cfg = MatchConfig::default();
        let cell = Cell::Either(Role::Background, Role::Body);
        assert!(cell_passes(cell, BODY, reference(), &cfg));
        assert!(cell_passes(cell, Rgba::opaque(0, 0, 0), reference(), &cfg));
        assert!(!cell_passes(Cell::Is(Role::Background), BODY, reference(), &cfg));
    }

    #[test]
    fn box_past_the_edge_is_rejected() {
        let tpl = Template::from_rows(&[
            &[Cell::Is(Role::Body), Cell::Is(Role::Visor)],
            &[Cell::Is(Role::Wildcard)],
        ]);
        let variant = Variant::compile(tpl, 0, false).unwrap();
        let image = OwnedImage::from_fn(2, 1, |x, _| if x == 0 { BODY } else { VISOR }).unwrap();
        let cfg = MatchConfig::default();
        assert!(!variant_matches_at(image.view(), &variant, 0, 0, &cfg));
        assert!(!variant_matches_at(image.view(), &variant, usize::MAX, 0, &cfg));
    }

    #[test]
    fn indistinct_anchors_are_rejected() {
        let tpl = Template::from_rows(&[&[Cell::Is(Role::Body), Cell::Is(Role::Visor)]]);
        let variant = Variant::compile(tpl, 0, false).unwrap();
        let near = Rgba::opaque(BODY.r + 15, BODY.g, BODY.b);
        let image = OwnedImage::from_fn(2, 1, |x, _| if x == 0 { BODY } else { near }).unwrap();
        let cfg = MatchConfig::default();
        assert!(!variant_matches_at(image.view(), &variant, 0, 0, &cfg));

        let far = Rgba::opaque(BODY.r + 16, BODY.g, BODY.b);
        let image = OwnedImage::from_fn(2, 1, |x, _| if x == 0 { BODY } else { far }).unwrap();
        assert!(variant_matches_at(image.view(), &variant, 0, 0, &cfg));
    }
}
