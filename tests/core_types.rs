use spritescan::bank::BASE_TEMPLATES;
use spritescan::{
    Cell, ImageView, OwnedImage, Rgba, Role, SpriteScanError, Template, TemplateLibrary,
};

const B: Cell = Cell::Is(Role::Body);
const V: Cell = Cell::Is(Role::Visor);
const G: Cell = Cell::Is(Role::Background);

#[test]
fn image_view_rejects_invalid_dimensions() {
    let data = [Rgba::TRANSPARENT; 4];

    let err = ImageView::from_slice(&data, 0, 1).err().unwrap();
    assert_eq!(
        err,
        SpriteScanError::InvalidDimensions {
            width: 0,
            height: 1,
        }
    );

    let err = ImageView::from_slice(&data, 1, 0).err().unwrap();
    assert_eq!(
        err,
        SpriteScanError::InvalidDimensions {
            width: 1,
            height: 0,
        }
    );
}

#[test]
fn image_view_rejects_invalid_stride() {
    let data = [Rgba::TRANSPARENT; 8];

    let err = ImageView::new(&data, 4, 1, 3).err().unwrap();
    assert_eq!(
        err,
        SpriteScanError::InvalidStride {
            width: 4,
            stride: 3,
        }
    );
}

#[test]
fn image_view_rejects_small_buffer() {
    let data = [Rgba::TRANSPARENT; 3];

    let err = ImageView::new(&data, 2, 2, 2).err().unwrap();
    assert_eq!(err, SpriteScanError::BufferTooSmall { needed: 4, got: 3 });
}

#[test]
fn image_view_reads_with_padding() {
    let data: Vec<Rgba> = (0u8..6).map(|v| Rgba::opaque(v, 0, 0)).collect();
    let view = ImageView::new(&data, 2, 2, 3).unwrap();

    assert_eq!(view.get(1, 1).copied(), Some(Rgba::opaque(4, 0, 0)));
    assert_eq!(view.row(1).unwrap().len(), 2);
    assert!(view.get(2, 0).is_none());
    assert_eq!(view.stride(), 3);
    assert_eq!(ImageView::from_slice(&data[..4], 2, 2).unwrap().stride(), 2);
    assert!(view.contains_box(0, 0, 2, 2));
    assert!(!view.contains_box(1, 0, 2, 1));
}

#[test]
fn owned_image_checks_buffer_length() {
    let err = OwnedImage::new(vec![Rgba::TRANSPARENT; 5], 2, 2).err().unwrap();
    assert_eq!(err, SpriteScanError::BufferTooSmall { needed: 4, got: 5 });

    let img = OwnedImage::from_fn(3, 2, |x, y| Rgba::opaque(x as u8, y as u8, 0)).unwrap();
    assert_eq!(img.get(2, 1).copied(), Some(Rgba::opaque(2, 1, 0)));
    assert_eq!(img.view().width(), 3);

    let data = img.into_data();
    assert_eq!(data.len(), 6);
    assert_eq!(data[4], Rgba::opaque(1, 1, 0));
}

#[test]
fn template_without_visor_is_malformed() {
    let tpl = Template::from_rows(&[&[G, B, B], &[B, B, B]]);
    assert_eq!(
        tpl.visor_anchor().err().unwrap(),
        SpriteScanError::MalformedTemplate {
            missing: Role::Visor
        }
    );

    let err = TemplateLibrary::from_templates(&[tpl]).err().unwrap();
    assert_eq!(
        err,
        SpriteScanError::MalformedTemplate {
            missing: Role::Visor
        }
    );
}

#[test]
fn template_without_body_is_malformed() {
    let tpl = Template::from_rows(&[&[G, V]]);
    assert_eq!(
        TemplateLibrary::from_templates(&[tpl]).err().unwrap(),
        SpriteScanError::MalformedTemplate {
            missing: Role::Body
        }
    );
}

#[test]
fn library_interleaves_bases_and_mirrors() {
    let library = TemplateLibrary::standard().unwrap();
    assert_eq!(BASE_TEMPLATES.len(), 9);
    assert_eq!(library.len(), 18);

    for (idx, variant) in library.variants().iter().enumerate() {
        assert_eq!(variant.base_index(), idx / 2);
        assert_eq!(variant.mirrored(), idx % 2 == 1);

        let base = Template::from_rows(BASE_TEMPLATES[idx / 2]);
        let expected = if variant.mirrored() {
            base.mirror_horizontal()
        } else {
            base
        };
        assert_eq!(variant.template(), &expected);
    }
}

#[test]
fn every_variant_has_single_role_anchors() {
    let library = TemplateLibrary::standard().unwrap();
    for variant in library.variants() {
        let (bx, by) = variant.body_anchor();
        let (vx, vy) = variant.visor_anchor();
        assert_eq!(variant.template().cell(bx, by), Some(B));
        assert_eq!(variant.template().cell(vx, vy), Some(V));
        assert!(bx < variant.width() && by < variant.height());
        assert!(vx < variant.width() && vy < variant.height());
    }
}

#[test]
fn mirrored_anchors_are_recomputed() {
    let library = TemplateLibrary::standard().unwrap();
    let base = library.get(0).unwrap();
    let mirror = library.get(1).unwrap();

    assert_eq!(base.body_anchor(), (1, 0));
    assert_eq!(base.visor_anchor(), (2, 1));
    assert_eq!(mirror.body_anchor(), (0, 0));
    assert_eq!(mirror.visor_anchor(), (0, 1));
}

#[test]
fn mirroring_twice_restores_every_catalog_entry() {
    for rows in BASE_TEMPLATES.iter() {
        let tpl = Template::from_rows(rows);
        let twice = tpl.mirror_horizontal().mirror_horizontal();
        assert_eq!(twice, tpl);
        assert_eq!(twice.body_anchor(), tpl.body_anchor());
        assert_eq!(twice.visor_anchor(), tpl.visor_anchor());
    }
}

#[test]
fn combined_cell_appears_once_in_catalog() {
    let combined: Vec<(usize, usize, usize)> = BASE_TEMPLATES
        .iter()
        .enumerate()
        .flat_map(|(idx, rows)| {
            Template::from_rows(rows)
                .cells()
                .filter(|&(_, _, cell)| matches!(cell, Cell::Either(..)))
                .map(move |(dx, dy, _)| (idx, dx, dy))
                .collect::<Vec<_>>()
        })
        .collect();
    assert_eq!(combined, vec![(6, 0, 3)]);
}
