//! Built-in sprite catalog.
//!
//! Nine hand-drawn poses: four-wide crewmates of varying height, with and
//! without a back notch, followed by two three-wide variants. Every entry
//! faces right; left-facing variants come from mirroring.

use crate::template::{Cell, Role, Template};

const BGD: Cell = Cell::Is(Role::Background);
const VSR: Cell = Cell::Is(Role::Visor);
const BDY: Cell = Cell::Is(Role::Body);
const WLD: Cell = Cell::Is(Role::Wildcard);
// Only used in entry 6, where the lower back pixel may be either.
const BGD_BDY: Cell = Cell::Either(Role::Background, Role::Body);

/// Base templates in priority order.
pub static BASE_TEMPLATES: [&[&[Cell]]; 9] = [
    &[
        &[BGD, BDY, BDY, BDY],
        &[BDY, BDY, VSR, VSR],
        &[BDY, BDY, BDY, BDY],
        &[BGD, BDY, BDY, BDY],
        &[WLD, BDY, BGD, BDY],
        &[WLD, BDY, BGD, BDY],
    ],
    &[
        &[BGD, BDY, BDY, BDY],
        &[BDY, BDY, VSR, VSR],
        &[BDY, BDY, BDY, BDY],
        &[BGD, BDY, BDY, BDY],
        &[WLD, BDY, BGD, BDY],
    ],
    &[
        &[BGD, BDY, BDY, BDY],
        &[BDY, BDY, VSR, VSR],
        &[BGD, BDY, BDY, BDY],
        &[BGD, BDY, BDY, BDY],
        &[WLD, BDY, BGD, BDY],
    ],
    &[
        &[BGD, BDY, BDY, BDY],
        &[BDY, BDY, VSR, VSR],
        &[BGD, BDY, BDY, BDY],
        &[WLD, BDY, BGD, BDY],
    ],
    &[
        &[BGD, BDY, BDY, BDY],
        &[BDY, BDY, VSR, VSR],
        &[BDY, BDY, BDY, BDY],
        &[BGD, BDY, BGD, BDY],
    ],
    &[
        &[BGD, BDY, BDY, BDY],
        &[BGD, BDY, VSR, VSR],
        &[BDY, BDY, BDY, BDY],
        &[BGD, BDY, BDY, BDY],
        &[WLD, BDY, BGD, BDY],
    ],
    &[
        &[BGD, BDY, BDY, BDY],
        &[BDY, BDY, VSR, VSR],
        &[BDY, BDY, BDY, BDY],
        &[BGD_BDY, BDY, BDY, BDY],
        &[BGD, BDY, BGD, BDY],
    ],
    &[
        &[BDY, BDY, BDY],
        &[BDY, VSR, VSR],
        &[BDY, BDY, BDY],
        &[BDY, BDY, BDY],
        &[BDY, BGD, BDY],
    ],
    &[
        &[BDY, BDY, BDY],
        &[BDY, VSR, VSR],
        &[BDY, BDY, BDY],
        &[BDY, BGD, BDY],
    ],
];

/// Returns owned copies of the catalog entries.
pub fn base_templates() -> Vec<Template> {
    BASE_TEMPLATES
        .iter()
        .map(|rows| Template::from_rows(rows))
        .collect()
}
