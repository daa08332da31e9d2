//! Building blocks for custom scan loops.
//!
//! These expose the per-cell and per-variant predicates and the dimming rule
//! used by [`Matcher`](crate::Matcher). Most users should call
//! `Matcher::scan` instead.

pub use crate::bank::{base_templates, BASE_TEMPLATES};
pub use crate::canvas::{dim, DIM_DIVISOR};
pub use crate::search::scan::{
    cell_passes, role_passes, sample_reference, variant_matches_at, Reference,
};
