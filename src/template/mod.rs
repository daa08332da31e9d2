//! Sprite templates: jagged grids of symbolic cell roles.
//!
//! A template does not store colors. Each cell names the role its pixel plays
//! (body, visor, background, or don't-care) and the matcher compares pixels
//! against two reference colors sampled at the template's anchors.

use crate::util::{SpriteScanError, SpriteScanResult};
use std::fmt;

/// Semantic role of a single template cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Must differ from the body color.
    Background,
    /// Must match the visor reference color.
    Visor,
    /// Must match the body reference color.
    Body,
    /// Always passes; no pixel is compared.
    Wildcard,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Background => "background",
            Role::Visor => "visor",
            Role::Body => "body",
            Role::Wildcard => "wildcard",
        };
        f.write_str(name)
    }
}

/// Content of one template cell.
///
/// Almost every cell carries a single role. `Either` accepts a pixel that
/// satisfies either role's rule; it is written by the claim step when one of
/// its roles is `Body` or `Visor`, but it never serves as an anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// A single-role cell.
    Is(Role),
    /// A cell that passes if either role's rule passes.
    Either(Role, Role),
}

impl Cell {
    /// Returns `true` if this is exactly the single-role cell `role`.
    pub fn is(self, role: Role) -> bool {
        self == Cell::Is(role)
    }

    /// Returns `true` if `role` is one of the roles this cell accepts.
    pub fn includes(self, role: Role) -> bool {
        match self {
            Cell::Is(r) => r == role,
            Cell::Either(a, b) => a == role || b == role,
        }
    }

    /// Returns `true` if the claim step copies the source pixel for this cell.
    pub fn is_claimed(self) -> bool {
        self.includes(Role::Body) || self.includes(Role::Visor)
    }
}

impl From<Role> for Cell {
    fn from(role: Role) -> Self {
        Cell::Is(role)
    }
}

/// A jagged grid of cells; rows may differ in length.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Template {
    rows: Vec<Vec<Cell>>,
}

impl Template {
    /// Creates a template from owned rows.
    ///
    /// No anchors are validated here; see [`Template::body_anchor`] and
    /// [`Template::visor_anchor`].
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Creates a template by copying borrowed rows, e.g. from a static table.
    pub fn from_rows(rows: &[&[Cell]]) -> Self {
        Self::new(rows.iter().map(|row| row.to_vec()).collect())
    }

    /// Returns the rows of the grid.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the cell at column `dx`, row `dy`.
    pub fn cell(&self, dx: usize, dy: usize) -> Option<Cell> {
        self.rows.get(dy)?.get(dx).copied()
    }

    /// Iterates `(dx, dy, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(dy, row)| row.iter().enumerate().map(move |(dx, &cell)| (dx, dy, cell)))
    }

    /// Position `(col, row)` of the first single-role `Body` cell.
    pub fn body_anchor(&self) -> SpriteScanResult<(usize, usize)> {
        self.anchor(Role::Body)
    }

    /// Position `(col, row)` of the first single-role `Visor` cell.
    pub fn visor_anchor(&self) -> SpriteScanResult<(usize, usize)> {
        self.anchor(Role::Visor)
    }

    fn anchor(&self, role: Role) -> SpriteScanResult<(usize, usize)> {
        self.cells()
            .find(|&(_, _, cell)| cell.is(role))
            .map(|(dx, dy, _)| (dx, dy))
            .ok_or(SpriteScanError::MalformedTemplate { missing: role })
    }

    /// Returns a copy with every row reversed left to right.
    pub fn mirror_horizontal(&self) -> Template {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().rev().copied().collect())
            .collect();
        Template { rows }
    }
}
