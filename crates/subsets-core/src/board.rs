//! The grid of cells, with arrow clues, givens, and per-cell value bounds.

use crate::direction::{AdjFlags, Direction};
use crate::params::GameParams;
use crate::value_set::ValueSet;

/// A Subsets board.
///
/// Cells are addressed by row-major index. Each cell carries:
///
/// - `clues`: the containment arrows leaving the cell. An arrow in direction
///   `d` asserts that the neighbouring cell in that direction holds a subset
///   of this cell's set.
/// - `immutable`: the bits of the cell's value fixed by the puzzle
///   description. Generated puzzles fix either nothing or the whole value.
/// - `known`: the lower bound, letters confirmed present.
/// - `mask`: the upper bound, letters not yet ruled out.
///
/// A cell is *resolved* once `known == mask`; the common mask is then the
/// cell's value. Clues and immutable bits never change after a board is
/// loaded; only the bounds move during play and solving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    params: GameParams,
    clues: Vec<AdjFlags>,
    immutable: Vec<ValueSet>,
    known: Vec<ValueSet>,
    mask: Vec<ValueSet>,
}

impl Board {
    /// Creates a blank board: no clues, no givens, every cell wide open.
    #[must_use]
    pub fn new(params: GameParams) -> Self {
        let cells = params.cell_count();
        Self {
            params,
            clues: vec![AdjFlags::EMPTY; cells],
            immutable: vec![ValueSet::EMPTY; cells],
            known: vec![ValueSet::EMPTY; cells],
            mask: vec![params.full_set(); cells],
        }
    }

    /// Returns the board parameters.
    #[must_use]
    pub fn params(&self) -> &GameParams {
        &self.params
    }

    /// Returns the range of cell indices, for iteration.
    #[must_use]
    pub fn cells(&self) -> std::ops::Range<usize> {
        0..self.params.cell_count()
    }

    /// Returns the arrow clues of a cell.
    #[must_use]
    pub fn clues(&self, cell: usize) -> AdjFlags {
        self.clues[cell]
    }

    /// Adds an arrow clue from a cell toward a direction.
    pub fn insert_clue(&mut self, cell: usize, dir: Direction) {
        self.clues[cell].insert(dir);
    }

    /// Returns `true` if the cell has an arrow toward the given direction.
    #[must_use]
    pub fn arrow(&self, cell: usize, dir: Direction) -> bool {
        self.clues[cell].contains(dir)
    }

    /// Returns the immutable bits of a cell.
    #[must_use]
    pub fn immutable(&self, cell: usize) -> ValueSet {
        self.immutable[cell]
    }

    /// Returns the lower bound of a cell: letters confirmed present.
    #[must_use]
    pub fn known(&self, cell: usize) -> ValueSet {
        self.known[cell]
    }

    /// Returns the upper bound of a cell: letters not yet ruled out.
    #[must_use]
    pub fn mask(&self, cell: usize) -> ValueSet {
        self.mask[cell]
    }

    /// Replaces the lower bound of a cell.
    pub fn set_known(&mut self, cell: usize, known: ValueSet) {
        self.known[cell] = known;
    }

    /// Replaces the upper bound of a cell.
    pub fn set_mask(&mut self, cell: usize, mask: ValueSet) {
        self.mask[cell] = mask;
    }

    /// Returns `true` if the cell's bounds have met.
    #[must_use]
    pub fn is_resolved(&self, cell: usize) -> bool {
        self.known[cell] == self.mask[cell]
    }

    /// Returns the cell's value, if resolved.
    #[must_use]
    pub fn value(&self, cell: usize) -> Option<ValueSet> {
        self.is_resolved(cell).then(|| self.known[cell])
    }

    /// Forces both bounds of a cell to the given value.
    pub fn resolve(&mut self, cell: usize, value: ValueSet) {
        self.known[cell] = value;
        self.mask[cell] = value;
    }

    /// Resets a cell's bounds to the blank state.
    pub fn blank_cell(&mut self, cell: usize) {
        self.known[cell] = ValueSet::EMPTY;
        self.mask[cell] = self.params.full_set();
    }

    /// Pins a cell to a value given by the puzzle description.
    pub fn fix(&mut self, cell: usize, value: ValueSet) {
        self.resolve(cell, value);
        self.immutable[cell] = self.params.full_set();
    }

    /// Releases a cell's immutability, leaving its bounds untouched.
    pub fn unfix(&mut self, cell: usize) {
        self.immutable[cell] = ValueSet::EMPTY;
    }

    /// Returns the index of the neighbouring cell in a direction, if any.
    #[must_use]
    pub fn neighbour(&self, cell: usize, dir: Direction) -> Option<usize> {
        let w = i32::from(self.params.w);
        let h = i32::from(self.params.h);
        let (dx, dy) = dir.offset();
        let x = cell as i32 % w + i32::from(dx);
        let y = cell as i32 / w + i32::from(dy);
        (x >= 0 && x < w && y >= 0 && y < h).then(|| (y * w + x) as usize)
    }

    /// Returns the neighbour in a direction when the edge between the two
    /// cells carries no arrow either way, which asserts the two sets are
    /// incomparable.
    #[must_use]
    pub fn incomparable_neighbour(&self, cell: usize, dir: Direction) -> Option<usize> {
        if self.arrow(cell, dir) {
            return None;
        }
        let other = self.neighbour(cell, dir)?;
        if self.arrow(other, dir.opposite()) {
            return None;
        }
        Some(other)
    }
}
