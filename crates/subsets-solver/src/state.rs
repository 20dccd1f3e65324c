//! Solver state: a board together with its cube and value counts.

use subsets_core::{Board, Status, ValueSet};

use crate::cube::Cube;

/// The working state a solve call threads through its rules.
///
/// Bundles the board being solved, the [`Cube`] of feasible values, and the
/// per-value occurrence counts from the most recent validation. Rules
/// mutate the board's bounds and the cube; the counts are a snapshot that
/// the solve loop refreshes at the start of every pass.
#[derive(Debug, Clone)]
pub struct SolveState {
    pub(crate) board: Board,
    pub(crate) cube: Cube,
    pub(crate) counts: Vec<usize>,
}

impl SolveState {
    /// Creates a fresh state for a board, with an all-feasible cube.
    #[must_use]
    pub fn new(board: Board) -> Self {
        let cube = Cube::new(board.params().cell_count(), board.params().n);
        let mut state = Self {
            board,
            cube,
            counts: Vec::new(),
        };
        state.refresh();
        state
    }

    /// Revalidates the board, refreshing the value counts.
    ///
    /// Returns the board's current status.
    pub fn refresh(&mut self) -> Status {
        let validation = self.board.validate();
        self.counts = validation.counts;
        validation.status
    }

    /// Returns the board being solved.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cube of feasible values.
    #[must_use]
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Rules a value out at a cell. See [`Cube::eliminate`].
    pub fn eliminate(&mut self, cell: usize, value: ValueSet) -> bool {
        self.cube.eliminate(cell, value)
    }

    /// Consumes the state, returning the board with its deduced bounds.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }
}
