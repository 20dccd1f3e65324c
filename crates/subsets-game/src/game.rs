//! A play session over one board.

use std::fmt;

use subsets_core::{Board, Status};
use subsets_solver::Solver;

use crate::moves::{Move, PlayerOp};

/// Errors rejecting a move. The board is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The move names a cell outside the grid.
    PositionOutOfRange,
    /// The move names a letter outside the alphabet.
    BitOutOfRange,
    /// The move would change a bit given by the puzzle description.
    ImmutableBit,
    /// The givens contradict each other, so there is nothing to solve.
    PuzzleInvalid,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::PositionOutOfRange => write!(f, "move position is outside the grid"),
            GameError::BitOutOfRange => write!(f, "bit index is outside the alphabet"),
            GameError::ImmutableBit => write!(f, "cannot modify a bit given by the puzzle"),
            GameError::PuzzleInvalid => write!(f, "Puzzle is invalid."),
        }
    }
}

impl std::error::Error for GameError {}

/// The player-visible marking of one letter in one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitState {
    /// The letter is marked as present.
    Known,
    /// The letter is unmarked.
    Unknown,
    /// The letter is marked as absent.
    Contradicted,
}

/// A Subsets game session.
///
/// Owns the board being played and latches a completion flag: once the
/// validator has accepted the board after a move, the game counts as
/// completed even if the player scribbles on it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    completed: bool,
}

impl Game {
    /// Starts a session on a loaded board.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            completed: false,
        }
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns `true` once the board has validated as complete.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the player-visible marking of one letter in one cell.
    #[must_use]
    pub fn bit_state(&self, cell: usize, bit: u8) -> BitState {
        if self.board.known(cell).contains(bit) {
            BitState::Known
        } else if self.board.mask(cell).contains(bit) {
            BitState::Unknown
        } else {
            BitState::Contradicted
        }
    }

    /// Applies a move to the board.
    ///
    /// After every successful application the board is revalidated and the
    /// completion flag latched if it has become complete.
    ///
    /// # Errors
    ///
    /// Player moves are rejected, with no state change, when they name a
    /// cell or letter out of range or try to change a given bit. Solve
    /// moves always apply; the solver respects givens by construction.
    pub fn execute(&mut self, mv: &Move) -> Result<(), GameError> {
        match mv {
            Move::Player { op, cell, bit } => self.execute_player(*op, *cell, *bit)?,
            Move::Solve(pairs) => {
                let cells = self.board.params().cell_count();
                for (cell, &(known, mask)) in pairs.iter().enumerate().take(cells) {
                    self.board.set_known(cell, known);
                    self.board.set_mask(cell, mask);
                }
            }
        }
        if self.board.status() == Status::Complete {
            self.completed = true;
        }
        Ok(())
    }

    fn execute_player(&mut self, op: PlayerOp, cell: usize, bit: u8) -> Result<(), GameError> {
        if cell >= self.board.params().cell_count() {
            return Err(GameError::PositionOutOfRange);
        }
        if bit >= self.board.params().n {
            return Err(GameError::BitOutOfRange);
        }
        if self.board.immutable(cell).contains(bit) {
            return Err(GameError::ImmutableBit);
        }

        let mut known = self.board.known(cell);
        let mut mask = self.board.mask(cell);
        match op {
            PlayerOp::Known => {
                known.insert(bit);
                mask.insert(bit);
            }
            PlayerOp::Contradict => {
                known.remove(bit);
                mask.remove(bit);
            }
            PlayerOp::Unknown => {
                known.remove(bit);
                mask.insert(bit);
            }
        }
        self.board.set_known(cell, known);
        self.board.set_mask(cell, mask);
        Ok(())
    }

    /// Produces the solve move for this game's puzzle.
    ///
    /// The solver runs from the givens alone, so the player's markings do
    /// not influence the result. The move carries the solver's final bounds
    /// for every cell; on an unfinished puzzle that is as far as the rules
    /// reach.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PuzzleInvalid`] when the givens contradict each
    /// other.
    pub fn solve_move(&self, solver: &Solver) -> Result<Move, GameError> {
        let mut solved = self.board.clone();
        if solver.solve(&mut solved) == Status::Invalid {
            return Err(GameError::PuzzleInvalid);
        }
        let pairs = solved
            .cells()
            .map(|cell| (solved.known(cell), solved.mask(cell)))
            .collect();
        Ok(Move::Solve(pairs))
    }
}
