use log::debug;
use subsets_core::ValueSet;

use crate::rule::Rule;
use crate::state::SolveState;

const NAME: &str = "unique location";

/// Places a value that has exactly one feasible cell left.
///
/// Every value must appear somewhere. If a value is not resolved anywhere
/// yet and only a single cell still admits it, that cell is forced.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniqueLocation;

impl UniqueLocation {
    /// Creates a new `UniqueLocation` rule.
    #[must_use]
    pub const fn new() -> Self {
        UniqueLocation
    }
}

impl Rule for UniqueLocation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, state: &mut SolveState) -> bool {
        let mut changed = false;

        for bits in 0..state.counts.len() {
            if state.counts[bits] != 0 {
                continue;
            }
            let value = ValueSet::from_bits(bits as u16);
            let only = {
                let mut cells = state
                    .board
                    .cells()
                    .filter(|&cell| state.cube.is_feasible(cell, value));
                match (cells.next(), cells.next()) {
                    (Some(cell), None) => Some(cell),
                    _ => None,
                }
            };
            if let Some(cell) = only {
                debug!("{NAME}: cell {cell} is the last place value {bits} can go");
                state.board.resolve(cell, value);
                changed = true;
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use subsets_core::{Board, GameParams, ValueSet};

    use super::*;
    use crate::state::SolveState;
    use crate::testing::RuleTester;

    #[test]
    fn test_places_value_with_single_cell_left() {
        let mut state = SolveState::new(Board::new(GameParams::default()));
        let value = ValueSet::from_bits(0b0111);
        for cell in 0..16 {
            if cell != 3 {
                state.eliminate(cell, value);
            }
        }

        RuleTester::with_state(state)
            .apply_once(&UniqueLocation::new())
            .assert_changed()
            .assert_resolved(3, 0b0111);
    }

    #[test]
    fn test_two_candidate_cells_force_nothing() {
        let mut state = SolveState::new(Board::new(GameParams::default()));
        let value = ValueSet::from_bits(0b0111);
        for cell in 0..16 {
            if cell != 3 && cell != 4 {
                state.eliminate(cell, value);
            }
        }

        RuleTester::with_state(state)
            .apply_once(&UniqueLocation::new())
            .assert_stuck();
    }

    #[test]
    fn test_already_placed_value_is_skipped() {
        // the value occurs once, so its count is 1 and the rule ignores it
        let mut board = Board::new(GameParams::default());
        board.resolve(3, ValueSet::from_bits(0b0111));

        RuleTester::new(board)
            .apply_once(&UniqueLocation::new())
            .assert_stuck();
    }
}
