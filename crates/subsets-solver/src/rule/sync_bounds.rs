use log::debug;
use subsets_core::ValueSet;

use crate::rule::Rule;
use crate::state::SolveState;

const NAME: &str = "cube sync";

/// Drops cube entries that the cell bounds already exclude.
///
/// A value is infeasible at a cell if it would use a letter the mask has
/// ruled out, or if it is missing a letter the cell is known to contain.
/// The other rules rely on this one having brought the cube in line with
/// the bounds before they run.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyncBounds;

impl SyncBounds {
    /// Creates a new `SyncBounds` rule.
    #[must_use]
    pub const fn new() -> Self {
        SyncBounds
    }
}

impl Rule for SyncBounds {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, state: &mut SolveState) -> bool {
        let mut changed = false;
        let n = state.board.params().n;

        for cell in state.board.cells() {
            let known = state.board.known(cell);
            let mask = state.board.mask(cell);
            for value in ValueSet::all(n) {
                if !state.cube.is_feasible(cell, value) {
                    continue;
                }
                if !value.is_subset_of(mask) {
                    debug!(
                        "{NAME}: value {} at cell {cell} uses letters the mask excludes",
                        value.bits()
                    );
                    state.cube.eliminate(cell, value);
                    changed = true;
                } else if !known.is_subset_of(value) {
                    debug!(
                        "{NAME}: value {} at cell {cell} lacks confirmed letters",
                        value.bits()
                    );
                    state.cube.eliminate(cell, value);
                    changed = true;
                }
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use subsets_core::{Board, GameParams, ValueSet};

    use super::*;
    use crate::testing::RuleTester;

    #[test]
    fn test_syncs_cube_with_bounds() {
        let mut board = Board::new(GameParams::default());
        board.set_known(0, ValueSet::from_bits(0b0001));
        board.set_mask(0, ValueSet::from_bits(0b0111));

        RuleTester::new(board)
            .apply_once(&SyncBounds::new())
            .assert_changed()
            // survivors contain A and avoid D
            .assert_feasible_exact(0, [0b0001, 0b0011, 0b0101, 0b0111]);
    }

    #[test]
    fn test_resolved_cell_keeps_only_its_value() {
        let mut board = Board::new(GameParams::default());
        board.resolve(5, ValueSet::from_bits(0b1010));

        RuleTester::new(board)
            .apply_once(&SyncBounds::new())
            .assert_feasible_exact(5, [0b1010]);
    }

    #[test]
    fn test_no_progress_on_blank_board() {
        RuleTester::new(Board::new(GameParams::default()))
            .apply_once(&SyncBounds::new())
            .assert_stuck()
            .assert_no_change(0);
    }

    #[test]
    fn test_second_application_is_stuck() {
        let mut board = Board::new(GameParams::default());
        board.set_mask(3, ValueSet::from_bits(0b0011));

        RuleTester::new(board)
            .apply_once(&SyncBounds::new())
            .assert_changed()
            .apply_once(&SyncBounds::new())
            .assert_stuck();
    }
}
