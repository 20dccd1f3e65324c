use log::debug;
use subsets_core::ValueSet;

use crate::rule::Rule;
use crate::state::SolveState;

const NAME: &str = "unique value";

/// Eliminates values that are already resolved at some other cell.
///
/// Every value occurs exactly once on a completed board, so once a cell has
/// resolved to a value, no unresolved cell can still hold it.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniqueValue;

impl UniqueValue {
    /// Creates a new `UniqueValue` rule.
    #[must_use]
    pub const fn new() -> Self {
        UniqueValue
    }
}

impl Rule for UniqueValue {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, state: &mut SolveState) -> bool {
        let mut changed = false;

        for bits in 0..state.counts.len() {
            if state.counts[bits] != 1 {
                continue;
            }
            let value = ValueSet::from_bits(bits as u16);
            for cell in state.board.cells() {
                if state.board.is_resolved(cell) {
                    continue;
                }
                if state.cube.eliminate(cell, value) {
                    debug!("{NAME}: value {bits} is already placed, removing it from cell {cell}");
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
    fn test_removes_placed_value_from_open_cells() {
        let mut board = Board::new(GameParams::default());
        board.resolve(0, ValueSet::from_bits(0b0011));

        let tester = RuleTester::new(board)
            .apply_once(&UniqueValue::new())
            .assert_changed()
            // the resolved cell's own row is left alone
            .assert_no_change(0);
        for cell in 1..16 {
            assert!(!tester.state().cube().is_feasible(cell, ValueSet::from_bits(0b0011)));
        }
    }

    #[test]
    fn test_duplicate_values_are_not_propagated() {
        // a value placed twice is a contradiction for the validator, not
        // grounds for elimination here
        let mut board = Board::new(GameParams::default());
        board.resolve(0, ValueSet::from_bits(0b0011));
        board.resolve(1, ValueSet::from_bits(0b0011));

        RuleTester::new(board)
            .apply_once(&UniqueValue::new())
            .assert_stuck();
    }

    #[test]
    fn test_no_progress_without_resolved_cells() {
        RuleTester::new(Board::new(GameParams::default()))
            .apply_once(&UniqueValue::new())
            .assert_stuck();
    }
}
