use log::debug;
use subsets_core::Direction;

use crate::rule::Rule;
use crate::state::SolveState;

const NAME: &str = "arrow witness";

/// Removes arrow endpoints that no feasible partner can justify.
///
/// An arrow demands a *strict* containment: the target's set is a proper
/// subset of the source's, since distinctness forbids equality. A value can
/// therefore survive at the source only while some strictly smaller value
/// survives at the target, and at the target only while some strictly
/// larger value survives at the source. In particular the empty set never
/// survives at an arrow's source, nor the universal set at its target.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArrowWitness;

impl ArrowWitness {
    /// Creates a new `ArrowWitness` rule.
    #[must_use]
    pub const fn new() -> Self {
        ArrowWitness
    }
}

impl Rule for ArrowWitness {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, state: &mut SolveState) -> bool {
        let mut changed = false;

        for cell in state.board.cells() {
            for dir in Direction::ALL {
                if !state.board.arrow(cell, dir) {
                    continue;
                }
                let Some(target) = state.board.neighbour(cell, dir) else {
                    continue;
                };

                let sources: Vec<_> = state.cube.feasible_values(cell).collect();
                for value in sources {
                    let witnessed = state
                        .cube
                        .feasible_values(target)
                        .any(|sub| sub != value && sub.is_subset_of(value));
                    if !witnessed {
                        debug!(
                            "{NAME}: value {} at cell {cell} has no proper subset \
                             left at {target}",
                            value.bits()
                        );
                        state.cube.eliminate(cell, value);
                        changed = true;
                    }
                }

                let targets: Vec<_> = state.cube.feasible_values(target).collect();
                for value in targets {
                    let witnessed = state
                        .cube
                        .feasible_values(cell)
                        .any(|sup| sup != value && value.is_subset_of(sup));
                    if !witnessed {
                        debug!(
                            "{NAME}: value {} at cell {target} has no proper superset \
                             left at {cell}",
                            value.bits()
                        );
                        state.cube.eliminate(target, value);
                        changed = true;
                    }
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
    use crate::state::SolveState;
    use crate::testing::RuleTester;

    #[test]
    fn test_extremes_fall_off_a_fresh_arrow() {
        let mut board = Board::new(GameParams::default());
        board.insert_clue(0, Direction::Right);

        RuleTester::new(board)
            .apply_once(&ArrowWitness::new())
            .assert_changed()
            // the source cannot be empty, the target cannot be universal
            .assert_eliminated_exact(0, [0b0000])
            .assert_eliminated_exact(1, [0b1111]);
    }

    #[test]
    fn test_source_needs_a_proper_subset_at_target() {
        let mut board = Board::new(GameParams::default());
        board.insert_clue(0, Direction::Right);
        let mut state = SolveState::new(board);
        // leave only {D} feasible at the target
        for value in ValueSet::all(4) {
            if value.bits() != 0b1000 {
                state.eliminate(1, value);
            }
        }

        RuleTester::with_state(state)
            .apply_once(&ArrowWitness::new())
            // survivors at the source all strictly contain {D}
            .assert_feasible_exact(0, [0b1001, 0b1010, 0b1011, 0b1100, 0b1101, 0b1110, 0b1111])
            .assert_feasible_exact(1, [0b1000]);
    }

    #[test]
    fn test_target_needs_a_proper_superset_at_source() {
        let mut board = Board::new(GameParams::default());
        board.insert_clue(0, Direction::Right);
        let mut state = SolveState::new(board);
        // leave only {A, B} feasible at the source
        for value in ValueSet::all(4) {
            if value.bits() != 0b0011 {
                state.eliminate(0, value);
            }
        }

        RuleTester::with_state(state)
            .apply_once(&ArrowWitness::new())
            // the target must be a proper subset of {A, B}
            .assert_feasible_exact(1, [0b0000, 0b0001, 0b0010])
            .assert_feasible_exact(0, [0b0011]);
    }

    #[test]
    fn test_no_progress_without_arrows() {
        RuleTester::new(Board::new(GameParams::default()))
            .apply_once(&ArrowWitness::new())
            .assert_stuck();
    }
}
