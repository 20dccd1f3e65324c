use log::debug;
use subsets_core::ValueSet;

use crate::rule::Rule;
use crate::state::SolveState;

const NAME: &str = "bounds from cube";

/// Recomputes cell bounds from the values surviving in the cube.
///
/// Letters present in every surviving value are confirmed; letters present
/// in none are ruled out. This is the only rule that moves information from
/// the cube back into the bounds, where the arrow rules and the validator
/// can see it.
#[derive(Debug, Default, Clone, Copy)]
pub struct BoundsFromCube;

impl BoundsFromCube {
    /// Creates a new `BoundsFromCube` rule.
    #[must_use]
    pub const fn new() -> Self {
        BoundsFromCube
    }
}

impl Rule for BoundsFromCube {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, state: &mut SolveState) -> bool {
        let mut changed = false;
        let full = state.board.params().full_set();

        for cell in state.board.cells() {
            let mut union = ValueSet::EMPTY;
            let mut intersection = full;
            for value in state.cube.feasible_values(cell) {
                union |= value;
                intersection &= value;
            }

            let known = state.board.known(cell) | intersection;
            if known != state.board.known(cell) {
                debug!("{NAME}: surviving values at cell {cell} confirm letters");
                state.board.set_known(cell, known);
                changed = true;
            }

            let mask = state.board.mask(cell) & union;
            if mask != state.board.mask(cell) {
                debug!("{NAME}: surviving values at cell {cell} rule letters out");
                state.board.set_mask(cell, mask);
                changed = true;
            }
        }
        changed
    }
}
