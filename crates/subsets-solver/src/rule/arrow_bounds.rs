use log::debug;
use subsets_core::Direction;

use crate::rule::Rule;
use crate::state::SolveState;

const NAME: &str = "arrow bounds";

/// Propagates bounds along containment arrows.
///
/// For an arrow from a source cell to a target cell, the target's set is
/// contained in the source's. Every letter the target is known to contain
/// must therefore appear in the source, and every letter the source has
/// ruled out is ruled out for the target as well. The whole board is swept
/// in one application, so chains of arrows settle quickly.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArrowBounds;

impl ArrowBounds {
    /// Creates a new `ArrowBounds` rule.
    #[must_use]
    pub const fn new() -> Self {
        ArrowBounds
    }
}

impl Rule for ArrowBounds {
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

                let known = state.board.known(cell) | state.board.known(target);
                if known != state.board.known(cell) {
                    debug!("{NAME}: arrow toward {target} confirms letters at {cell}");
                    state.board.set_known(cell, known);
                    changed = true;
                }

                let mask = state.board.mask(target) & state.board.mask(cell);
                if mask != state.board.mask(target) {
                    debug!("{NAME}: arrow from {cell} removes letters at {target}");
                    state.board.set_mask(target, mask);
                    changed = true;
                }
            }
        }
        changed
    }
}
