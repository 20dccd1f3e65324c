use log::debug;
use subsets_core::{Direction, ValueSet};

use crate::rule::Rule;
use crate::state::SolveState;

const NAME: &str = "incomparability";

/// Eliminates comparable values across edges with no arrow.
///
/// When no arrow is drawn between two neighbours, neither set contains the
/// other. Two deductions follow:
///
/// - An unresolved endpoint of such an edge can hold neither the empty set
///   nor the universal set, since those are comparable with everything.
/// - Once one endpoint is resolved, every value comparable with it (any
///   subset or superset, including the value itself) is infeasible at the
///   other endpoint.
#[derive(Debug, Default, Clone, Copy)]
pub struct Incomparable;

impl Incomparable {
    /// Creates a new `Incomparable` rule.
    #[must_use]
    pub const fn new() -> Self {
        Incomparable
    }
}

impl Rule for Incomparable {
    fn name(&self) -> &'static str {
        NAME
    }

    fn apply(&self, state: &mut SolveState) -> bool {
        let mut changed = false;
        let n = state.board.params().n;
        let full = state.board.params().full_set();

        for cell in state.board.cells() {
            for dir in Direction::ALL {
                let Some(other) = state.board.incomparable_neighbour(cell, dir) else {
                    continue;
                };

                if !state.board.is_resolved(cell) {
                    if state.cube.is_feasible(cell, ValueSet::EMPTY)
                        || state.cube.is_feasible(cell, full)
                    {
                        debug!(
                            "{NAME}: cell {cell} is incomparable with {other}, \
                             removing the empty and the full set"
                        );
                        state.cube.eliminate(cell, ValueSet::EMPTY);
                        state.cube.eliminate(cell, full);
                        changed = true;
                    }
                } else if !state.board.is_resolved(other) {
                    let resolved = state.board.known(cell);
                    for value in ValueSet::all(n) {
                        if !state.cube.is_feasible(other, value) {
                            continue;
                        }
                        if value.is_subset_of(resolved) || resolved.is_subset_of(value) {
                            debug!(
                                "{NAME}: value {} at cell {other} is comparable with \
                                 the set at {cell}",
                                value.bits()
                            );
                            state.cube.eliminate(other, value);
                            changed = true;
                        }
                    }
                }
            }
        }
        changed
    }
}
