//! The deduction rules applied by the solver.
//!
//! Each rule inspects the solver state and either tightens cell bounds or
//! eliminates cube entries. Rules report whether they made progress; the
//! solve loop retries the list from the top after every success, so the
//! cheaper rules near the front get first refusal.
//!
//! In list order:
//!
//! 1. [`SyncBounds`] drops cube entries the bounds already exclude.
//! 2. [`UniqueValue`] drops values that are resolved elsewhere.
//! 3. [`ArrowBounds`] propagates bounds along containment arrows.
//! 4. [`Incomparable`] eliminates comparable values across arrowless edges.
//! 5. [`BoundsFromCube`] folds the surviving values back into the bounds.
//! 6. [`UniqueLocation`] places a value with only one cell left to go.
//! 7. [`ArrowWitness`] removes arrow endpoints with no feasible partner.

use std::fmt::Debug;

use crate::state::SolveState;

mod arrow_bounds;
mod arrow_witness;
mod bounds_from_cube;
mod incomparable;
mod sync_bounds;
mod unique_location;
mod unique_value;

pub use arrow_bounds::ArrowBounds;
pub use arrow_witness::ArrowWitness;
pub use bounds_from_cube::BoundsFromCube;
pub use incomparable::Incomparable;
pub use sync_bounds::SyncBounds;
pub use unique_location::UniqueLocation;
pub use unique_value::UniqueValue;

/// A single deduction rule.
///
/// Rules must be strict: they may only discard possibilities that are
/// provably inconsistent with the puzzle constraints, and they must report
/// progress only when they actually changed the state. The solve loop's
/// termination depends on both.
pub trait Rule: Debug + Send + Sync {
    /// Returns the name of the rule, for statistics and traces.
    fn name(&self) -> &'static str;

    /// Applies the rule to the state.
    ///
    /// Returns `true` if any bound was tightened or any cube entry
    /// eliminated.
    fn apply(&self, state: &mut SolveState) -> bool;
}

/// A boxed rule.
pub type BoxedRule = Box<dyn Rule>;

/// Returns all rules in their standard priority order.
#[must_use]
pub fn all_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(SyncBounds::new()),
        Box::new(UniqueValue::new()),
        Box::new(ArrowBounds::new()),
        Box::new(Incomparable::new()),
        Box::new(BoundsFromCube::new()),
        Box::new(UniqueLocation::new()),
        Box::new(ArrowWitness::new()),
    ]
}
