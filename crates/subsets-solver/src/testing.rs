//! Test utilities for deduction rules.
//!
//! This module provides [`RuleTester`], a small harness for verifying that
//! individual rules make exactly the deductions they should. It tracks the
//! initial and current solver state, so assertions can talk about what a
//! rule *changed* rather than the absolute state.

use subsets_core::{Board, ValueSet};

use crate::rule::Rule;
use crate::state::SolveState;

/// A test harness for rule implementations.
///
/// All methods return `self`, so tests read as a chain: set up a board,
/// apply a rule, assert the eliminations and bound changes. Assertion
/// failures panic with the offending cell and values, using
/// `#[track_caller]` to point at the test line.
#[derive(Debug)]
pub struct RuleTester {
    initial: SolveState,
    current: SolveState,
    changed: bool,
}

impl RuleTester {
    /// Creates a tester from a board, with an all-feasible cube.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self::with_state(SolveState::new(board))
    }

    /// Creates a tester from a prepared solver state.
    ///
    /// Use this when a rule under test needs earlier eliminations in the
    /// cube to have something to react to.
    #[must_use]
    pub fn with_state(state: SolveState) -> Self {
        Self {
            initial: state.clone(),
            current: state,
            changed: false,
        }
    }

    /// Applies the rule once, refreshing the value counts first.
    #[must_use]
    pub fn apply_once(mut self, rule: &dyn Rule) -> Self {
        self.current.refresh();
        self.changed = rule.apply(&mut self.current);
        self
    }

    /// Applies the rule repeatedly until it stops reporting progress.
    #[must_use]
    pub fn apply_until_stuck(mut self, rule: &dyn Rule) -> Self {
        let mut any = false;
        loop {
            self.current.refresh();
            let changed = rule.apply(&mut self.current);
            any |= changed;
            if !changed {
                break;
            }
        }
        self.changed = any;
        self
    }

    /// Asserts that the last application reported progress.
    #[track_caller]
    pub fn assert_changed(self) -> Self {
        assert!(self.changed, "Expected the rule to report progress");
        self
    }

    /// Asserts that the last application reported no progress.
    #[track_caller]
    pub fn assert_stuck(self) -> Self {
        assert!(!self.changed, "Expected the rule to report no progress");
        self
    }

    /// Asserts that exactly the given values were eliminated at a cell.
    #[track_caller]
    pub fn assert_eliminated_exact<I>(self, cell: usize, values: I) -> Self
    where
        I: IntoIterator<Item = u16>,
    {
        let expected: Vec<u16> = {
            let mut v: Vec<u16> = values.into_iter().collect();
            v.sort_unstable();
            v
        };
        let eliminated: Vec<u16> = self
            .initial
            .cube()
            .feasible_values(cell)
            .filter(|&v| !self.current.cube().is_feasible(cell, v))
            .map(ValueSet::bits)
            .collect();
        assert_eq!(
            eliminated, expected,
            "Expected exactly {expected:?} to be eliminated at cell {cell}, got {eliminated:?}"
        );
        self
    }

    /// Asserts that exactly the given values remain feasible at a cell.
    #[track_caller]
    pub fn assert_feasible_exact<I>(self, cell: usize, values: I) -> Self
    where
        I: IntoIterator<Item = u16>,
    {
        let expected: Vec<u16> = {
            let mut v: Vec<u16> = values.into_iter().collect();
            v.sort_unstable();
            v
        };
        let feasible: Vec<u16> = self
            .current
            .cube()
            .feasible_values(cell)
            .map(ValueSet::bits)
            .collect();
        assert_eq!(
            feasible, expected,
            "Expected exactly {expected:?} to be feasible at cell {cell}, got {feasible:?}"
        );
        self
    }

    /// Asserts a cell's bounds.
    #[track_caller]
    pub fn assert_bounds(self, cell: usize, known: u16, mask: u16) -> Self {
        let board = self.current.board();
        assert_eq!(
            (board.known(cell).bits(), board.mask(cell).bits()),
            (known, mask),
            "Unexpected bounds at cell {cell}"
        );
        self
    }

    /// Asserts that a cell has been resolved to the given value.
    #[track_caller]
    pub fn assert_resolved(self, cell: usize, value: u16) -> Self {
        let got = self.current.board().value(cell);
        assert_eq!(
            got,
            Some(ValueSet::from_bits(value)),
            "Expected cell {cell} to be resolved to {value}, got {got:?}"
        );
        self
    }

    /// Asserts that neither the cube row nor the bounds of a cell changed.
    #[track_caller]
    pub fn assert_no_change(self, cell: usize) -> Self {
        let before: Vec<_> = self.initial.cube().feasible_values(cell).collect();
        let after: Vec<_> = self.current.cube().feasible_values(cell).collect();
        assert_eq!(
            before, after,
            "Expected the cube row of cell {cell} to be unchanged"
        );
        assert_eq!(
            self.initial.board().known(cell),
            self.current.board().known(cell),
            "Expected the known bound of cell {cell} to be unchanged"
        );
        assert_eq!(
            self.initial.board().mask(cell),
            self.current.board().mask(cell),
            "Expected the mask bound of cell {cell} to be unchanged"
        );
        self
    }

    /// Returns the current solver state, for ad-hoc inspection.
    #[must_use]
    pub fn state(&self) -> &SolveState {
        &self.current
    }
}
