//! The fixed-point solve loop.

use log::debug;
use subsets_core::{Board, Status};

use crate::rule::{all_rules, BoxedRule};
use crate::state::SolveState;

/// Statistics collected during a solve call.
///
/// Tracks how often each rule fired, in solver order, plus the total number
/// of steps. A completed board that was fully given solves in zero steps.
#[derive(Debug, Clone)]
pub struct SolveStats {
    applications: Vec<usize>,
    total_steps: usize,
}

impl SolveStats {
    /// Returns per-rule application counts in solver order.
    ///
    /// Rules that never fired are included with a count of `0`.
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns the total number of rule applications.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Returns `true` if any rule fired at least once.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.total_steps > 0
    }
}

/// A purely deductive solver for Subsets boards.
///
/// The solver applies its rules in priority order. Whenever a rule makes
/// progress the list is retried from the top, so the cheap bound
/// propagation runs to quiescence before the more expensive cube scans get
/// another turn. The loop ends as soon as the validator delivers a terminal
/// verdict, or when a whole pass fires nothing.
///
/// # Examples
///
/// ```
/// use subsets_core::{Board, GameParams, Status};
/// use subsets_solver::Solver;
///
/// let desc = "0,1L,2,3L,4U,_UL,6U,7UL,8,9L,10,11L,12U,13UL,14U,15UL";
/// let mut board = Board::from_desc(GameParams::default(), desc).unwrap();
///
/// let solver = Solver::with_all_rules();
/// let mut stats = solver.new_stats();
/// let status = solver.solve_with_stats(&mut board, &mut stats);
///
/// assert_eq!(status, Status::Complete);
/// assert!(stats.has_progress());
/// ```
#[derive(Debug)]
pub struct Solver {
    rules: Vec<BoxedRule>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::with_all_rules()
    }
}

impl Solver {
    /// Creates a solver with the given rules, tried in order.
    #[must_use]
    pub fn new(rules: Vec<BoxedRule>) -> Self {
        Self { rules }
    }

    /// Creates a solver with all rules in their standard order.
    #[must_use]
    pub fn with_all_rules() -> Self {
        Self::new(all_rules())
    }

    /// Creates a statistics object aligned with this solver's rule order.
    #[must_use]
    pub fn new_stats(&self) -> SolveStats {
        SolveStats {
            applications: vec![0; self.rules.len()],
            total_steps: 0,
        }
    }

    /// Returns the configured rules in application order.
    ///
    /// The returned slice defines the index mapping used by
    /// [`SolveStats::applications`].
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Solves a board in place as far as the rules reach.
    ///
    /// Every cell not pinned by the description is first reset to open
    /// bounds, so the result does not depend on guesses a player may have
    /// pencilled in. On return the board carries all deduced bounds.
    ///
    /// The returned status is the validator's verdict at termination:
    /// [`Status::Complete`] when the rules forced the whole board,
    /// [`Status::Invalid`] when the givens contradict themselves, and
    /// [`Status::Unfinished`] when the rules ran dry.
    pub fn solve(&self, board: &mut Board) -> Status {
        let mut stats = self.new_stats();
        self.solve_with_stats(board, &mut stats)
    }

    /// Solves a board in place, recording rule statistics.
    ///
    /// See [`solve`](Self::solve).
    pub fn solve_with_stats(&self, board: &mut Board, stats: &mut SolveStats) -> Status {
        debug_assert_eq!(self.rules.len(), stats.applications.len());

        for cell in board.cells() {
            if board.immutable(cell).is_empty() {
                board.blank_cell(cell);
            }
        }

        let mut state = SolveState::new(board.clone());
        loop {
            let status = state.refresh();
            if status != Status::Unfinished {
                *board = state.into_board();
                return status;
            }

            let mut fired = false;
            for (index, rule) in self.rules.iter().enumerate() {
                if rule.apply(&mut state) {
                    debug!("applied rule: {}", rule.name());
                    stats.applications[index] += 1;
                    stats.total_steps += 1;
                    fired = true;
                    break;
                }
            }
            if !fired {
                *board = state.into_board();
                return Status::Unfinished;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use subsets_core::{Board, GameParams, ValueSet};

    use super::*;
    use crate::rule::{ArrowBounds, SyncBounds};

    /// The fully-given identity puzzle (values 0..16 in row-major order).
    const IDENTITY_DESC: &str = "0,1L,2,3L,4U,5UL,6U,7UL,8,9L,10,11L,12U,13UL,14U,15UL";

    fn parse(desc: &str) -> Board {
        Board::from_desc(GameParams::default(), desc).unwrap()
    }

    #[test]
    fn test_fully_given_board_solves_without_rules() {
        let mut board = parse(IDENTITY_DESC);
        let solver = Solver::with_all_rules();
        let mut stats = solver.new_stats();

        let status = solver.solve_with_stats(&mut board, &mut stats);
        assert_eq!(status, Status::Complete);
        assert_eq!(stats.total_steps(), 0);
        assert!(!stats.has_progress());
    }

    #[test]
    fn test_single_blank_cell_is_recovered() {
        let desc = "0,1L,2,3L,4U,_UL,6U,7UL,8,9L,10,11L,12U,13UL,14U,15UL";
        let mut board = parse(desc);
        let solver = Solver::with_all_rules();

        let status = solver.solve(&mut board);
        assert_eq!(status, Status::Complete);
        assert_eq!(board.value(5), Some(ValueSet::from_bits(5)));
    }

    #[test]
    fn test_solved_board_agrees_with_validator() {
        let desc = "0,1L,2,3L,4U,_UL,6U,7UL,8,9L,_,11L,12U,13UL,14U,15UL";
        let mut board = parse(desc);
        let solver = Solver::with_all_rules();

        if solver.solve(&mut board) == Status::Complete {
            assert_eq!(board.status(), Status::Complete);
        }
    }

    #[test]
    fn test_contradictory_givens_are_invalid() {
        // two cells fixed to the same value
        let desc = "0,0,2,3L,4U,5UL,6U,7UL,8,9L,10,11L,12U,13UL,14U,15UL";
        let mut board = parse(desc);
        let solver = Solver::with_all_rules();

        assert_eq!(solver.solve(&mut board), Status::Invalid);
    }

    #[test]
    fn test_insufficient_rules_leave_board_unfinished() {
        // bound propagation alone cannot finish an almost-empty board
        let desc = "_,1L,_,3L,4U,_UL,_U,_UL,_,_L,_,_L,_U,_UL,_U,_UL";
        let mut board = parse(desc);
        let solver = Solver::new(vec![
            Box::new(SyncBounds::new()),
            Box::new(ArrowBounds::new()),
        ]);

        let status = solver.solve(&mut board);
        assert_eq!(status, Status::Unfinished);
    }

    #[test]
    fn test_solver_resets_player_guesses() {
        let desc = "0,1L,2,3L,4U,_UL,6U,7UL,8,9L,10,11L,12U,13UL,14U,15UL";
        let mut board = parse(desc);
        // a wrong pencil mark at the blank cell must not derail the solve
        board.set_known(5, ValueSet::from_bits(0b1111));

        let solver = Solver::with_all_rules();
        assert_eq!(solver.solve(&mut board), Status::Complete);
        assert_eq!(board.value(5), Some(ValueSet::from_bits(5)));
    }

    #[test]
    fn test_solving_is_idempotent() {
        // deductions are deterministic, so re-solving a solved board
        // reproduces it exactly
        let desc = "0,1L,2,3L,4U,_UL,6U,7UL,8,9L,10,11L,12U,13UL,14U,15UL";
        let mut board = parse(desc);
        let solver = Solver::with_all_rules();
        solver.solve(&mut board);
        let first = board.clone();
        solver.solve(&mut board);
        assert_eq!(board, first);
    }

    #[test]
    fn test_stats_align_with_rules() {
        let solver = Solver::with_all_rules();
        let stats = solver.new_stats();
        assert_eq!(stats.applications().len(), solver.rules().len());
        assert_eq!(stats.total_steps(), 0);
    }
}
