//! Constraint-propagation solver for the Subsets puzzle.
//!
//! The solver keeps two cooperating views of a board: the per-cell `known`
//! and `mask` bounds owned by the board itself, and a [`Cube`] recording
//! which complete values are still feasible at each cell. A fixed list of
//! deduction [`rule`]s moves information between the two until the board's
//! validator reports a terminal status or no rule makes progress.
//!
//! Every rule is a strict deduction: it only discards possibilities that
//! contradict the puzzle constraints under the current state. The solver
//! therefore never guesses and never backtracks; boards whose solution is
//! not forced by the implemented rules are left unfinished rather than
//! wrong.
//!
//! # Examples
//!
//! ```
//! use subsets_core::{Board, GameParams, Status};
//! use subsets_solver::Solver;
//!
//! let desc = "0,1L,2,3L,4U,_UL,6U,7UL,8,9L,10,11L,12U,13UL,14U,15UL";
//! let mut board = Board::from_desc(GameParams::default(), desc).unwrap();
//!
//! let solver = Solver::with_all_rules();
//! assert_eq!(solver.solve(&mut board), Status::Complete);
//! ```

pub mod cube;
pub mod rule;
pub mod solver;
pub mod state;
pub mod testing;

pub use cube::Cube;
pub use rule::{all_rules, BoxedRule, Rule};
pub use solver::{SolveStats, Solver};
pub use state::SolveState;
