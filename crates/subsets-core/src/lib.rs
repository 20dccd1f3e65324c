//! Core data structures for the Subsets puzzle.
//!
//! In Subsets, every cell of a rectangular board holds a distinct subset of
//! an N-letter alphabet. Neighbouring cells are related either by a
//! containment arrow (the target set is contained in the source set) or, when
//! no arrow is drawn in either direction, by incomparability: neither set
//! contains the other.
//!
//! This crate provides the board model and everything that operates on it
//! without deduction:
//!
//! - [`value_set`]: N-bit letter sets, the value domain of a cell
//! - [`direction`]: grid adjacency and per-cell arrow flags
//! - [`params`]: board parameters and their textual codec
//! - [`board`]: the grid of cells with clues, givens, and bounds
//! - [`validate`]: scoring a board as complete, unfinished, or invalid
//! - [`desc`]: the game-description codec
//! - [`text`]: a plain-text dump of a board
//!
//! The deduction engine lives in the `subsets-solver` crate.

pub mod board;
pub mod desc;
pub mod direction;
pub mod params;
pub mod text;
pub mod validate;
pub mod value_set;

pub use board::Board;
pub use desc::DescError;
pub use direction::{AdjFlags, Direction};
pub use params::{GameParams, ParamsError};
pub use validate::{Status, Validation};
pub use value_set::ValueSet;
