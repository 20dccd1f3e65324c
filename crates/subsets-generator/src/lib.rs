//! Puzzle generator for the Subsets puzzle.
//!
//! Generation works backwards from a finished board. The values are laid
//! out in a random permutation, every containment arrow that happens to
//! hold is declared, and then the givens are whittled down: each cell is
//! tentatively blanked, in random order, and stays blank only if the solver
//! can still finish the board without it. Because the solver is purely
//! deductive, any board it completes has a forced, unique solution, so
//! every emitted puzzle is both solvable and unambiguous.
//!
//! # Examples
//!
//! ```
//! use subsets_core::GameParams;
//! use subsets_generator::PuzzleGenerator;
//! use subsets_solver::Solver;
//!
//! let solver = Solver::with_all_rules();
//! let generator = PuzzleGenerator::new(&solver);
//!
//! let puzzle = generator.generate_with_seed(GameParams::default(), 1);
//! println!("Game ID: {}", puzzle.desc);
//! ```

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use subsets_core::{Board, Direction, GameParams, Status, ValueSet};
use subsets_solver::Solver;

/// A generated puzzle: the problem, its solution, and the seed that made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle's game description, ready to hand to a board loader.
    pub desc: String,
    /// The problem board: given cells fixed, the rest blank.
    pub problem: Board,
    /// The fully resolved board the problem was carved from.
    pub solution: Board,
    /// The seed that reproduces this puzzle.
    pub seed: u64,
}

/// Generates Subsets puzzles that a given solver can finish.
///
/// The generator borrows the solver it probes with; the rule set of that
/// solver decides how sparse the givens can get. A weaker solver yields
/// easier puzzles with more givens, never unsolvable ones.
#[derive(Debug)]
pub struct PuzzleGenerator<'a> {
    solver: &'a Solver,
}

impl<'a> PuzzleGenerator<'a> {
    /// Creates a generator probing with the given solver.
    #[must_use]
    pub fn new(solver: &'a Solver) -> Self {
        Self { solver }
    }

    /// Generates a puzzle from a random seed.
    #[must_use]
    pub fn generate(&self, params: GameParams) -> GeneratedPuzzle {
        self.generate_with_seed(params, rand::random())
    }

    /// Generates the puzzle determined by a seed.
    ///
    /// The same seed and parameters always produce the same puzzle.
    #[must_use]
    pub fn generate_with_seed(&self, params: GameParams, seed: u64) -> GeneratedPuzzle {
        let mut rng = StdRng::seed_from_u64(seed);

        // lay the full power set out in a random permutation
        let mut values: Vec<u16> = (0..params.value_count() as u16).collect();
        values.shuffle(&mut rng);

        let mut board = Board::new(params);
        for (cell, &bits) in values.iter().enumerate() {
            board.fix(cell, ValueSet::from_bits(bits));
        }

        // declare every containment that holds; this is the puzzle's promise
        for cell in board.cells() {
            for dir in Direction::ALL {
                if let Some(other) = board.neighbour(cell, dir) {
                    let sub = board.known(other);
                    if sub.is_subset_of(board.known(cell)) {
                        board.insert_clue(cell, dir);
                    }
                }
            }
        }
        // drop givens while the solver still finishes the board
        let mut order: Vec<usize> = board.cells().collect();
        order.shuffle(&mut rng);
        for cell in order {
            board.unfix(cell);
            let mut trial = board.clone();
            if self.solver.solve(&mut trial) == Status::Complete {
                debug!("cell {cell} can be left blank");
            } else {
                debug!("cell {cell} must stay given");
                let value = board.known(cell);
                board.fix(cell, value);
            }
        }

        // the board still carries the full layout; snapshot it before
        // blanking the cells the description leaves open
        let solution = board.clone();
        let mut problem = board;
        for cell in problem.cells() {
            if problem.immutable(cell).is_empty() {
                problem.blank_cell(cell);
            }
        }
        let desc = problem.to_desc();

        GeneratedPuzzle {
            desc,
            problem,
            solution,
            seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(seed: u64) -> GeneratedPuzzle {
        let solver = Solver::with_all_rules();
        PuzzleGenerator::new(&solver).generate_with_seed(GameParams::default(), seed)
    }

    #[test]
    fn test_solution_holds_every_value_once() {
        let puzzle = generate(1);
        let mut seen = vec![false; 16];
        for cell in puzzle.solution.cells() {
            let value = puzzle.solution.value(cell).unwrap();
            assert!(!seen[value.bits() as usize]);
            seen[value.bits() as usize] = true;
        }
        assert_eq!(puzzle.solution.status(), Status::Complete);
    }

    #[test]
    fn test_generated_puzzle_is_solvable() {
        // the solver that carved the givens must be able to finish the
        // board, and its answer must be the layout the givens came from
        let puzzle = generate(2);
        let solver = Solver::with_all_rules();

        let mut board = puzzle.problem.clone();
        assert_eq!(solver.solve(&mut board), Status::Complete);
        assert_eq!(board, puzzle.solution);
    }

    #[test]
    fn test_description_round_trips() {
        let puzzle = generate(3);
        let board = Board::from_desc(GameParams::default(), &puzzle.desc).unwrap();
        assert_eq!(board, puzzle.problem);
        assert_eq!(board.to_desc(), puzzle.desc);
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let a = generate(4);
        let b = generate(4);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_vary() {
        // not guaranteed for every pair of seeds, but these differ
        let descs: Vec<_> = (10..14).map(|seed| generate(seed).desc).collect();
        assert!(descs.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn test_generator_respects_its_probing_solver() {
        // a generator driven by a weaker solver must still emit puzzles
        // that this weaker solver can finish
        let weak = Solver::new(vec![
            Box::new(subsets_solver::rule::SyncBounds::new()),
            Box::new(subsets_solver::rule::ArrowBounds::new()),
            Box::new(subsets_solver::rule::BoundsFromCube::new()),
        ]);

        let puzzle = PuzzleGenerator::new(&weak).generate_with_seed(GameParams::default(), 5);
        let mut trial = puzzle.problem.clone();
        assert_eq!(weak.solve(&mut trial), Status::Complete);
        assert_eq!(trial, puzzle.solution);
    }
}
