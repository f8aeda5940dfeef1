//! An optimal solver for the N-puzzle (sliding tile puzzle)
//!
//! Boards of any size `n >= 2` are solved with A* ordered by moves made plus
//! Manhattan distance. Solvability is decided without parity arithmetic: a
//! second search runs in lock-step on the board's twin (two tiles swapped),
//! and exactly one of the pair can reach the goal.
//!
//! # Basic Usage
//!
//! ```
//! use npuzzle::{PuzzleState, Solver};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board: PuzzleState = "3\n1 2 3\n4 5 6\n7 0 8\n".parse()?;
//! let outcome = Solver::new(board).solve()?;
//!
//! assert!(outcome.is_solvable());
//! assert_eq!(outcome.min_moves(), Some(1));
//!# Ok(())
//!# }
//! ```

pub mod error;

pub mod puzzle;

pub mod node;

pub mod frontier;

pub mod solver;

pub use error::{PuzzleError, SolveError};
pub use puzzle::{Move, PuzzleState, MOVES};
pub use solver::{Outcome, SearchStats, Solution, Solver, SolverConfig};
