//! CLI argument parsing using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Sliding puzzle solver
#[derive(Parser, Debug)]
#[command(
    name = "npuzzle",
    about = "Solve sliding tile puzzles optimally, or report that they cannot be solved",
    version
)]
pub struct Args {
    /// Board files: the dimension followed by the tiles in reading order, 0 for the blank.
    /// A random board is generated when no file is given.
    pub files: Vec<PathBuf>,

    /// Dimension of a generated board
    #[arg(short, long, default_value_t = 3)]
    pub size: usize,

    /// Generate the board with this many random moves from the goal instead of
    /// a uniformly random (possibly unsolvable) arrangement
    #[arg(long, value_name = "STEPS", conflicts_with = "files")]
    pub scramble: Option<usize>,

    /// Seed for board generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Give up after this many node expansions per board
    #[arg(long)]
    pub max_expansions: Option<u64>,

    /// Number of threads for solving several files at once
    #[arg(long)]
    pub threads: Option<usize>,

    /// Print only the verdict and move count
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored boards
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
