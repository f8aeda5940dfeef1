//! Error types for board construction and solving

use thiserror::Error;

/// Error type for building a board from a grid or from its text form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The grid has no rows
    #[error("board is empty")]
    Empty,
    /// Boards smaller than 2x2 have no legal moves and no twin
    #[error("board dimension must be at least 2, got {0}")]
    DimensionTooSmall(usize),
    /// A row does not have exactly `n` tiles
    #[error("row {row} has {len} tiles, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A tile value is outside `0..n*n`
    #[error("tile {tile} is out of range for a {size}x{size} board")]
    TileOutOfRange { tile: u32, size: usize },
    /// A tile value appears more than once
    #[error("tile {0} appears more than once")]
    DuplicateTile(u32),
    /// The text form ended before all tiles were read
    #[error("expected {expected} tiles, found {found}")]
    MissingTokens { expected: usize, found: usize },
    /// The text form has data after the last tile
    #[error("unexpected trailing input: {0:?}")]
    TrailingTokens(String),
    /// A token in the text form is not a non-negative integer
    #[error("invalid token: {0:?}")]
    InvalidToken(String),
}

/// Error type for a solve that stopped before reaching a verdict
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The configured expansion budget ran out
    #[error("expansion budget of {0} exhausted")]
    BudgetExhausted(u64),
    /// The caller's cancellation flag was raised
    #[error("search cancelled")]
    Cancelled,
    /// A frontier ran dry; every board has at least two neighbors so this
    /// indicates a broken board invariant
    #[error("{0} frontier exhausted without reaching the goal")]
    FrontierExhausted(&'static str),
}
