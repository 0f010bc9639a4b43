use thiserror::Error;

use crate::grid::Point;

/// Errors raised while ingesting or combining boards and annotation grids.
///
/// Every check happens before any traversal starts, so a failed call never
/// leaves a partially processed grid behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Input could not be interpreted as a board at all.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// A diagram contained a character that is not a cell.
    #[error("invalid board: unexpected '{ch}' at row {row}, column {col}")]
    InvalidCell { ch: char, row: usize, col: usize },

    /// Rows of differing length, or row count different from row length.
    #[error("invalid board: row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    /// Size zero.
    #[error("invalid board: unsupported size {0}")]
    UnsupportedSize(usize),

    /// A caller-supplied coordinate lies outside the board.
    #[error("point ({}, {}) is outside a {size}x{size} board", .point.0, .point.1)]
    OutOfBounds { point: Point, size: usize },

    /// Two grids that must be combined have different sizes.
    #[error("grid size mismatch: {left} vs {right}")]
    SizeMismatch { left: usize, right: usize },
}

pub type Result<T> = std::result::Result<T, BoardError>;

/// Reasons a stone cannot be placed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("illegal move: point not empty")]
    Occupied,
    #[error("illegal move: suicide")]
    Suicide,
    #[error("illegal move: point outside the board")]
    OutOfBounds,
}
