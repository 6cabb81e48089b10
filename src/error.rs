//! Error types for the knight path solver

use crate::grid::Coord;
use thiserror::Error;

/// Reasons a solve request can fail
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Start is off the board or sits on an obstacle
    #[error("invalid start {0}: out of bounds or on an obstacle")]
    InvalidStart(Coord),

    /// Target is off the board or sits on an obstacle
    #[error("invalid target {0}: out of bounds or on an obstacle")]
    InvalidTarget(Coord),

    /// Frontier ran dry before the target was reached
    #[error("target {target} is unreachable from {start}")]
    Unreachable { start: Coord, target: Coord },

    /// Search bookkeeping broke an invariant (a cell claimed twice, a broken predecessor chain)
    #[error("search state conflict at {position}: {detail}")]
    StateConflict {
        position: Coord,
        detail: &'static str,
    },
}

/// Errors from loading, parsing or generating puzzles
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("layout error: {0}")]
    Layout(String),

    #[error("board generation failed: {0}")]
    Generation(String),

    #[error(transparent)]
    Solve(#[from] SolveError),
}
