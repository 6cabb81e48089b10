pub mod config;
pub mod error;
pub mod grid;
pub mod puzzle;
pub mod solver;

pub use error::{PuzzleError, SolveError};
pub use grid::{Cell, Coord, Grid};
pub use puzzle::{render_board, Puzzle};
pub use solver::{format_path, solve, Solution, Solver, KNIGHT_MOVES};
