use crate::config::{BoardConfig, ObstacleConfig};
use crate::error::PuzzleError;
use crate::grid::{Coord, Grid};
use crate::solver::{self, Solution};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A complete solve request: board size, obstacles, knight and target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    pub rows: i32,
    pub cols: i32,
    pub obstacles: Vec<Coord>,
    pub start: Coord,
    pub target: Coord,
}

impl Puzzle {
    /// Random board: a handful of obstacles, a target, then the knight on a free square
    pub fn random<R: Rng>(
        rng: &mut R,
        board: &BoardConfig,
        obstacles: &ObstacleConfig,
    ) -> Result<Self, PuzzleError> {
        if board.rows <= 0 || board.cols <= 0 {
            return Err(PuzzleError::Generation(format!(
                "board must be at least 1x1, got {}x{}",
                board.cols, board.rows
            )));
        }
        if obstacles.min > obstacles.max {
            return Err(PuzzleError::Generation(format!(
                "obstacle range {}..={} is empty",
                obstacles.min, obstacles.max
            )));
        }

        let random_cell = |rng: &mut R| {
            Coord::new(rng.gen_range(0..board.cols), rng.gen_range(0..board.rows))
        };

        let count = rng.gen_range(obstacles.min..=obstacles.max);
        let mut blocked: HashSet<Coord> = (0..count).map(|_| random_cell(rng)).collect();

        let target = random_cell(rng);
        blocked.remove(&target);

        let mut free: Vec<Coord> = (0..board.rows)
            .flat_map(|y| (0..board.cols).map(move |x| Coord::new(x, y)))
            .filter(|pos| *pos != target && !blocked.contains(pos))
            .collect();
        free.sort();

        let start = *free.choose(rng).ok_or_else(|| {
            PuzzleError::Generation("no free square left for the knight".to_string())
        })?;

        let mut obstacles: Vec<Coord> = blocked.into_iter().collect();
        obstacles.sort();

        Ok(Puzzle {
            rows: board.rows,
            cols: board.cols,
            obstacles,
            start,
            target,
        })
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.rows, self.cols, &self.obstacles, self.start)
    }

    pub fn solve(&self) -> Result<Solution, PuzzleError> {
        Ok(solver::solve(
            self.rows,
            self.cols,
            &self.obstacles,
            self.start,
            self.target,
        )?)
    }

    /// Save to file
    pub fn save_to_file(&self, path: &Path) -> Result<(), PuzzleError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load from file
    pub fn load_from_file(path: &Path) -> Result<Self, PuzzleError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Parse a text layout
    /// Format, one line per row:
    /// - s: knight (start)
    /// - t: target
    /// - k: knight already standing on the target
    /// - ■ or #: obstacle
    /// - □ or .: free square
    pub fn parse_layout(text: &str) -> Result<Self, PuzzleError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.is_empty() {
            return Err(PuzzleError::Layout("no rows found".to_string()));
        }

        let cols = lines[0].chars().count() as i32;
        let mut obstacles = Vec::new();
        let mut start = None;
        let mut target = None;

        for (y, line) in lines.iter().enumerate() {
            let width = line.chars().count() as i32;
            if width != cols {
                return Err(PuzzleError::Layout(format!(
                    "row {} is {} squares wide, expected {}",
                    y, width, cols
                )));
            }

            for (x, ch) in line.chars().enumerate() {
                let pos = Coord::new(x as i32, y as i32);
                let (is_start, is_target) = match ch {
                    '■' | '#' => {
                        obstacles.push(pos);
                        continue;
                    }
                    '□' | '.' => continue,
                    's' => (true, false),
                    't' => (false, true),
                    'k' => (true, true),
                    other => {
                        return Err(PuzzleError::Layout(format!(
                            "unexpected '{}' at {}",
                            other, pos
                        )))
                    }
                };
                if is_start && start.replace(pos).is_some() {
                    return Err(PuzzleError::Layout("more than one start".to_string()));
                }
                if is_target && target.replace(pos).is_some() {
                    return Err(PuzzleError::Layout("more than one target".to_string()));
                }
            }
        }

        let start = start.ok_or_else(|| PuzzleError::Layout("no start 's' found".to_string()))?;
        let target =
            target.ok_or_else(|| PuzzleError::Layout("no target 't' found".to_string()))?;

        Ok(Puzzle {
            rows: lines.len() as i32,
            cols,
            obstacles,
            start,
            target,
        })
    }

    /// Load a puzzle, JSON for `.json` files and a text layout for anything else
    pub fn load(path: &Path) -> Result<Self, PuzzleError> {
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            Self::load_from_file(path)
        } else {
            Self::parse_layout(&fs::read_to_string(path)?)
        }
    }

    /// Inverse of `parse_layout`
    pub fn to_layout(&self) -> String {
        render_board(self, &[])
    }
}

/// Draw the board as text with an optional path overlay
///
/// A knight standing on its target renders as `k`.
pub fn render_board(puzzle: &Puzzle, path: &[Coord]) -> String {
    let blocked: HashSet<Coord> = puzzle.obstacles.iter().copied().collect();
    let on_path: HashSet<Coord> = path.iter().copied().collect();
    let mut result = String::new();

    for y in 0..puzzle.rows {
        for x in 0..puzzle.cols {
            let pos = Coord::new(x, y);
            let symbol = if pos == puzzle.start && pos == puzzle.target {
                'k'
            } else if pos == puzzle.start {
                's'
            } else if pos == puzzle.target {
                't'
            } else if blocked.contains(&pos) {
                '■'
            } else if on_path.contains(&pos) {
                'o'
            } else {
                '□'
            };
            result.push(symbol);
        }
        result.push('\n');
    }

    result
}
