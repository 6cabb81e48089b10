use crate::error::SolveError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::ops::Add;

/// A position on the board: `x` is the column, `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Search state of one board square
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub position: Coord,
    /// Fewest knight moves from the start; `None` until visited
    pub move_count: Option<u32>,
    /// Square this cell was first reached from (may be the start, which has no Cell)
    pub predecessor: Option<Coord>,
    pub visited: bool,
}

impl Cell {
    pub fn new(position: Coord) -> Self {
        Cell {
            position,
            move_count: None,
            predecessor: None,
            visited: false,
        }
    }
}

/// Board with obstacles and per-cell search state
///
/// The start square is tracked separately and never gets a `Cell`: it is the
/// origin of the search, not something the search reaches.
#[derive(Debug, Clone)]
pub struct Grid {
    pub rows: i32,
    pub cols: i32,
    start: Coord,
    obstacles: HashSet<Coord>,
    cells: HashMap<Coord, Cell>,
    unvisited: HashSet<Coord>,
}

impl Grid {
    /// Build one unvisited cell per in-bounds, non-obstacle square except `start`
    pub fn new(rows: i32, cols: i32, obstacles: &[Coord], start: Coord) -> Self {
        let obstacles: HashSet<Coord> = obstacles.iter().copied().collect();
        let mut cells = HashMap::new();

        for y in 0..rows {
            for x in 0..cols {
                let pos = Coord::new(x, y);
                if pos == start || obstacles.contains(&pos) {
                    continue;
                }
                cells.insert(pos, Cell::new(pos));
            }
        }

        let unvisited = cells.keys().copied().collect();

        Grid {
            rows,
            cols,
            start,
            obstacles,
            cells,
            unvisited,
        }
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn is_in_bounds(&self, pos: Coord) -> bool {
        pos.x >= 0 && pos.x < self.cols && pos.y >= 0 && pos.y < self.rows
    }

    pub fn is_obstacle(&self, pos: Coord) -> bool {
        self.obstacles.contains(&pos)
    }

    /// In bounds and not blocked. Says nothing about visitation.
    pub fn is_traversable(&self, pos: Coord) -> bool {
        self.is_in_bounds(pos) && !self.is_obstacle(pos)
    }

    /// False for the start square and anything off the board: those never enter the working set
    pub fn is_unvisited(&self, pos: Coord) -> bool {
        self.unvisited.contains(&pos)
    }

    /// Assign a cell its move count and predecessor, exactly once
    pub fn claim(&mut self, pos: Coord, move_count: u32, predecessor: Coord) -> Result<(), SolveError> {
        let cell = self.cells.get_mut(&pos).ok_or(SolveError::StateConflict {
            position: pos,
            detail: "claimed a square that has no cell",
        })?;

        if cell.visited || !self.unvisited.remove(&pos) {
            return Err(SolveError::StateConflict {
                position: pos,
                detail: "cell claimed twice",
            });
        }

        cell.move_count = Some(move_count);
        cell.predecessor = Some(predecessor);
        cell.visited = true;
        Ok(())
    }

    pub fn cell(&self, pos: Coord) -> Option<&Cell> {
        self.cells.get(&pos)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn unvisited_count(&self) -> usize {
        self.unvisited.len()
    }
}
