use crate::error::SolveError;
use crate::grid::{Coord, Grid};
use log::{debug, info, trace, warn};

/// The eight knight displacements
pub const KNIGHT_MOVES: [Coord; 8] = [
    Coord::new(1, 2),
    Coord::new(-1, 2),
    Coord::new(2, 1),
    Coord::new(-2, 1),
    Coord::new(1, -2),
    Coord::new(-1, -2),
    Coord::new(2, -1),
    Coord::new(-2, -1),
];

/// A finished solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Squares from target back to start, both included
    pub path: Vec<Coord>,
    pub move_count: u32,
}

impl Solution {
    /// The path read from start to target
    pub fn start_to_target(&self) -> Vec<Coord> {
        self.path.iter().rev().copied().collect()
    }
}

/// Layered breadth-first search over knight moves
///
/// Every square of layer `n` is claimed before any square of layer `n + 1`,
/// so the first claim of a square already carries its shortest move count.
pub struct Solver {
    grid: Grid,
    start: Coord,
    target: Coord,
    layers: u32,
}

impl Solver {
    /// Validate start (taken from the grid) and target before any expansion
    ///
    /// The grid must be fresh: every cell unvisited.
    pub fn new(grid: Grid, target: Coord) -> Result<Self, SolveError> {
        let start = grid.start();
        if !grid.is_traversable(start) {
            return Err(SolveError::InvalidStart(start));
        }
        if !grid.is_traversable(target) {
            return Err(SolveError::InvalidTarget(target));
        }
        if grid.unvisited_count() != grid.cell_count() {
            return Err(SolveError::StateConflict {
                position: start,
                detail: "grid already carries search state",
            });
        }

        Ok(Solver {
            grid,
            start,
            target,
            layers: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of layers expanded so far
    pub fn layers(&self) -> u32 {
        self.layers
    }

    /// Candidate squares one knight move from `from` that can still be claimed
    fn next_moves(&self, from: Coord) -> Vec<Coord> {
        KNIGHT_MOVES
            .iter()
            .map(|&offset| from + offset)
            .filter(|&pos| self.grid.is_traversable(pos) && self.grid.is_unvisited(pos))
            .collect()
    }

    fn target_reached(&self) -> bool {
        self.start == self.target || !self.grid.is_unvisited(self.target)
    }

    /// Expand wavefronts until the target is claimed; returns its move count
    pub fn expand(&mut self) -> Result<u32, SolveError> {
        if self.start == self.target {
            return Ok(0);
        }

        let mut frontier = vec![self.start];

        while !self.target_reached() {
            if frontier.is_empty() {
                warn!(
                    "Target {} unreachable from {} after {} layers",
                    self.target, self.start, self.layers
                );
                return Err(SolveError::Unreachable {
                    start: self.start,
                    target: self.target,
                });
            }

            let move_count = self.layers + 1;
            let mut next = Vec::new();

            'layer: for &from in &frontier {
                for pos in self.next_moves(from) {
                    // An earlier square of this layer may have taken it already
                    if !self.grid.is_unvisited(pos) {
                        continue;
                    }
                    self.grid.claim(pos, move_count, from)?;
                    trace!("Claimed {} at move {} from {}", pos, move_count, from);
                    next.push(pos);

                    if pos == self.target {
                        break 'layer;
                    }
                }
            }

            self.layers = move_count;
            debug!(
                "Layer {}: {} new squares, {} unvisited",
                move_count,
                next.len(),
                self.grid.unvisited_count()
            );
            frontier = next;
        }

        self.move_count_of(self.target)
    }

    fn move_count_of(&self, pos: Coord) -> Result<u32, SolveError> {
        self.grid
            .cell(pos)
            .and_then(|cell| cell.move_count)
            .ok_or(SolveError::StateConflict {
                position: pos,
                detail: "visited square without a move count",
            })
    }

    /// Follow predecessors from the target back to the start
    pub fn reconstruct(&self) -> Result<Vec<Coord>, SolveError> {
        if self.start == self.target {
            return Ok(vec![self.start]);
        }

        let unreachable = SolveError::Unreachable {
            start: self.start,
            target: self.target,
        };
        let target_cell = self.grid.cell(self.target).ok_or(unreachable.clone())?;
        if !target_cell.visited {
            return Err(unreachable);
        }

        let mut path = vec![self.target];
        let mut current = target_cell;

        loop {
            let prev = current.predecessor.ok_or(SolveError::StateConflict {
                position: current.position,
                detail: "visited cell without a predecessor",
            })?;
            path.push(prev);

            if prev == self.start {
                break;
            }
            // A well-formed chain visits each cell at most once
            if path.len() > self.grid.cell_count() + 1 {
                return Err(SolveError::StateConflict {
                    position: prev,
                    detail: "predecessor chain does not reach the start",
                });
            }

            current = self
                .grid
                .cell(prev)
                .filter(|cell| cell.visited)
                .ok_or(SolveError::StateConflict {
                    position: prev,
                    detail: "predecessor is not a visited cell",
                })?;
        }

        Ok(path)
    }

    /// Expand then reconstruct
    pub fn run(mut self) -> Result<Solution, SolveError> {
        let move_count = self.expand()?;
        let path = self.reconstruct()?;
        info!(
            "Solved {} -> {} in {} moves ({} layers expanded)",
            self.start, self.target, move_count, self.layers
        );
        Ok(Solution { path, move_count })
    }
}

/// Shortest knight path on a `rows` x `cols` board; path runs target -> start
pub fn solve(
    rows: i32,
    cols: i32,
    obstacles: &[Coord],
    start: Coord,
    target: Coord,
) -> Result<Solution, SolveError> {
    debug!(
        "solve: {}x{} board, {} obstacles, {} -> {}",
        cols,
        rows,
        obstacles.len(),
        start,
        target
    );
    let grid = Grid::new(rows, cols, obstacles, start);
    Solver::new(grid, target)?.run()
}

/// Format path for display
pub fn format_path(path: &[Coord]) -> String {
    if path.is_empty() {
        return "No path".to_string();
    }

    path.iter()
        .map(|pos| pos.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
