#![allow(dead_code)]

use knight_path::{format_path, render_board, Coord, Puzzle, KNIGHT_MOVES};
use std::collections::HashSet;

/// Knight distance on an unbounded board
pub fn knight_distance(from: Coord, to: Coord) -> u32 {
    let mut x = (to.x - from.x).abs();
    let mut y = (to.y - from.y).abs();
    if x < y {
        std::mem::swap(&mut x, &mut y);
    }

    if x == 1 && y == 0 {
        return 3;
    }
    if x == 2 && y == 2 {
        return 4;
    }

    let delta = x - y;
    let moves = if y > delta {
        delta - 2 * (delta - y).div_euclid(3)
    } else {
        delta - 2 * (delta - y).div_euclid(4)
    };
    moves as u32
}

pub fn is_knight_move(a: Coord, b: Coord) -> bool {
    KNIGHT_MOVES.iter().any(|&m| a + m == b)
}

/// Check a target -> start path; panics with a description on the first violation
pub fn assert_valid_path(path: &[Coord], start: Coord, target: Coord, obstacles: &[Coord]) {
    assert!(!path.is_empty(), "Path should not be empty");
    assert_eq!(path[0], target, "Path should begin at the target");
    assert_eq!(path[path.len() - 1], start, "Path should end at the start");

    let mut seen = HashSet::new();
    for pos in path {
        assert!(seen.insert(*pos), "Square {} repeats in path", pos);
        assert!(!obstacles.contains(pos), "Path crosses obstacle {}", pos);
    }

    for pair in path.windows(2) {
        assert!(
            is_knight_move(pair[0], pair[1]),
            "{} -> {} is not a knight move",
            pair[0],
            pair[1]
        );
    }
}

/// Draw a target -> start path on its board
pub fn visualize_path(rows: i32, cols: i32, obstacles: &[Coord], path: &[Coord]) -> String {
    let (Some(&target), Some(&start)) = (path.first(), path.last()) else {
        return "No path".to_string();
    };

    let puzzle = Puzzle {
        rows,
        cols,
        obstacles: obstacles.to_vec(),
        start,
        target,
    };

    format!(
        "\nPath: {}\nLength: {} moves\n\n{}",
        format_path(path),
        path.len() - 1,
        render_board(&puzzle, path)
    )
}
