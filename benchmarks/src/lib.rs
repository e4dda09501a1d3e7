//! Shared helpers for trellis benchmark suites.

use std::sync::Arc;

use trellis_harness::worlds::puzzle::SlidingPuzzle;
use trellis_harness::worlds::sliding_moves::{Direction, MoveCosts};
use trellis_harness::worlds::sliding_tile::{Board, Goal};

/// A named benchmark puzzle.
pub struct Regime {
    pub name: &'static str,
    pub puzzle: SlidingPuzzle,
}

/// Scramble the blank-last goal of side `size` with a deterministic walk of
/// `steps` moves that never immediately undoes the previous one.
///
/// # Panics
///
/// Panics if `size` is unsupported. Benchmark setup failures are fatal.
#[must_use]
pub fn scrambled_board(size: usize, steps: usize) -> Board {
    let goal = Arc::new(Goal::blank_last(size).expect("supported size"));
    let mut board = Board::new(size, goal.cells().to_vec(), goal).expect("goal board");
    let mut previous: Option<Direction> = None;
    // Fixed cycle offset by the step index; deterministic across runs.
    for step in 0..steps {
        let next = (0..Direction::ALL.len())
            .map(|k| Direction::ALL[(step * 3 + k) % Direction::ALL.len()])
            .filter(|d| previous.is_none_or(|p| p.inverse() != *d))
            .find_map(|d| d.apply(&board).map(|b| (d, b)));
        if let Some((direction, moved)) = next {
            previous = Some(direction);
            board = moved;
        }
    }
    board
}

/// Puzzles at increasing scramble depth.
///
/// # Panics
///
/// Panics if board construction fails.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    [("3x3_shallow", 3, 8), ("3x3_medium", 3, 20), ("4x4_shallow", 4, 12)]
        .into_iter()
        .map(|(name, size, steps)| {
            let board = scrambled_board(size, steps);
            let puzzle = SlidingPuzzle::new(
                size,
                board.cells().to_vec(),
                Some((**board.goal()).clone()),
                MoveCosts::default(),
            )
            .expect("scrambled puzzle");
            Regime { name, puzzle }
        })
        .collect()
}
