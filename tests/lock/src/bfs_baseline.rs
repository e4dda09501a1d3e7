//! Independent breadth-first oracle.
//!
//! Uses only board moves, never the search crate, so its move counts can
//! be trusted as ground truth for unit-cost optimality checks.

use std::collections::{HashSet, VecDeque};

use trellis_harness::worlds::sliding_moves::Direction;
use trellis_harness::worlds::sliding_tile::Board;
use trellis_kernel::state::SearchState;

/// What breadth-first search observed on the way to the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BfsResult {
    /// Fewest moves from the start to the goal.
    pub moves: u32,
    /// Distinct states dequeued up to and including the goal.
    pub dequeued: u64,
}

/// Breadth-first search from `start` to its goal. `None` if unreachable.
#[must_use]
pub fn bfs(start: &Board) -> Option<BfsResult> {
    let mut seen: HashSet<Board> = HashSet::from([start.clone()]);
    let mut queue: VecDeque<(Board, u32)> = VecDeque::from([(start.clone(), 0)]);
    let mut dequeued = 0;

    while let Some((board, depth)) = queue.pop_front() {
        dequeued += 1;
        if board.is_goal() {
            return Some(BfsResult {
                moves: depth,
                dequeued,
            });
        }
        for direction in Direction::ALL {
            if let Some(next) = direction.apply(&board) {
                if seen.insert(next.clone()) {
                    queue.push_back((next, depth + 1));
                }
            }
        }
    }
    None
}
