//! Move operator properties over every blank position.
//!
//! Each move relocates the blank by exactly one cell and leaves every other
//! tile in place, or is inapplicable at the boundary. A move followed by its
//! inverse restores the original board.

use std::sync::Arc;

use trellis_harness::worlds::sliding_moves::{move_operators, Direction, MoveCosts};
use trellis_harness::worlds::sliding_tile::{Board, Goal};

/// Boards of side `size` with the blank at every cell.
fn boards_with_blank_everywhere(size: usize) -> Vec<Board> {
    let goal = Arc::new(Goal::blank_last(size).unwrap());
    let count = u8::try_from(size * size).unwrap();
    (0..usize::from(count))
        .map(|blank| {
            let mut cells: Vec<u8> = (1..count).collect();
            cells.insert(blank, 0);
            Board::new(size, cells, Arc::clone(&goal)).unwrap()
        })
        .collect()
}

fn expected_blank(board: &Board, direction: Direction) -> Option<(usize, usize)> {
    let (row, col) = board.blank();
    let last = board.size() - 1;
    match direction {
        Direction::Left => (col > 0).then(|| (row, col - 1)),
        Direction::Down => (row < last).then(|| (row + 1, col)),
        Direction::Right => (col < last).then(|| (row, col + 1)),
        Direction::Up => (row > 0).then(|| (row - 1, col)),
    }
}

#[test]
fn each_move_relocates_blank_by_one_cell() {
    for size in [2, 3, 4] {
        for board in boards_with_blank_everywhere(size) {
            for direction in Direction::ALL {
                let moved = direction.apply(&board);
                let expected = expected_blank(&board, direction);
                match (moved, expected) {
                    (None, None) => {}
                    (Some(next), Some(target)) => {
                        assert_eq!(next.blank(), target, "{} on\n{board}", direction.name());
                        let changed = board
                            .cells()
                            .iter()
                            .zip(next.cells())
                            .filter(|(a, b)| a != b)
                            .count();
                        assert_eq!(changed, 2, "exactly the blank and one tile swap");
                        let (row, col) = board.blank();
                        assert_eq!(next.get(row, col), board.get(target.0, target.1));
                    }
                    (moved, expected) => panic!(
                        "{} on\n{board}\nexpected {expected:?}, got {:?}",
                        direction.name(),
                        moved.map(|b| b.blank())
                    ),
                }
            }
        }
    }
}

#[test]
fn move_then_inverse_restores_board() {
    for board in boards_with_blank_everywhere(3) {
        for direction in Direction::ALL {
            if let Some(next) = direction.apply(&board) {
                let back = direction.inverse().apply(&next).unwrap();
                assert_eq!(back, board);
                assert_eq!(back.manhattan(), board.manhattan());
            }
        }
    }
}

#[test]
fn table_operators_match_directions() {
    let table = move_operators(MoveCosts::default()).unwrap();
    for board in boards_with_blank_everywhere(3) {
        for (op, direction) in table.iter().zip(Direction::ALL) {
            assert_eq!(op.name(), direction.name());
            assert_eq!(op.cost(), 1);
            assert_eq!(op.apply(&board), direction.apply(&board));
        }
    }
}
