//! Blank-moving operators for sliding-tile boards.

use serde::{Deserialize, Serialize};
use trellis_kernel::operator::{Operator, OperatorTable, OperatorTableError};
use trellis_kernel::state::Cost;

use super::sliding_tile::Board;

/// Direction the blank moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Down,
    Right,
    Up,
}

impl Direction {
    /// Operator table order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Down, Self::Right, Self::Up];

    /// Operator name shown in path traces.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "Move Left",
            Self::Down => "Move Down",
            Self::Right => "Move Right",
            Self::Up => "Move Up",
        }
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Down => Self::Up,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
        }
    }

    /// Move the blank one cell, or `None` if it would leave the board.
    #[must_use]
    pub fn apply(self, board: &Board) -> Option<Board> {
        let (row, col) = board.blank();
        let last = board.size() - 1;
        let (row, col) = match self {
            Self::Left if col > 0 => (row, col - 1),
            Self::Down if row < last => (row + 1, col),
            Self::Right if col < last => (row, col + 1),
            Self::Up if row > 0 => (row - 1, col),
            _ => return None,
        };
        Some(board.with_blank_at(row * board.size() + col))
    }
}

/// Per-direction edge costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MoveCosts {
    #[serde(default = "unit_cost")]
    pub left: Cost,
    #[serde(default = "unit_cost")]
    pub down: Cost,
    #[serde(default = "unit_cost")]
    pub right: Cost,
    #[serde(default = "unit_cost")]
    pub up: Cost,
}

fn unit_cost() -> Cost {
    1
}

impl MoveCosts {
    /// Every direction at the same cost.
    #[must_use]
    pub const fn uniform(cost: Cost) -> Self {
        Self {
            left: cost,
            down: cost,
            right: cost,
            up: cost,
        }
    }

    #[must_use]
    pub const fn of(&self, direction: Direction) -> Cost {
        match direction {
            Direction::Left => self.left,
            Direction::Down => self.down,
            Direction::Right => self.right,
            Direction::Up => self.up,
        }
    }
}

impl Default for MoveCosts {
    fn default() -> Self {
        Self::uniform(1)
    }
}

/// The four blank moves in table order: left, down, right, up.
///
/// # Errors
///
/// Returns [`OperatorTableError::NegativeCost`] if any cost is negative.
pub fn move_operators(costs: MoveCosts) -> Result<OperatorTable<Board>, OperatorTableError> {
    OperatorTable::new(
        Direction::ALL
            .into_iter()
            .map(|direction| {
                Operator::new(direction.name(), costs.of(direction), move |board: &Board| {
                    direction.apply(board)
                })
            })
            .collect(),
    )
}
