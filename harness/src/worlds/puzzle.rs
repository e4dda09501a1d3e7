//! The sliding-tile puzzle as a [`SearchWorld`].

use std::sync::Arc;

use trellis_kernel::operator::OperatorTable;

use super::sliding_moves::{move_operators, MoveCosts};
use super::sliding_tile::{Board, BoardError, Goal};
use crate::contract::{SearchWorld, WorldError};

/// World identifier used in report file names.
pub const SLIDING_PUZZLE_ID: &str = "SlidingTilePuzzle";

/// An initial board plus the move costs to search it with.
#[derive(Debug, Clone)]
pub struct SlidingPuzzle {
    initial: Board,
    costs: MoveCosts,
}

impl SlidingPuzzle {
    /// Build a puzzle from row-major cells. `goal` defaults to
    /// [`Goal::blank_last`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the board or goal is malformed or their
    /// sides differ.
    pub fn new(
        size: usize,
        cells: Vec<u8>,
        goal: Option<Goal>,
        costs: MoveCosts,
    ) -> Result<Self, BoardError> {
        let goal = match goal {
            Some(goal) => goal,
            None => Goal::blank_last(size)?,
        };
        let initial = Board::new(size, cells, Arc::new(goal))?;
        Ok(Self { initial, costs })
    }

    #[must_use]
    pub fn initial(&self) -> &Board {
        &self.initial
    }

    #[must_use]
    pub fn costs(&self) -> MoveCosts {
        self.costs
    }
}

impl SearchWorld for SlidingPuzzle {
    type State = Board;

    fn world_id(&self) -> &str {
        SLIDING_PUZZLE_ID
    }

    fn initial_state(&self) -> Board {
        self.initial.clone()
    }

    fn operators(&self) -> Result<OperatorTable<Board>, WorldError> {
        Ok(move_operators(self.costs)?)
    }

    fn signature(&self) -> String {
        self.initial.signature()
    }
}
