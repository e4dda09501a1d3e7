//! Sliding-tile puzzle boards.
//!
//! A board of size N holds the tiles `0..N²` in row-major order, `0` being
//! the blank. Every board carries a shared handle to its [`Goal`] and
//! memoizes three heuristic distances to it at construction:
//!
//! - misplaced tiles: non-blank tiles not on their goal cell;
//! - Manhattan: sum over non-blank tiles of `|dr| + |dc|`;
//! - Euclidean: sum over non-blank tiles of `floor(sqrt(dr² + dc²))`.
//!
//! The blank never contributes, which keeps all three admissible for unit
//! move costs.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use trellis_kernel::state::{Cost, Heuristic, SearchState};

/// Value of the blank cell.
pub const BLANK: u8 = 0;

/// Smallest supported board side.
pub const MIN_SIZE: usize = 2;

/// Largest supported board side (tiles must fit in a `u8`).
pub const MAX_SIZE: usize = 15;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Malformed board or goal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Side length outside `MIN_SIZE..=MAX_SIZE`.
    UnsupportedSize { size: usize },
    /// Cell count is not `size * size`.
    WrongCellCount { expected: usize, found: usize },
    /// Cell count is not a perfect square (size could not be inferred).
    NotSquare { cells: usize },
    /// A cell value is `>= size * size`.
    TileOutOfRange { tile: u32, size: usize },
    /// A tile value appears more than once.
    DuplicateTile { tile: u8 },
    /// Board and goal sides differ.
    SizeMismatch { board: usize, goal: usize },
    /// Text input could not be parsed as a tile number.
    InvalidTile { token: String },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSize { size } => write!(
                f,
                "unsupported board size {size} (expected {MIN_SIZE}..={MAX_SIZE})"
            ),
            Self::WrongCellCount { expected, found } => {
                write!(f, "expected {expected} cells, found {found}")
            }
            Self::NotSquare { cells } => {
                write!(f, "{cells} cells do not form a square board")
            }
            Self::TileOutOfRange { tile, size } => {
                write!(f, "tile {tile} out of range for a {size}x{size} board")
            }
            Self::DuplicateTile { tile } => write!(f, "tile {tile} appears more than once"),
            Self::SizeMismatch { board, goal } => {
                write!(f, "board is {board}x{board} but goal is {goal}x{goal}")
            }
            Self::InvalidTile { token } => write!(f, "not a tile number: {token:?}"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Check that `cells` is a permutation of `0..size²`.
fn validate_cells(size: usize, cells: &[u8]) -> Result<(), BoardError> {
    if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
        return Err(BoardError::UnsupportedSize { size });
    }
    let expected = size * size;
    if cells.len() != expected {
        return Err(BoardError::WrongCellCount {
            expected,
            found: cells.len(),
        });
    }
    let mut seen = vec![false; expected];
    for &tile in cells {
        let slot = seen
            .get_mut(usize::from(tile))
            .ok_or(BoardError::TileOutOfRange {
                tile: u32::from(tile),
                size,
            })?;
        if *slot {
            return Err(BoardError::DuplicateTile { tile });
        }
        *slot = true;
    }
    Ok(())
}

/// Parse a board from text: tile numbers separated by whitespace, commas or
/// semicolons, in row-major order. The side is inferred from the count.
///
/// # Errors
///
/// Returns [`BoardError::InvalidTile`] for a token that is not a number in
/// `0..=255`, [`BoardError::NotSquare`] if the count is not a square, and any
/// validation error of the resulting cells.
pub fn parse_cells(text: &str) -> Result<(usize, Vec<u8>), BoardError> {
    let cells = text
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<u8>().map_err(|_| BoardError::InvalidTile {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<u8>, _>>()?;
    let size = (0..=MAX_SIZE)
        .find(|side| side * side == cells.len())
        .ok_or(BoardError::NotSquare { cells: cells.len() })?;
    validate_cells(size, &cells)?;
    Ok((size, cells))
}

// ---------------------------------------------------------------------------
// Goal
// ---------------------------------------------------------------------------

/// Target arrangement, with a tile-to-cell lookup for heuristics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    size: usize,
    cells: Vec<u8>,
    /// `positions[tile]` is the cell index of `tile` in the goal.
    positions: Vec<usize>,
}

impl Goal {
    /// Build a goal from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if `cells` is not a permutation of `0..size²`.
    pub fn new(size: usize, cells: Vec<u8>) -> Result<Self, BoardError> {
        validate_cells(size, &cells)?;
        let mut positions = vec![0; cells.len()];
        for (index, &tile) in cells.iter().enumerate() {
            positions[usize::from(tile)] = index;
        }
        Ok(Self {
            size,
            cells,
            positions,
        })
    }

    /// The default goal: tiles `1..size²` in order, blank in the last cell.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnsupportedSize`] for a side outside the
    /// supported range.
    pub fn blank_last(size: usize) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::UnsupportedSize { size });
        }
        let count = size * size;
        let cells = (1..count)
            .chain(std::iter::once(0))
            .map(|tile| u8::try_from(tile).map_err(|_| BoardError::UnsupportedSize { size }))
            .collect::<Result<Vec<u8>, _>>()?;
        Self::new(size, cells)
    }

    /// Build a goal from rows.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if the rows are ragged or do not hold a
    /// permutation of `0..size²`.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, BoardError> {
        let size = rows.len();
        let cells = flatten_rows(rows)?;
        Self::new(size, cells)
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// `(row, col)` of `tile` in the goal.
    #[must_use]
    pub fn position_of(&self, tile: u8) -> (usize, usize) {
        let index = self.positions[usize::from(tile)];
        (index / self.size, index % self.size)
    }
}

fn flatten_rows(rows: &[Vec<u8>]) -> Result<Vec<u8>, BoardError> {
    let size = rows.len();
    let mut cells = Vec::with_capacity(size * size);
    for row in rows {
        if row.len() != size {
            return Err(BoardError::WrongCellCount {
                expected: size * size,
                found: rows.iter().map(Vec::len).sum(),
            });
        }
        cells.extend_from_slice(row);
    }
    Ok(cells)
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// Memoized distances to the goal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Distances {
    misplaced: Cost,
    manhattan: Cost,
    euclidean: Cost,
}

impl Distances {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn measure(cells: &[u8], goal: &Goal) -> Self {
        let size = goal.size();
        let mut d = Self::default();
        for (index, &tile) in cells.iter().enumerate() {
            if tile == BLANK || tile == goal.cells()[index] {
                continue;
            }
            let (row, col) = (index / size, index % size);
            let (goal_row, goal_col) = goal.position_of(tile);
            let dr = row.abs_diff(goal_row);
            let dc = col.abs_diff(goal_col);

            d.misplaced += 1;
            d.manhattan += (dr + dc) as Cost;
            // Exact for every board that fits in MAX_SIZE.
            d.euclidean += ((dr * dr + dc * dc) as f64).sqrt().floor() as Cost;
        }
        d
    }
}

/// A sliding-tile board bound to its goal.
///
/// Equality and hashing cover the cells only; the goal handle and memoized
/// distances are derived data.
#[derive(Clone)]
pub struct Board {
    size: usize,
    cells: Vec<u8>,
    blank: usize,
    goal: Arc<Goal>,
    distances: Distances,
}

impl Board {
    /// Build a board from row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if `cells` is not a permutation of `0..size²`
    /// or the goal has a different side.
    pub fn new(size: usize, cells: Vec<u8>, goal: Arc<Goal>) -> Result<Self, BoardError> {
        validate_cells(size, &cells)?;
        if goal.size() != size {
            return Err(BoardError::SizeMismatch {
                board: size,
                goal: goal.size(),
            });
        }
        let blank = cells
            .iter()
            .position(|&tile| tile == BLANK)
            .ok_or(BoardError::WrongCellCount {
                expected: size * size,
                found: cells.len(),
            })?;
        Ok(Self::from_parts(size, cells, blank, goal))
    }

    /// Build a board from rows.
    ///
    /// # Errors
    ///
    /// Same as [`Board::new`], plus ragged rows.
    pub fn from_rows(rows: &[Vec<u8>], goal: Arc<Goal>) -> Result<Self, BoardError> {
        let size = rows.len();
        let cells = flatten_rows(rows)?;
        Self::new(size, cells, goal)
    }

    fn from_parts(size: usize, cells: Vec<u8>, blank: usize, goal: Arc<Goal>) -> Self {
        let distances = Distances::measure(&cells, &goal);
        Self {
            size,
            cells,
            blank,
            goal,
            distances,
        }
    }

    /// Board with the blank swapped into `target`. `target` must be a valid
    /// cell index.
    pub(crate) fn with_blank_at(&self, target: usize) -> Self {
        let mut cells = self.cells.clone();
        cells.swap(self.blank, target);
        Self::from_parts(self.size, cells, target, Arc::clone(&self.goal))
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major cells.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Tile at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    /// `(row, col)` of the blank.
    #[must_use]
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    #[must_use]
    pub fn goal(&self) -> &Arc<Goal> {
        &self.goal
    }

    /// Cells concatenated in row-major order, e.g. `125340678`.
    #[must_use]
    pub fn signature(&self) -> String {
        self.cells.iter().map(u8::to_string).collect()
    }

    #[must_use]
    pub fn misplaced_tiles(&self) -> Cost {
        self.distances.misplaced
    }

    #[must_use]
    pub fn manhattan(&self) -> Cost {
        self.distances.manhattan
    }

    #[must_use]
    pub fn euclidean(&self) -> Cost {
        self.distances.euclidean
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.cells.hash(state);
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("size", &self.size)
            .field("cells", &self.cells)
            .finish_non_exhaustive()
    }
}

/// Rows on separate lines, cells separated by single spaces.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.size).enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for (c, tile) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{tile}")?;
            }
        }
        Ok(())
    }
}

impl SearchState for Board {
    fn is_goal(&self) -> bool {
        self.cells == self.goal.cells()
    }

    fn estimate(&self, heuristic: Heuristic) -> Cost {
        match heuristic {
            Heuristic::MisplacedTiles => self.distances.misplaced,
            Heuristic::Manhattan => self.distances.manhattan,
            Heuristic::Euclidean => self.distances.euclidean,
        }
    }
}
