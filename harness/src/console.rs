//! Interactive text console.
//!
//! Reads a board one cell at a time, asks whether to use the default goal
//! and offers the algorithm menu. Input is whitespace-tokenized, so several
//! numbers may be typed on one line. Every value is validated before it is
//! accepted; invalid entries are re-prompted, never passed on to the search.

use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, Write};

use trellis_search::strategy::StrategyKind;

use crate::worlds::sliding_tile::{BoardError, Goal};

/// Console failure. Invalid values are re-prompted, so these are only
/// stream-level problems.
#[derive(Debug)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    Io { detail: String },
    /// Input ended before the session was complete.
    UnexpectedEof,
    /// The entered goal was rejected.
    Board(BoardError),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "console I/O error: {detail}"),
            Self::UnexpectedEof => f.write_str("input ended before the board was complete"),
            Self::Board(e) => write!(f, "invalid board: {e}"),
        }
    }
}

impl std::error::Error for ConsoleError {}

impl From<std::io::Error> for ConsoleError {
    fn from(e: std::io::Error) -> Self {
        Self::Io {
            detail: e.to_string(),
        }
    }
}

/// Menu label of a strategy kind.
#[must_use]
pub const fn menu_label(kind: StrategyKind) -> &'static str {
    match kind {
        StrategyKind::AStarManhattan => "A* Manhattan Cost",
        StrategyKind::AStarEuclidean => "A* Euclidean Cost",
        StrategyKind::AStarMisplacedTiles => "A* Misplaced Tile Cost",
        StrategyKind::UniformCost => "Uniform Cost",
    }
}

/// Everything collected by one console session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSession {
    pub size: usize,
    pub cells: Vec<u8>,
    /// `None` means the default goal was chosen.
    pub goal: Option<Goal>,
    pub kind: StrategyKind,
}

/// Render a partially entered board: `#` marks the cell being entered and
/// `_` the cells not entered yet.
#[must_use]
pub fn render_progress(size: usize, cells: &[Option<u8>], current: usize) -> String {
    let mut out = String::new();
    for (index, cell) in cells.iter().enumerate() {
        if index > 0 {
            out.push(if index % size == 0 { '\n' } else { ' ' });
        }
        match cell {
            _ if index == current => out.push('#'),
            Some(tile) => out.push_str(&tile.to_string()),
            None => out.push('_'),
        }
    }
    out
}

pub struct Console<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn next_token(&mut self) -> Result<String, ConsoleError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ConsoleError::UnexpectedEof);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Prompt until an integer is entered.
    fn read_int(&mut self, prompt: &str) -> Result<i64, ConsoleError> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let token = self.next_token()?;
            match token.parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "{token:?} is not a number.")?,
            }
        }
    }

    /// Read `size * size` distinct tiles, re-prompting on out-of-range or
    /// repeated values.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] on I/O failure or end of input.
    pub fn read_cells(&mut self, size: usize, what: &str) -> Result<Vec<u8>, ConsoleError> {
        let count = size * size;
        let mut cells: Vec<Option<u8>> = vec![None; count];
        let mut index = 0;
        while index < count {
            writeln!(
                self.output,
                "\nEnter the {what} (0 is the blank):\n{}",
                render_progress(size, &cells, index)
            )?;
            let prompt = format!("Row {}, column {}: ", index / size + 1, index % size + 1);
            let value = self.read_int(&prompt)?;
            let tile = match u8::try_from(value) {
                Ok(tile) if usize::from(tile) < count => tile,
                _ => {
                    writeln!(self.output, "Tiles must be between 0 and {}.", count - 1)?;
                    continue;
                }
            };
            if cells.contains(&Some(tile)) {
                writeln!(self.output, "Tile {tile} was already entered.")?;
                continue;
            }
            cells[index] = Some(tile);
            index += 1;
        }
        Ok(cells.into_iter().flatten().collect())
    }

    /// Show the default goal and ask whether to use it. Returns `None` for the
    /// default, or the goal entered cell by cell.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] on I/O failure, end of input, or an
    /// unsupported size.
    pub fn read_goal(&mut self, size: usize) -> Result<Option<Goal>, ConsoleError> {
        let default = Goal::blank_last(size).map_err(ConsoleError::Board)?;
        writeln!(self.output, "\nDefault goal:")?;
        for row in default.cells().chunks(size) {
            let row: Vec<String> = row.iter().map(u8::to_string).collect();
            writeln!(self.output, "{}", row.join(" "))?;
        }
        loop {
            match self.read_int("Use the default goal? (1 = yes, 0 = no): ")? {
                1 => return Ok(None),
                0 => break,
                _ => writeln!(self.output, "Please enter 1 or 0.")?,
            }
        }
        let cells = self.read_cells(size, "goal state")?;
        Goal::new(size, cells).map(Some).map_err(ConsoleError::Board)
    }

    /// Show the algorithm menu until a listed entry is chosen.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] on I/O failure or end of input.
    pub fn choose_strategy(&mut self) -> Result<StrategyKind, ConsoleError> {
        writeln!(self.output, "\nChoose a search algorithm:")?;
        for (index, kind) in StrategyKind::ALL.iter().enumerate() {
            writeln!(self.output, "[{index}] {}", menu_label(*kind))?;
        }
        loop {
            let choice = self.read_int("Choice: ")?;
            let picked = usize::try_from(choice)
                .ok()
                .and_then(|i| StrategyKind::ALL.get(i).copied());
            match picked {
                Some(kind) => return Ok(kind),
                None => writeln!(
                    self.output,
                    "Please enter a number between 0 and {}.",
                    StrategyKind::ALL.len() - 1
                )?,
            }
        }
    }

    /// Run a full session: initial board, goal, algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError`] on I/O failure or end of input.
    pub fn session(&mut self, size: usize) -> Result<ConsoleSession, ConsoleError> {
        let cells = self.read_cells(size, "initial state")?;
        let goal = self.read_goal(size)?;
        let kind = self.choose_strategy()?;
        tracing::debug!(
            size,
            kind = kind.as_str(),
            default_goal = goal.is_none(),
            "console session complete"
        );
        Ok(ConsoleSession {
            size,
            cells,
            goal,
            kind,
        })
    }
}
