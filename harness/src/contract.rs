//! World contract: what a domain supplies so the runner can search it.
//!
//! Worlds provide an initial state (carrying its own goal), an operator
//! table and a stable signature. Worlds do NOT run the search, render
//! traces or write reports; those are runner and report concerns.

use std::fmt;

use trellis_kernel::operator::{OperatorTable, OperatorTableError};
use trellis_kernel::state::SearchState;

/// Typed failure for world operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    /// The world's operator table could not be built.
    Operators(OperatorTableError),
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operators(e) => write!(f, "operator table: {e}"),
        }
    }
}

impl std::error::Error for WorldError {}

impl From<OperatorTableError> for WorldError {
    fn from(e: OperatorTableError) -> Self {
        Self::Operators(e)
    }
}

/// The contract a world must implement to be run by the harness runner.
pub trait SearchWorld {
    type State: SearchState;

    /// World identifier, used as the puzzle part of report file names.
    fn world_id(&self) -> &str;

    /// The state the search starts from.
    fn initial_state(&self) -> Self::State;

    /// Operators in expansion order.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::Operators`] if the table is invalid.
    fn operators(&self) -> Result<OperatorTable<Self::State>, WorldError>;

    /// Compact, stable rendering of the initial state for file names.
    fn signature(&self) -> String;
}
