//! Search policy types.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Search termination and budget configuration.
///
/// Deserializable so callers can load it from a config file; every field
/// has a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchPolicy {
    /// What to do once a solution is recorded.
    #[serde(default)]
    pub termination: Termination,
    /// Cap on nodes created (root included). `None` leaves only the
    /// allocator as a limit.
    #[serde(default)]
    pub max_nodes: Option<u64>,
}

impl SearchPolicy {
    /// Validate option combinations.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_nodes` is zero (the root
    /// could never be created) or does not fit in `usize`.
    pub fn validate(&self) -> Result<(), SearchError> {
        match self.max_nodes {
            Some(0) => Err(SearchError::InvalidPolicy {
                detail: "max_nodes must be at least 1".into(),
            }),
            Some(n) if usize::try_from(n).is_err() => Err(SearchError::InvalidPolicy {
                detail: format!("max_nodes {n} exceeds the platform address space"),
            }),
            _ => Ok(()),
        }
    }

    /// `max_nodes` as an arena capacity. Call after [`SearchPolicy::validate`].
    #[must_use]
    pub fn node_cap(&self) -> Option<usize> {
        self.max_nodes.and_then(|n| usize::try_from(n).ok())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            termination: Termination::Drain,
            max_nodes: None,
        }
    }
}

/// Termination policy after the first solution is recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Stop expanding but keep popping until the frontier is empty, replacing
    /// the solution with any later goal that has strictly fewer moves.
    #[default]
    Drain,
    /// Stop as soon as the first solution is recorded.
    FirstGoal,
}
