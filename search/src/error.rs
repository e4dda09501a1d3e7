//! Typed search errors.
//!
//! Inapplicable operators are not errors and never reach this type. A search
//! that exhausts its frontier without a goal is not an error either: it
//! returns an outcome whose solution is `None`.

use crate::node::NodeId;

/// Typed failure for search construction and execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A strategy that ranks by the producing edge was asked to rank a node
    /// that has none (the root).
    InvalidComparison {
        node_id: NodeId,
        strategy: &'static str,
    },
    /// The node arena could not grow: either the configured node cap was hit
    /// or the allocator refused more memory.
    SearchSpaceTooLarge { nodes: usize },
    /// The policy or strategy combination is not supported.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidComparison { node_id, strategy } => {
                write!(
                    f,
                    "invalid comparison: node {node_id} has no producing operator, \
                     which strategy {strategy} requires"
                )
            }
            Self::SearchSpaceTooLarge { nodes } => {
                write!(f, "search space too large: stopped after {nodes} nodes")
            }
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}
