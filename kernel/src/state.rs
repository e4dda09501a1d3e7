//! The state contract consumed by the search engine.

use std::fmt::Display;
use std::hash::Hash;

/// Scalar edge and path cost. Integer so that frontier ordering is total.
pub type Cost = i64;

/// Heuristic estimates a state may memoize at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Number of non-blank cells not at their goal position.
    MisplacedTiles,
    /// Sum of per-cell grid (L1) distances to the goal position.
    Manhattan,
    /// Sum of per-cell straight-line distances to the goal position.
    Euclidean,
}

impl Heuristic {
    /// Canonical string for logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MisplacedTiles => "misplaced_tiles",
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
        }
    }
}

/// A searchable state.
///
/// # Contract
///
/// - `Eq` and `Hash` must be structural: two states with the same content are
///   the same state, regardless of how or when they were constructed. Memoized
///   data (heuristics, goal handles) must not take part in either.
/// - States are immutable once constructed.
/// - `is_goal` is intrinsic: any goal value the predicate needs is supplied
///   when the state is built, not looked up from shared mutable storage.
/// - `Display` renders the state for path traces.
pub trait SearchState: Clone + Eq + Hash + Display {
    /// Whether this state satisfies the goal condition.
    fn is_goal(&self) -> bool;

    /// Memoized heuristic estimate toward the goal.
    ///
    /// Domains without heuristics keep the default of zero, which reduces every
    /// informed strategy to uniform-cost.
    fn estimate(&self, _heuristic: Heuristic) -> Cost {
        0
    }
}
