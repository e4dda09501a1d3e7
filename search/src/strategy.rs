//! Node-ordering strategies.
//!
//! A [`Strategy`] is chosen once at engine construction from a closed set of
//! variants. It assigns every node an integer rank; the frontier pops the
//! lowest rank first, breaking ties by fewer moves and then creation order
//! (see [`FrontierKey`]).
//!
//! | kind | `Cumulative` rank | `LastEdge` rank |
//! |---|---|---|
//! | uniform cost | `g` | `edge cost` |
//! | A* Manhattan | `g + manhattan` | not supported |
//! | A* Euclidean | `g + euclidean` | not supported |
//! | A* misplaced tiles | `g + misplaced` | `edge cost + misplaced` |
//!
//! `LastEdge` ranks by the cost of the single edge that produced the node.
//! It does not guarantee path optimality and exists for compatibility with
//! solvers that ranked that way.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use trellis_kernel::state::{Cost, Heuristic, SearchState};

use crate::error::SearchError;
use crate::node::{FrontierKey, SearchNode};

/// Which ranking function to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    UniformCost,
    AStarManhattan,
    AStarEuclidean,
    AStarMisplacedTiles,
}

impl StrategyKind {
    /// Every kind, in menu order.
    pub const ALL: [Self; 4] = [
        Self::AStarManhattan,
        Self::AStarEuclidean,
        Self::AStarMisplacedTiles,
        Self::UniformCost,
    ];

    /// Canonical snake-case name (matches the serde representation).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UniformCost => "uniform_cost",
            Self::AStarManhattan => "a_star_manhattan",
            Self::AStarEuclidean => "a_star_euclidean",
            Self::AStarMisplacedTiles => "a_star_misplaced_tiles",
        }
    }

    /// Parse from the canonical name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    /// The heuristic added to the cost term, if any.
    #[must_use]
    pub const fn heuristic(self) -> Option<Heuristic> {
        match self {
            Self::UniformCost => None,
            Self::AStarManhattan => Some(Heuristic::Manhattan),
            Self::AStarEuclidean => Some(Heuristic::Euclidean),
            Self::AStarMisplacedTiles => Some(Heuristic::MisplacedTiles),
        }
    }
}

/// How the cost term of the rank is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostMode {
    /// Cumulative path cost `g`. Required for optimal paths.
    #[default]
    Cumulative,
    /// Cost of the producing edge only.
    LastEdge,
}

/// A validated `(kind, cost mode)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Strategy {
    kind: StrategyKind,
    cost_mode: CostMode,
}

impl Strategy {
    /// Build a strategy.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for `LastEdge` combined with a
    /// distance heuristic; those strategies are only defined over `g`.
    pub fn new(kind: StrategyKind, cost_mode: CostMode) -> Result<Self, SearchError> {
        if cost_mode == CostMode::LastEdge
            && matches!(kind, StrategyKind::AStarManhattan | StrategyKind::AStarEuclidean)
        {
            return Err(SearchError::InvalidPolicy {
                detail: format!("{} does not support last-edge cost mode", kind.as_str()),
            });
        }
        Ok(Self { kind, cost_mode })
    }

    /// Cumulative-cost strategy of the given kind (always valid).
    #[must_use]
    pub const fn cumulative(kind: StrategyKind) -> Self {
        Self {
            kind,
            cost_mode: CostMode::Cumulative,
        }
    }

    #[must_use]
    pub const fn uniform_cost() -> Self {
        Self::cumulative(StrategyKind::UniformCost)
    }

    #[must_use]
    pub const fn a_star_manhattan() -> Self {
        Self::cumulative(StrategyKind::AStarManhattan)
    }

    #[must_use]
    pub const fn a_star_euclidean() -> Self {
        Self::cumulative(StrategyKind::AStarEuclidean)
    }

    #[must_use]
    pub const fn a_star_misplaced_tiles() -> Self {
        Self::cumulative(StrategyKind::AStarMisplacedTiles)
    }

    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        self.kind
    }

    #[must_use]
    pub const fn cost_mode(&self) -> CostMode {
        self.cost_mode
    }

    /// Whether ranking needs the producing edge (and so rejects the root).
    #[must_use]
    pub fn requires_edge(&self) -> bool {
        self.cost_mode == CostMode::LastEdge
    }

    /// Rank a node. Lower is popped first.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidComparison`] when the strategy ranks by
    /// the producing edge and `node` is the root.
    pub fn rank<S: SearchState>(&self, node: &SearchNode<S>) -> Result<Cost, SearchError> {
        let cost = match self.cost_mode {
            CostMode::Cumulative => node.g_cost(),
            CostMode::LastEdge => {
                node.produced_by()
                    .ok_or(SearchError::InvalidComparison {
                        node_id: node.id(),
                        strategy: self.kind.as_str(),
                    })?
                    .cost
            }
        };
        let h = self
            .kind
            .heuristic()
            .map_or(0, |heuristic| node.state().estimate(heuristic));
        Ok(cost.saturating_add(h))
    }

    /// Frontier key for a node under this strategy.
    ///
    /// # Errors
    ///
    /// Propagates [`Strategy::rank`] failures.
    pub fn key<S: SearchState>(&self, node: &SearchNode<S>) -> Result<FrontierKey, SearchError> {
        Ok(FrontierKey {
            rank: self.rank(node)?,
            moves: node.moves(),
            id: node.id(),
        })
    }

    /// Two-argument ordering contract: `Less` means `a` is popped before `b`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidComparison`] if either node is the root
    /// under a strategy that ranks by the producing edge.
    pub fn compare<S: SearchState>(
        &self,
        a: &SearchNode<S>,
        b: &SearchNode<S>,
    ) -> Result<Ordering, SearchError> {
        Ok(self.key(a)?.cmp(&self.key(b)?))
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cost_mode {
            CostMode::Cumulative => f.write_str(self.kind.as_str()),
            CostMode::LastEdge => write!(f, "{}+last_edge", self.kind.as_str()),
        }
    }
}
