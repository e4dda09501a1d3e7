//! Core search node types.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use trellis_kernel::state::Cost;

/// Arena index of a node. Ids are assigned in creation order, so they also
/// serve as the deterministic tie-breaker in the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The (operator, cost) pair that produced a node from its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Index of the operator in the table.
    pub operator: usize,
    /// Operator name, shared with the engine's name cache.
    pub name: Arc<str>,
    /// Edge cost taken from the table at expansion time.
    pub cost: Cost,
}

/// An immutable node in the search tree.
///
/// All fields are fixed at construction. Equality and hashing delegate to the
/// wrapped state so that two nodes reaching the same state compare equal, which
/// is the engine's duplicate-detection contract.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    id: NodeId,
    state: S,
    parent: Option<NodeId>,
    moves: u32,
    g_cost: Cost,
    produced_by: Option<Edge>,
}

impl<S> SearchNode<S> {
    /// Build the root node: no parent, zero moves, zero cost, no edge.
    #[must_use]
    pub fn root(id: NodeId, state: S) -> Self {
        Self {
            id,
            state,
            parent: None,
            moves: 0,
            g_cost: 0,
            produced_by: None,
        }
    }

    /// Build a child of `parent` reached through `edge`.
    ///
    /// `moves` and `g_cost` are derived here and nowhere else.
    #[must_use]
    pub fn child(id: NodeId, parent: &Self, state: S, edge: Edge) -> Self {
        Self {
            id,
            state,
            parent: Some(parent.id),
            moves: parent.moves + 1,
            g_cost: parent.g_cost.saturating_add(edge.cost),
            produced_by: Some(edge),
        }
    }

    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Number of operator applications from the root.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Cumulative path cost from the root.
    #[must_use]
    pub fn g_cost(&self) -> Cost {
        self.g_cost
    }

    #[must_use]
    pub fn produced_by(&self) -> Option<&Edge> {
        self.produced_by.as_ref()
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl<S: PartialEq> PartialEq for SearchNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq> Eq for SearchNode<S> {}

impl<S: Hash> Hash for SearchNode<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

/// The frontier ordering key: `(rank, moves, id)`.
///
/// Lower rank first, then fewer moves, then older id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub rank: Cost,
    pub moves: u32,
    pub id: NodeId,
}

impl FrontierKey {
    /// Key for the root seeded into an empty frontier.
    ///
    /// The seed is popped before any other node is pushed, so its rank never
    /// takes part in a comparison.
    #[must_use]
    pub fn seed(id: NodeId) -> Self {
        Self {
            rank: 0,
            moves: 0,
            id,
        }
    }
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank
            .cmp(&other.rank)
            .then(self.moves.cmp(&other.moves))
            .then(self.id.cmp(&other.id))
    }
}
