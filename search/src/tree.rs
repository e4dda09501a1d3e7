//! Node arena: owns every node created during a search.
//!
//! Parent links are arena indices, so the tree has no ownership cycles and
//! ancestor walks are plain loops regardless of depth. Nodes are append-only;
//! nothing is freed while the arena lives, which keeps every frontier entry
//! and the solution's ancestor chain valid.

use crate::error::SearchError;
use crate::node::{Edge, NodeId, SearchNode};

#[derive(Debug)]
pub struct NodeArena<S> {
    nodes: Vec<SearchNode<S>>,
    max_nodes: Option<usize>,
}

impl<S> NodeArena<S> {
    /// Create an empty arena. `max_nodes` caps its size; `None` means the
    /// allocator is the only limit.
    #[must_use]
    pub fn new(max_nodes: Option<usize>) -> Self {
        Self {
            nodes: Vec::new(),
            max_nodes,
        }
    }

    /// Insert the root node.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::SearchSpaceTooLarge`] if the arena cannot grow.
    pub fn insert_root(&mut self, state: S) -> Result<NodeId, SearchError> {
        self.reserve_one()?;
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(SearchNode::root(id, state));
        Ok(id)
    }

    /// Insert a child of `parent` reached through `edge`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::SearchSpaceTooLarge`] if the arena cannot grow.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this arena.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        state: S,
        edge: Edge,
    ) -> Result<NodeId, SearchError> {
        self.reserve_one()?;
        let id = NodeId::new(self.nodes.len());
        let child = SearchNode::child(id, &self.nodes[parent.index()], state, edge);
        self.nodes.push(child);
        Ok(id)
    }

    fn reserve_one(&mut self) -> Result<(), SearchError> {
        let nodes = self.nodes.len();
        if self.max_nodes.is_some_and(|cap| nodes >= cap) {
            return Err(SearchError::SearchSpaceTooLarge { nodes });
        }
        self.nodes
            .try_reserve(1)
            .map_err(|_| SearchError::SearchSpaceTooLarge { nodes })
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S> {
        &self.nodes[id.index()]
    }

    /// Non-panicking lookup.
    #[must_use]
    pub fn try_get(&self, id: NodeId) -> Option<&SearchNode<S>> {
        self.nodes.get(id.index())
    }

    /// Node ids from `target` up to the root (target first).
    #[must_use]
    pub fn ancestors(&self, target: NodeId) -> Ancestors<'_, S> {
        Ancestors {
            arena: self,
            next: Some(target),
        }
    }

    /// Reconstruct the path from the root to `target` (root first).
    #[must_use]
    pub fn path_to(&self, target: NodeId) -> Vec<&SearchNode<S>> {
        let mut path: Vec<&SearchNode<S>> = self.ancestors(target).collect();
        path.reverse();
        path
    }

    /// Number of nodes created so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &SearchNode<S>> {
        self.nodes.iter()
    }
}

/// Iterator over a node and its ancestors, walking parent links.
pub struct Ancestors<'a, S> {
    arena: &'a NodeArena<S>,
    next: Option<NodeId>,
}

impl<'a, S> Iterator for Ancestors<'a, S> {
    type Item = &'a SearchNode<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.arena.try_get(self.next?)?;
        self.next = node.parent();
        Some(node)
    }
}
