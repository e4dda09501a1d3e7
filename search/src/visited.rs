//! Content-keyed set of processed states.

use std::collections::HashSet;
use std::hash::Hash;

/// States that have been popped and processed.
///
/// Keyed by state value, never by node identity: two nodes that reach the
/// same board through different paths share one entry.
#[derive(Debug)]
pub struct VisitedSet<S> {
    states: HashSet<S>,
}

impl<S: Eq + Hash + Clone> VisitedSet<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
        }
    }

    /// Mark a state as visited. Returns `false` if it already was.
    pub fn mark(&mut self, state: &S) -> bool {
        if self.states.contains(state) {
            return false;
        }
        self.states.insert(state.clone())
    }

    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Size of the explored set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: Eq + Hash + Clone> Default for VisitedSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
