//! Best-first frontier.
//!
//! Entries are node ids keyed by the rank the active strategy assigned at
//! push time. Deletion is lazy: an id whose state was visited after it was
//! pushed stays in the heap and is discarded by the engine when popped.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::node::{FrontierKey, NodeId};

/// Best-first frontier manager.
///
/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse` to pop the
/// lowest key first.
#[derive(Debug, Default)]
pub struct BestFirstFrontier {
    heap: BinaryHeap<Reverse<FrontierKey>>,
    high_water: usize,
}

impl BestFirstFrontier {
    /// Create a new empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a keyed node id.
    pub fn push(&mut self, key: FrontierKey) {
        self.heap.push(Reverse(key));
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Pop the lowest key.
    #[must_use]
    pub fn pop(&mut self) -> Option<FrontierKey> {
        self.heap.pop().map(|Reverse(key)| key)
    }

    /// Id of the node that would be popped next.
    #[must_use]
    pub fn peek(&self) -> Option<NodeId> {
        self.heap.peek().map(|Reverse(key)| key.id)
    }

    /// Current frontier size, stale entries included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of frontier size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
