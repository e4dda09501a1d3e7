//! Human-readable root-to-target path traces.

use std::fmt;

use crate::node::{NodeId, SearchNode};
use crate::tree::NodeArena;

/// Label used for the root entry of a trace.
pub const INITIAL_STATE_LABEL: &str = "Initial State (no operator)";

/// Heading line of every rendered trace.
pub const TRACE_HEADING: &str = "Path from Initial to Solution:";

/// One entry of a path: the operator that produced the state (none for the
/// root) and the state itself.
#[derive(Debug, Clone, Copy)]
pub struct PathStep<'a, S> {
    pub operator: Option<&'a str>,
    pub state: &'a S,
}

impl<S> PathStep<'_, S> {
    /// Operator name, or the initial-state label for the root.
    #[must_use]
    pub fn label(&self) -> &str {
        self.operator.unwrap_or(INITIAL_STATE_LABEL)
    }
}

/// A root-to-target path, rendered through `Display`.
#[derive(Debug, Clone)]
pub struct PathTrace<'a, S> {
    steps: Vec<PathStep<'a, S>>,
}

impl<'a, S> PathTrace<'a, S> {
    /// Collect the path ending at `target` from the arena.
    #[must_use]
    pub fn collect(arena: &'a NodeArena<S>, target: NodeId) -> Self {
        let mut steps: Vec<PathStep<'a, S>> = arena
            .ancestors(target)
            .map(|node: &'a SearchNode<S>| PathStep {
                operator: node.produced_by().map(|edge| &*edge.name),
                state: node.state(),
            })
            .collect();
        steps.reverse();
        Self { steps }
    }

    /// Steps in root-to-target order.
    #[must_use]
    pub fn steps(&self) -> &[PathStep<'a, S>] {
        &self.steps
    }

    /// Operator names along the path, root excluded.
    #[must_use]
    pub fn operators(&self) -> Vec<&'a str> {
        self.steps.iter().filter_map(|s| s.operator).collect()
    }
}

impl<S: fmt::Display> fmt::Display for PathTrace<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TRACE_HEADING}\n\n")?;
        if self.steps.len() <= 1 {
            return f.write_str("No operators needed.");
        }
        for step in &self.steps {
            write!(f, "{}\n{}\n\n", step.label(), step.state)?;
        }
        Ok(())
    }
}
