//! Search entry point and expansion loop.
//!
//! # Phases
//!
//! ```text
//! Running ──goal popped──▶ Draining ──frontier empty──▶ Done
//!    └──────────frontier empty──────────────────────────▲
//! ```
//!
//! Each step pops the lowest-keyed node and:
//!
//! 1. discards it if its state is already visited (no re-mark, no expansion);
//! 2. records it as the solution if it is a goal and there is no solution yet,
//!    or it has strictly fewer moves than the current one;
//! 3. expands it through every operator in table order, unless a solution is
//!    already recorded;
//! 4. marks its state visited.
//!
//! Under [`Termination::FirstGoal`] the search stops right after step 4 of the
//! pop that recorded the first solution.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use trellis_kernel::operator::OperatorTable;
use trellis_kernel::state::{Cost, SearchState};

use crate::error::SearchError;
use crate::frontier::BestFirstFrontier;
use crate::node::{Edge, FrontierKey, NodeId, SearchNode};
use crate::path::PathTrace;
use crate::policy::{SearchPolicy, Termination};
use crate::strategy::Strategy;
use crate::tree::NodeArena;
use crate::visited::VisitedSet;

/// Engine phase, derived from frontier and solution status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Frontier non-empty, no solution yet.
    Running,
    /// Frontier non-empty, solution recorded, no further expansion.
    Draining,
    /// Frontier empty, or halted by the termination policy.
    Done,
}

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Frontier pops, duplicates included.
    pub pops: u64,
    /// Distinct states processed (visited-set size).
    pub explored: u64,
    /// Child nodes created by expansion.
    pub generated: u64,
    /// Pops discarded because their state was already visited.
    pub duplicates_discarded: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

/// Single-use best-first search engine.
///
/// Owns its frontier, visited set and solution slot. [`SearchEngine::run`]
/// consumes the engine, so an instance cannot serve two searches.
pub struct SearchEngine<'t, S> {
    table: &'t OperatorTable<S>,
    names: Vec<Arc<str>>,
    strategy: Strategy,
    policy: SearchPolicy,
    arena: NodeArena<S>,
    frontier: BestFirstFrontier,
    visited: VisitedSet<S>,
    solution: Option<NodeId>,
    stats: SearchStats,
    halted: bool,
}

impl<'t, S: SearchState> SearchEngine<'t, S> {
    /// Build an engine and seed the frontier with the root.
    ///
    /// The root is seeded without ranking, so strategies that need a producing
    /// edge never see it.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the policy fails validation.
    pub fn new(
        initial: S,
        table: &'t OperatorTable<S>,
        strategy: Strategy,
        policy: SearchPolicy,
    ) -> Result<Self, SearchError> {
        policy.validate()?;

        let mut arena = NodeArena::new(policy.node_cap());
        let root = arena.insert_root(initial)?;
        // The root has no producing edge, so last-edge strategies cannot rank
        // it. It is alone in the frontier and its rank is never compared.
        let seed = if strategy.requires_edge() {
            FrontierKey::seed(root)
        } else {
            strategy.key(arena.get(root))?
        };
        let mut frontier = BestFirstFrontier::new();
        frontier.push(seed);

        Ok(Self {
            table,
            names: table.iter().map(|op| Arc::from(op.name())).collect(),
            strategy,
            policy,
            arena,
            frontier,
            visited: VisitedSet::new(),
            solution: None,
            stats: SearchStats {
                frontier_high_water: 1,
                ..SearchStats::default()
            },
            halted: false,
        })
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.halted || self.frontier.is_empty() {
            Phase::Done
        } else if self.solution.is_some() {
            Phase::Draining
        } else {
            Phase::Running
        }
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Best solution recorded so far.
    #[must_use]
    pub fn solution(&self) -> Option<NodeId> {
        self.solution
    }

    #[must_use]
    pub fn arena(&self) -> &NodeArena<S> {
        &self.arena
    }

    /// Process one frontier pop and return the resulting phase.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::SearchSpaceTooLarge`] if expansion cannot
    /// allocate another node, and [`SearchError::InvalidComparison`] if the
    /// strategy cannot rank a child.
    pub fn step(&mut self) -> Result<Phase, SearchError> {
        if self.halted {
            return Ok(Phase::Done);
        }
        let Some(key) = self.frontier.pop() else {
            return Ok(Phase::Done);
        };
        self.stats.pops += 1;
        let current = key.id;

        let node = self.arena.get(current);
        tracing::trace!(node = %current, rank = key.rank, moves = node.moves(), "pop");
        if self.visited.contains(node.state()) {
            self.stats.duplicates_discarded += 1;
            return Ok(self.phase());
        }
        let is_goal = node.state().is_goal();
        let moves = node.moves();

        if is_goal {
            self.record_goal(current, moves);
        }
        if self.solution.is_none() {
            self.expand(current)?;
        }

        self.visited.mark(self.arena.get(current).state());
        self.stats.explored = self.visited.len() as u64;

        if self.solution.is_some() && self.policy.termination == Termination::FirstGoal {
            tracing::debug!(node = %current, "first goal recorded; halting");
            self.halted = true;
        }
        Ok(self.phase())
    }

    fn record_goal(&mut self, candidate: NodeId, moves: u32) {
        match self.solution {
            None => {
                tracing::debug!(
                    node = %candidate,
                    moves,
                    pops = self.stats.pops,
                    "solution recorded; draining frontier"
                );
                self.solution = Some(candidate);
            }
            Some(best) if moves < self.arena.get(best).moves() => {
                tracing::debug!(
                    node = %candidate,
                    moves,
                    previous = %best,
                    "solution replaced by shorter path"
                );
                self.solution = Some(candidate);
            }
            Some(_) => {}
        }
    }

    fn expand(&mut self, current: NodeId) -> Result<(), SearchError> {
        let table = self.table;
        for (index, op) in table.iter().enumerate() {
            let Some(child_state) = op.apply(self.arena.get(current).state()) else {
                continue;
            };
            let edge = Edge {
                operator: index,
                name: Arc::clone(&self.names[index]),
                cost: op.cost(),
            };
            let child = self.arena.insert_child(current, child_state, edge)?;
            let key = self.strategy.key(self.arena.get(child))?;
            self.frontier.push(key);
            self.stats.generated += 1;
        }
        self.stats.frontier_high_water = self.frontier.high_water() as u64;
        Ok(())
    }

    /// Run to completion.
    ///
    /// # Errors
    ///
    /// Propagates any [`SearchEngine::step`] failure.
    pub fn run(mut self) -> Result<SearchOutcome<S>, SearchError> {
        tracing::info!(
            strategy = %self.strategy,
            operators = self.table.len(),
            termination = ?self.policy.termination,
            "search started"
        );
        while self.step()? != Phase::Done {}

        let solution = self.solution.map(|id| self.arena.get(id));
        tracing::info!(
            solved = solution.is_some(),
            moves = solution.map(SearchNode::moves),
            g_cost = solution.map(SearchNode::g_cost),
            pops = self.stats.pops,
            explored = self.stats.explored,
            generated = self.stats.generated,
            "search finished"
        );

        Ok(SearchOutcome {
            arena: self.arena,
            solution: self.solution,
            stats: self.stats,
            strategy: self.strategy,
        })
    }
}

/// Run a complete search.
///
/// # Errors
///
/// Returns [`SearchError`] for policy validation failures, resource
/// exhaustion and comparator misuse. Exhausting the frontier without a goal is
/// not an error; check [`SearchOutcome::solution`].
pub fn search<S: SearchState>(
    initial: S,
    table: &OperatorTable<S>,
    strategy: Strategy,
    policy: SearchPolicy,
) -> Result<SearchOutcome<S>, SearchError> {
    SearchEngine::new(initial, table, strategy, policy)?.run()
}

/// Result of a finished search. Owns every node created, so the solution's
/// ancestor chain stays reachable.
#[derive(Debug)]
pub struct SearchOutcome<S> {
    arena: NodeArena<S>,
    solution: Option<NodeId>,
    stats: SearchStats,
    strategy: Strategy,
}

impl<S> SearchOutcome<S> {
    /// The solution, or `None` if no goal was reachable.
    #[must_use]
    pub fn solution(&self) -> Option<Solution<'_, S>> {
        self.solution.map(|id| Solution {
            arena: &self.arena,
            id,
        })
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solution.is_some()
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub fn arena(&self) -> &NodeArena<S> {
        &self.arena
    }
}

/// View of the solution node inside a finished search.
#[derive(Debug)]
pub struct Solution<'a, S> {
    arena: &'a NodeArena<S>,
    id: NodeId,
}

impl<'a, S> Solution<'a, S> {
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn node(&self) -> &'a SearchNode<S> {
        self.arena.get(self.id)
    }

    #[must_use]
    pub fn state(&self) -> &'a S {
        self.node().state()
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.node().moves()
    }

    #[must_use]
    pub fn g_cost(&self) -> Cost {
        self.node().g_cost()
    }

    /// Nodes from the root to the solution.
    #[must_use]
    pub fn path(&self) -> Vec<&'a SearchNode<S>> {
        self.arena.path_to(self.id)
    }

    /// Operator names from the root to the solution.
    #[must_use]
    pub fn operators(&self) -> Vec<&'a str> {
        self.trace().operators()
    }

    /// Renderable root-to-solution trace.
    #[must_use]
    pub fn trace(&self) -> PathTrace<'a, S> {
        PathTrace::collect(self.arena, self.id)
    }
}
