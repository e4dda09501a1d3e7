//! Harness runner: searches a world and packages the outcome as a report.
//!
//! # Pipeline
//!
//! ```text
//! operators() → initial_state() → search() → trace → digest → SolutionReport
//! ```
//!
//! The runner uses only the search crate's public entry point. Writing the
//! report to disk is left to the caller.

use std::fmt;

use trellis_kernel::digest::{canonical_hash, DOMAIN_PATH_TRACE};
use trellis_search::error::SearchError;
use trellis_search::policy::SearchPolicy;
use trellis_search::search::search;
use trellis_search::strategy::Strategy;

use crate::contract::{SearchWorld, WorldError};
use crate::report::{SolutionReport, SolutionSummary};

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// World method failed.
    World(WorldError),
    /// Search failed (resource exhaustion, comparator misuse, bad policy).
    Search(SearchError),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::World(e) => write!(f, "world error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::World(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<WorldError> for RunError {
    fn from(e: WorldError) -> Self {
        Self::World(e)
    }
}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Search `world` with `strategy` under `policy`.
///
/// An unreachable goal is not an error: the report comes back with
/// `solution: None`.
///
/// # Errors
///
/// Returns [`RunError::World`] if the operator table is invalid and
/// [`RunError::Search`] for any search failure.
pub fn run_search<W: SearchWorld>(
    world: &W,
    strategy: Strategy,
    policy: &SearchPolicy,
) -> Result<SolutionReport, RunError> {
    let table = world.operators()?;
    let signature = world.signature();
    tracing::info!(
        world = world.world_id(),
        signature = %signature,
        strategy = %strategy,
        "run started"
    );

    let outcome = search(world.initial_state(), &table, strategy, policy.clone())?;
    let solution = outcome.solution().map(|solution| {
        let trace = solution.trace().to_string();
        let trace_digest = canonical_hash(DOMAIN_PATH_TRACE, trace.as_bytes()).to_string();
        SolutionSummary {
            moves: solution.moves(),
            g_cost: solution.g_cost(),
            operators: solution.operators().into_iter().map(String::from).collect(),
            trace,
            trace_digest,
        }
    });

    if solution.is_none() {
        tracing::warn!(
            world = world.world_id(),
            signature = %signature,
            explored = outcome.stats().explored,
            "frontier exhausted without reaching the goal"
        );
    }

    Ok(SolutionReport {
        puzzle: world.world_id().to_string(),
        strategy: strategy.kind(),
        cost_mode: strategy.cost_mode(),
        signature,
        stats: outcome.stats(),
        solution,
    })
}
