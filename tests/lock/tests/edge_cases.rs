//! Boundary behavior: solved roots, unreachable goals, node caps and
//! comparator misuse.

use lock_tests::scenarios::{scenario_puzzle, solved_puzzle};
use trellis_harness::contract::SearchWorld;
use trellis_harness::runner::{run_search, RunError};
use trellis_harness::worlds::puzzle::SlidingPuzzle;
use trellis_harness::worlds::sliding_moves::MoveCosts;
use trellis_search::error::SearchError;
use trellis_search::node::SearchNode;
use trellis_search::path::INITIAL_STATE_LABEL;
use trellis_search::policy::SearchPolicy;
use trellis_search::search::search;
use trellis_search::strategy::{CostMode, Strategy, StrategyKind};

#[test]
fn initial_equal_to_goal_needs_no_moves() {
    let puzzle = solved_puzzle();
    for kind in StrategyKind::ALL {
        let report =
            run_search(&puzzle, Strategy::cumulative(kind), &SearchPolicy::default()).unwrap();
        let solution = report.solution.unwrap();
        assert_eq!(solution.moves, 0);
        assert_eq!(solution.g_cost, 0);
        assert!(solution.operators.is_empty());
        assert_eq!(
            solution.trace,
            "Path from Initial to Solution:\n\nNo operators needed."
        );
        assert_eq!(report.stats.generated, 0, "the goal root is never expanded");
        assert!(report.stats.explored <= 1);
    }
}

#[test]
fn unreachable_goal_drains_whole_component() {
    // Tiles 7 and 8 swapped: odd parity relative to the goal.
    let puzzle = SlidingPuzzle::new(
        3,
        vec![1, 2, 3, 4, 5, 6, 8, 7, 0],
        None,
        MoveCosts::default(),
    )
    .unwrap();
    let report =
        run_search(&puzzle, Strategy::a_star_manhattan(), &SearchPolicy::default()).unwrap();
    assert!(report.solution.is_none());
    // 9!/2 arrangements share a parity class.
    assert_eq!(report.stats.explored, 181_440);
}

#[test]
fn node_cap_reports_search_space_too_large() {
    let policy = SearchPolicy {
        max_nodes: Some(3),
        ..SearchPolicy::default()
    };
    let err = run_search(&scenario_puzzle(), Strategy::uniform_cost(), &policy).unwrap_err();
    assert_eq!(
        err,
        RunError::Search(SearchError::SearchSpaceTooLarge { nodes: 3 })
    );
}

#[test]
fn last_edge_mode_cannot_rank_the_root() {
    let puzzle = scenario_puzzle();
    let root = SearchNode::root(trellis_search::node::NodeId::new(0), puzzle.initial_state());
    let strategy = Strategy::new(StrategyKind::UniformCost, CostMode::LastEdge).unwrap();
    let err = strategy.compare(&root, &root).unwrap_err();
    assert!(matches!(err, SearchError::InvalidComparison { .. }), "{err}");
    assert!(Strategy::cumulative(StrategyKind::UniformCost)
        .compare(&root, &root)
        .is_ok());
}

#[test]
fn last_edge_mode_still_searches_from_the_root() {
    let puzzle = scenario_puzzle();
    let table = puzzle.operators().unwrap();
    let strategy = Strategy::new(StrategyKind::AStarMisplacedTiles, CostMode::LastEdge).unwrap();
    let outcome = search(
        puzzle.initial_state(),
        &table,
        strategy,
        SearchPolicy::default(),
    )
    .unwrap();
    let solution = outcome.solution().unwrap();
    assert_eq!(solution.trace().steps()[0].label(), INITIAL_STATE_LABEL);
    assert!(solution.state().to_string().starts_with("0 1 2"));
}

#[test]
fn last_edge_with_distance_heuristic_is_rejected() {
    for kind in [StrategyKind::AStarManhattan, StrategyKind::AStarEuclidean] {
        assert!(matches!(
            Strategy::new(kind, CostMode::LastEdge),
            Err(SearchError::InvalidPolicy { .. })
        ));
    }
}
