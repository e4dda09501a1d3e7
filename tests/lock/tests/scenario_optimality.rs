//! Optimality of the reference scenario and scrambled boards against the
//! breadth-first oracle.

use lock_tests::bfs_baseline::bfs;
use lock_tests::scenarios::{
    scenario_puzzle, scrambled_puzzles, SCENARIO_OPERATORS, SCENARIO_TRACE,
};
use trellis_harness::runner::run_search;
use trellis_search::policy::{SearchPolicy, Termination};
use trellis_search::strategy::{Strategy, StrategyKind};

fn first_goal() -> SearchPolicy {
    SearchPolicy {
        termination: Termination::FirstGoal,
        ..SearchPolicy::default()
    }
}

#[test]
fn uniform_cost_matches_bfs_on_reference_scenario() {
    let puzzle = scenario_puzzle();
    let oracle = bfs(puzzle.initial()).unwrap();
    assert_eq!(oracle.moves, 3);

    let report =
        run_search(&puzzle, Strategy::uniform_cost(), &SearchPolicy::default()).unwrap();
    let solution = report.solution.unwrap();
    assert_eq!(solution.moves, oracle.moves);
    assert_eq!(solution.g_cost, 3);
    assert_eq!(solution.operators, SCENARIO_OPERATORS);
    assert_eq!(solution.trace, SCENARIO_TRACE);
}

#[test]
fn every_strategy_finds_the_unique_three_move_path() {
    let puzzle = scenario_puzzle();
    for kind in StrategyKind::ALL {
        let report =
            run_search(&puzzle, Strategy::cumulative(kind), &SearchPolicy::default()).unwrap();
        let solution = report.solution.unwrap();
        assert_eq!(solution.operators, SCENARIO_OPERATORS, "{}", kind.as_str());
        assert_eq!(solution.trace, SCENARIO_TRACE, "{}", kind.as_str());
    }
}

#[test]
fn a_star_explores_no_more_than_bfs() {
    let mut puzzles = vec![scenario_puzzle()];
    puzzles.extend(scrambled_puzzles());

    // Draining keeps marking states visited after the goal is recorded, so
    // the default policy is checked as well as first-goal.
    for policy in [first_goal(), SearchPolicy::default()] {
        for puzzle in &puzzles {
            let oracle = bfs(puzzle.initial()).unwrap();
            for kind in [
                StrategyKind::AStarManhattan,
                StrategyKind::AStarEuclidean,
                StrategyKind::AStarMisplacedTiles,
            ] {
                let report = run_search(puzzle, Strategy::cumulative(kind), &policy).unwrap();
                let solution = report.solution.unwrap();
                assert_eq!(
                    solution.moves,
                    oracle.moves,
                    "{} on {} ({:?})",
                    kind.as_str(),
                    report.signature,
                    policy.termination
                );
                assert!(
                    report.stats.explored <= oracle.dequeued,
                    "{} explored {} states, BFS dequeued {} ({:?})",
                    kind.as_str(),
                    report.stats.explored,
                    oracle.dequeued,
                    policy.termination
                );
            }
        }
    }
}

#[test]
fn draining_keeps_optimal_move_counts() {
    for puzzle in scrambled_puzzles() {
        let oracle = bfs(puzzle.initial()).unwrap();
        for kind in StrategyKind::ALL {
            let report =
                run_search(&puzzle, Strategy::cumulative(kind), &SearchPolicy::default()).unwrap();
            assert_eq!(
                report.solution.unwrap().moves,
                oracle.moves,
                "{} on {}",
                kind.as_str(),
                report.signature
            );
        }
    }
}

#[test]
fn manhattan_explores_no_more_than_uniform_cost() {
    for puzzle in scrambled_puzzles() {
        let manhattan =
            run_search(&puzzle, Strategy::a_star_manhattan(), &first_goal()).unwrap();
        let uniform = run_search(&puzzle, Strategy::uniform_cost(), &first_goal()).unwrap();
        assert!(manhattan.stats.explored <= uniform.stats.explored);
    }
}
