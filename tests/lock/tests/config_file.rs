//! Run configs loaded from disk drive the search.

use lock_tests::scenarios::{SCENARIO_INITIAL, SCENARIO_OPERATORS};
use trellis_harness::config::{load_run_config, ConfigError};
use trellis_harness::runner::run_search;
use trellis_harness::worlds::puzzle::SlidingPuzzle;
use trellis_search::policy::Termination;
use trellis_search::strategy::StrategyKind;

#[test]
fn config_goal_and_policy_are_applied() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.toml");
    std::fs::write(
        &path,
        r#"
[search]
termination = "first_goal"

[strategy]
algorithm = "a_star_euclidean"

[puzzle]
goal = [[0, 1, 2], [3, 4, 5], [6, 7, 8]]
"#,
    )
    .unwrap();

    let config = load_run_config(&path).unwrap();
    assert_eq!(config.search.termination, Termination::FirstGoal);
    assert_eq!(config.strategy.algorithm, StrategyKind::AStarEuclidean);

    let puzzle = SlidingPuzzle::new(
        config.puzzle.size,
        SCENARIO_INITIAL.to_vec(),
        config.puzzle.goal().unwrap(),
        config.puzzle.move_costs,
    )
    .unwrap();
    let report = run_search(&puzzle, config.strategy().unwrap(), &config.search).unwrap();
    assert_eq!(report.solution.unwrap().operators, SCENARIO_OPERATORS);
}

#[test]
fn zero_node_cap_is_rejected_at_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[search]\nmax_nodes = 0\n").unwrap();
    assert!(matches!(
        load_run_config(&path),
        Err(ConfigError::Invalid { .. })
    ));
}
