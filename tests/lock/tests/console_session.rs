//! Scripted console sessions driven end to end.

use lock_tests::scenarios::{SCENARIO_GOAL, SCENARIO_INITIAL, SCENARIO_OPERATORS};
use trellis_harness::console::Console;
use trellis_harness::runner::run_search;
use trellis_harness::worlds::puzzle::SlidingPuzzle;
use trellis_harness::worlds::sliding_moves::MoveCosts;
use trellis_search::policy::SearchPolicy;
use trellis_search::strategy::{Strategy, StrategyKind};

fn join(cells: &[u8]) -> String {
    cells
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn entered_board_and_goal_reach_the_search() {
    // Board, decline default goal, enter goal, pick an invalid then uniform cost.
    let input = format!(
        "{}\n0\n{}\n9\n3\n",
        join(&SCENARIO_INITIAL),
        join(&SCENARIO_GOAL)
    );
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let session = console.session(3).unwrap();
    assert_eq!(session.kind, StrategyKind::UniformCost);

    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("# _ _\n_ _ _\n_ _ _"));
    assert!(output.contains("1 2 5\n3 4 #\n_ _ _"));
    assert!(output.contains("Please enter a number between 0 and 3."));

    let puzzle = SlidingPuzzle::new(
        session.size,
        session.cells,
        session.goal,
        MoveCosts::default(),
    )
    .unwrap();
    let report = run_search(
        &puzzle,
        Strategy::cumulative(session.kind),
        &SearchPolicy::default(),
    )
    .unwrap();
    assert_eq!(report.solution.unwrap().operators, SCENARIO_OPERATORS);
}

#[test]
fn default_goal_is_blank_last() {
    let input = "1 2 3 4 5 6 7 0 8\n1\n0\n";
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let session = console.session(3).unwrap();
    assert!(session.goal.is_none());
    assert_eq!(session.kind, StrategyKind::AStarManhattan);

    let puzzle =
        SlidingPuzzle::new(3, session.cells, session.goal, MoveCosts::default()).unwrap();
    let report = run_search(
        &puzzle,
        Strategy::cumulative(session.kind),
        &SearchPolicy::default(),
    )
    .unwrap();
    assert_eq!(report.solution.unwrap().operators, ["Move Right"]);
}
