//! Report files and digest determinism.

use lock_tests::scenarios::{scenario_puzzle, SCENARIO_TRACE};
use trellis_harness::report::{write_report, ReportError};
use trellis_harness::runner::run_search;
use trellis_harness::worlds::puzzle::SlidingPuzzle;
use trellis_harness::worlds::sliding_moves::MoveCosts;
use trellis_kernel::digest::{canonical_hash, ContentHash, DOMAIN_PATH_TRACE};
use trellis_search::policy::SearchPolicy;
use trellis_search::strategy::{Strategy, StrategyKind};

#[test]
fn solved_report_is_written_under_derived_name() {
    let dir = tempfile::tempdir().unwrap();
    let report =
        run_search(&scenario_puzzle(), Strategy::uniform_cost(), &SearchPolicy::default())
            .unwrap();
    let path = write_report(dir.path(), &report).unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "SlidingTilePuzzle-UniformCost-125340678.txt"
    );
    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        format!(
            "Size of Explored Set (# of visited nodes): {}",
            report.stats.explored
        )
    );
    assert_eq!(
        lines.next().unwrap(),
        format!(
            "Total # of visited nodes (counting duplicates): {}",
            report.stats.pops
        )
    );
    assert_eq!(lines.next().unwrap(), "Amount of Moves (depth): 3");
    assert!(contents.ends_with(SCENARIO_TRACE));
}

#[test]
fn unsolved_report_is_not_written() {
    let dir = tempfile::tempdir().unwrap();
    let puzzle =
        SlidingPuzzle::new(2, vec![2, 1, 3, 0], None, MoveCosts::default()).unwrap();
    let report = run_search(&puzzle, Strategy::uniform_cost(), &SearchPolicy::default()).unwrap();
    assert!(matches!(
        write_report(dir.path(), &report),
        Err(ReportError::Unsolved)
    ));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn file_names_differ_per_algorithm() {
    let puzzle = scenario_puzzle();
    let mut names: Vec<String> = StrategyKind::ALL
        .into_iter()
        .map(|kind| {
            run_search(&puzzle, Strategy::cumulative(kind), &SearchPolicy::default())
                .unwrap()
                .file_name()
        })
        .collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), StrategyKind::ALL.len());
}

#[test]
fn repeated_runs_produce_identical_digests() {
    for kind in StrategyKind::ALL {
        let run = || {
            run_search(
                &scenario_puzzle(),
                Strategy::cumulative(kind),
                &SearchPolicy::default(),
            )
            .unwrap()
        };
        let (a, b) = (run(), run());
        assert_eq!(a, b, "{}", kind.as_str());
        assert_eq!(a.digest().unwrap(), b.digest().unwrap());
    }
}

#[test]
fn trace_digest_binds_the_rendered_trace() {
    let report =
        run_search(&scenario_puzzle(), Strategy::a_star_manhattan(), &SearchPolicy::default())
            .unwrap();
    let solution = report.solution.unwrap();
    let expected = canonical_hash(DOMAIN_PATH_TRACE, SCENARIO_TRACE.as_bytes());
    assert_eq!(solution.trace_digest, expected.as_str());
    let parsed = ContentHash::parse(&solution.trace_digest).unwrap();
    assert_eq!(parsed.algorithm(), "sha256");
    assert_eq!(parsed.hex_digest().len(), 64);
}
