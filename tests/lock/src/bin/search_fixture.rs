//! Binary that solves the reference scenario with every strategy and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `search_fixture`
//!
//! Output: one `key=value` line per field, grouped per strategy.

use lock_tests::scenarios::scenario_puzzle;
use trellis_harness::runner::run_search;
use trellis_search::policy::SearchPolicy;
use trellis_search::strategy::{Strategy, StrategyKind};

fn main() {
    let puzzle = scenario_puzzle();
    for kind in StrategyKind::ALL {
        let report = run_search(&puzzle, Strategy::cumulative(kind), &SearchPolicy::default())
            .expect("search run failed");
        let solution = report.solution.as_ref().expect("scenario is solvable");
        let digest = report.digest().expect("solved report has a digest");

        println!("strategy={}", kind.as_str());
        println!("moves={}", solution.moves);
        println!("g_cost={}", solution.g_cost);
        println!("operators={}", solution.operators.join(","));
        println!("explored={}", report.stats.explored);
        println!("pops={}", report.stats.pops);
        println!("generated={}", report.stats.generated);
        println!("trace_digest={}", solution.trace_digest);
        println!("report_digest={digest}");
        println!(
            "report_json={}",
            serde_json::to_string(&report).expect("report serializes")
        );
    }
}
