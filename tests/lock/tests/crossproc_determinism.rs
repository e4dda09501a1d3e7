//! Cross-process determinism.
//!
//! Spawns the `search_fixture` binary under several environment variants
//! and asserts that all produce identical output. Hash-map iteration order
//! is randomized per process, so this catches any leak of it into results.

use std::process::Command;

/// Run the fixture with the given cwd and environment overrides.
fn run_variant(work_dir: &std::path::Path, env_overrides: &[(&str, &str)]) -> String {
    let mut command = Command::new(env!("CARGO_BIN_EXE_search_fixture"));
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LANG")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }
    let output = command
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn search_fixture: {e}"));
    assert!(
        output.status.success(),
        "search_fixture failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn fixture_output_is_identical_across_processes() {
    let tmp = tempfile::tempdir().unwrap();
    let baseline = run_variant(tmp.path(), &[]);
    let variants = [
        run_variant(tmp.path(), &[("LC_ALL", "C")]),
        run_variant(&std::env::temp_dir(), &[("LANG", "en_US.UTF-8")]),
        run_variant(tmp.path(), &[("RUST_LOG", "trace"), ("TZ", "UTC")]),
    ];
    for (i, output) in variants.iter().enumerate() {
        assert_eq!(&baseline, output, "variant {i} diverged");
    }
}

#[test]
fn fixture_reports_every_strategy() {
    let tmp = tempfile::tempdir().unwrap();
    let output = run_variant(tmp.path(), &[]);
    assert_eq!(output.matches("strategy=").count(), 4);
    assert_eq!(output.matches("moves=3\n").count(), 4);
    assert_eq!(
        output
            .matches("operators=Move Up,Move Left,Move Left\n")
            .count(),
        4
    );
    for line in output.lines().filter(|l| l.starts_with("report_json=")) {
        let json: serde_json::Value =
            serde_json::from_str(line.trim_start_matches("report_json=")).unwrap();
        assert_eq!(json["signature"], "125340678");
    }
}
