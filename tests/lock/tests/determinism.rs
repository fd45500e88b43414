//! Determinism lock tests.
//!
//! In-process: repeated runs of the same scenario produce identical outcomes
//! and report digests. Cross-process: the `search_fixture` binary prints the
//! same digests under several working directories and environments, and
//! they match the digests computed in this process.

#[path = "../src/scenarios.rs"]
mod scenarios;

use std::process::Command;

use scenarios::{fixture_digests, SAMPLE_MAZE};
use wayfinder_harness::report::{report_digest, report_json};
use wayfinder_harness::runner::{run, Algorithm, RunConfig};
use wayfinder_harness::worlds::grid::GridWorld;

fn run_fixture(work_dir: &std::path::Path, env_overrides: &[(&str, &str)]) -> String {
    let bin = env!("CARGO_BIN_EXE_search_fixture");
    let mut command = Command::new(bin);
    command
        .current_dir(work_dir)
        .env_remove("RUST_LOG")
        .env_remove("LC_ALL")
        .env_remove("LANG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command
        .output()
        .unwrap_or_else(|e| panic!("failed to spawn {bin}: {e}"));
    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

fn expected_output() -> String {
    fixture_digests()
        .into_iter()
        .map(|(label, digest)| format!("{label}={digest}\n"))
        .collect()
}

// ---------------------------------------------------------------------------
// In-process
// ---------------------------------------------------------------------------

#[test]
fn repeated_runs_are_identical_n10() {
    let world = GridWorld::parse(SAMPLE_MAZE).unwrap();
    for algorithm in Algorithm::ALL {
        let first = run(&world, &RunConfig::new(algorithm)).unwrap();
        for _ in 1..10 {
            let again = run(&world, &RunConfig::new(algorithm)).unwrap();
            assert_eq!(again.outcome, first.outcome, "{algorithm} diverged");
        }
    }
}

#[test]
fn fixture_digests_are_stable_in_process() {
    let first = fixture_digests();
    let second = fixture_digests();
    assert_eq!(first, second);
}

#[test]
fn fixture_labels_are_unique() {
    let digests = fixture_digests();
    let mut labels: Vec<&str> = digests.iter().map(|(l, _)| l.as_str()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), digests.len());
}

#[test]
fn algorithms_produce_distinct_reports() {
    // The algorithm name is part of the report, so digests never collide
    // across algorithms even when the searches coincide.
    let world = GridWorld::parse(SAMPLE_MAZE).unwrap();
    let mut digests: Vec<String> = Algorithm::ALL
        .into_iter()
        .map(|a| {
            let report = run(&world, &RunConfig::new(a)).unwrap();
            report_digest(&report_json(&world, &report))
                .unwrap()
                .as_str()
                .to_string()
        })
        .collect();
    digests.sort();
    digests.dedup();
    assert_eq!(digests.len(), Algorithm::ALL.len());
}

// ---------------------------------------------------------------------------
// Cross-process
// ---------------------------------------------------------------------------

#[test]
fn crossproc_output_matches_in_process_digests() {
    let workspace = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    assert_eq!(run_fixture(workspace, &[]), expected_output());
}

#[test]
fn crossproc_output_is_environment_independent() {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let temp = std::env::temp_dir();
    let variants: [(&std::path::Path, &[(&str, &str)]); 3] = [
        (manifest, &[]),
        (&temp, &[("LC_ALL", "C")]),
        (manifest, &[("LANG", "tr_TR.UTF-8"), ("RUST_LOG", "wayfinder=trace")]),
    ];
    let outputs: Vec<String> = variants
        .iter()
        .map(|(dir, env)| run_fixture(dir, env))
        .collect();
    assert!(!outputs[0].is_empty());
    assert_eq!(outputs[0], outputs[1]);
    assert_eq!(outputs[1], outputs[2]);
}
