use std::path::PathBuf;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../streamscope-core/tests/fixtures")
        .join(name)
        .display()
        .to_string()
}

/// Binary isolated from any config in the environment or working directory.
fn streamscopectl(workdir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("streamscopectl");
    cmd.current_dir(workdir.path())
        .env_remove("STREAMSCOPE_CONFIG_PATH")
        .env_remove("STREAMSCOPE_CONFIG_JSON")
        .env("RUST_LOG", "error");
    cmd
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout is json")
}

#[test]
fn summary_json_covers_whole_catalog() {
    let dir = TempDir::new().unwrap();
    let snapshot = json_stdout(streamscopectl(&dir).args([
        "summary",
        "--platform",
        "netflix",
        "--source",
        fixture("netflix_titles.csv").as_str(),
        "--format",
        "json",
    ]));

    assert_eq!(snapshot["platform"], "netflix");
    assert_eq!(snapshot["total_titles"], 11);
    assert_eq!(snapshot["filtered_titles"], 11);
    assert_eq!(snapshot["duration_buckets"].as_array().unwrap().len(), 4);
    assert!(snapshot.get("charts").is_none());
}

#[test]
fn summary_applies_filters_and_charts() {
    let dir = TempDir::new().unwrap();
    let snapshot = json_stdout(streamscopectl(&dir).args([
        "summary",
        "-p",
        "hulu",
        "--source",
        fixture("hulu_titles.csv").as_str(),
        "--type",
        "Movie",
        "--range",
        "1900..2100",
        "--charts",
        "--format",
        "json",
    ]));

    let filtered = snapshot["filtered_titles"].as_u64().unwrap();
    assert!(filtered < snapshot["total_titles"].as_u64().unwrap());
    let kinds = snapshot["kind_counts"].as_array().unwrap();
    assert_eq!(kinds.len(), 1);
    assert_eq!(kinds[0]["label"], "Movie");
    assert_eq!(snapshot["charts"].as_array().unwrap().len(), 4);
}

#[test]
fn summary_text_report() {
    let dir = TempDir::new().unwrap();
    streamscopectl(&dir)
        .args([
            "summary",
            "--platform",
            "disney-plus",
            "--source",
            fixture("disney_plus_titles.csv").as_str(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Disney+: 8 of 8 titles"))
        .stdout(predicate::str::contains("Duration"));
}

#[test]
fn title_drill_down() {
    let dir = TempDir::new().unwrap();
    let detail = json_stdout(streamscopectl(&dir).args([
        "title",
        "--platform",
        "netflix",
        "--source",
        fixture("netflix_titles.csv").as_str(),
        "s1",
        "--format",
        "json",
    ]));
    assert_eq!(detail["show_id"], "s1");
    assert_eq!(detail["added_on"], "2021-09-25");
    assert_eq!(detail["duration_label"], "90 min");
}

#[test]
fn unknown_title_fails() {
    let dir = TempDir::new().unwrap();
    streamscopectl(&dir)
        .args([
            "title",
            "--platform",
            "netflix",
            "--source",
            fixture("netflix_titles.csv").as_str(),
            "nope",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no title with id"));
}

#[test]
fn missing_source_reports_terminal_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.csv");
    let config = dir.path().join("streamscope.toml");
    std::fs::write(&config, "[retry]\nmax_attempts = 1\n").unwrap();

    streamscopectl(&dir)
        .args(["summary", "--platform", "netflix", "--source"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to load data after 1 attempts",
        ));
}

#[test]
fn bad_range_is_rejected_by_parser() {
    let dir = TempDir::new().unwrap();
    streamscopectl(&dir)
        .args(["summary", "--platform", "netflix", "--range", "nineties"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid year range selection"));
}

#[test]
fn compare_synthetic_is_seeded() {
    let dir = TempDir::new().unwrap();
    let run = |seed: &str| {
        json_stdout(streamscopectl(&dir).args([
            "compare",
            "--synthetic",
            "--seed",
            seed,
            "--count",
            "25",
            "--format",
            "json",
        ]))
    };

    let first = run("5");
    assert_eq!(first, run("5"));
    let metrics = first.as_array().unwrap();
    assert_eq!(metrics.len(), 3);
    assert!(metrics.iter().all(|m| m["total_titles"] == 25));
}

#[test]
fn synth_writes_loadable_csv() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("comparison_titles.csv");
    streamscopectl(&dir)
        .args(["synth", "--seed", "3", "--count", "4", "--out"])
        .arg(&out)
        .assert()
        .success();

    let snapshot = json_stdout(streamscopectl(&dir).args([
        "summary",
        "--platform",
        "comparison",
        "--source",
        out.to_str().unwrap(),
        "--format",
        "json",
    ]));
    assert_eq!(snapshot["total_titles"], 12);
}
