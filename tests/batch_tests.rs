mod common;
use common::{HEADER, first_line, ifx, list_files, raw_records, setup_out_dir};

use interlock_fixtures::config::{BatchPlan, Config};
use interlock_fixtures::core::batch::generate_batch;
use interlock_fixtures::models::Scenario;
use predicates::str::contains;
use std::fs;

#[test]
fn test_full_batch_writes_fifty_files() {
    let dir = setup_out_dir("full_batch");

    ifx()
        .args(["generate", "--out", dir.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("50 log files generated"));

    let files = list_files(&dir);
    assert_eq!(files.len(), 50);

    let count = |slug: &str| {
        files
            .iter()
            .filter(|f| f.starts_with(&format!("driving_log_{slug}_")))
            .count()
    };
    assert_eq!(count("normal"), 35);
    assert_eq!(count("tampering"), 5);
    assert_eq!(count("excessive_failures"), 5);
    assert_eq!(count("bypass"), 3);
    assert_eq!(count("insufficient"), 2);

    assert!(files.contains(&"driving_log_normal_035.csv".to_string()));
    assert!(files.contains(&"driving_log_insufficient_002.csv".to_string()));

    for f in &files {
        let path = dir.join(f);
        assert_eq!(first_line(&path), HEADER, "{f}");
        let expected = if f.contains("insufficient") { 15 } else { 120 };
        let records = raw_records(&path);
        assert_eq!(records.len(), expected, "{f}");
        assert!(records.iter().all(|r| r.len() == 6));
    }
}

#[test]
fn test_batch_report_counts() {
    let dir = setup_out_dir("batch_report_counts");
    let cfg = Config::default();

    let report = generate_batch(&cfg, &dir, &cfg.batch, Some(11)).expect("batch");

    assert_eq!(report.total(), 50);
    assert_eq!(report.count_for(Scenario::Normal), 35);
    assert_eq!(report.count_for(Scenario::Bypass), 3);
    assert_eq!(report.count_for(Scenario::Insufficient), 2);
}

#[test]
fn test_single_scenario_with_count() {
    let dir = setup_out_dir("single_scenario");

    ifx()
        .args([
            "generate",
            "--out",
            dir.to_str().unwrap(),
            "--scenario",
            "excessive-failures",
            "--count",
            "3",
        ])
        .assert()
        .success();

    assert_eq!(
        list_files(&dir),
        [
            "driving_log_excessive_failures_001.csv",
            "driving_log_excessive_failures_002.csv",
            "driving_log_excessive_failures_003.csv",
        ]
    );
}

#[test]
fn test_single_scenario_uses_batch_count_by_default() {
    let dir = setup_out_dir("single_scenario_default_count");

    ifx()
        .args(["generate", "--out", dir.to_str().unwrap(), "--scenario", "bypass"])
        .assert()
        .success();

    assert_eq!(list_files(&dir).len(), 3);
}

#[test]
fn test_count_requires_scenario() {
    ifx().args(["generate", "--count", "3"]).assert().failure();
}

#[test]
fn test_seed_makes_output_reproducible() {
    let a = setup_out_dir("seed_a");
    let b = setup_out_dir("seed_b");

    for dir in [&a, &b] {
        ifx()
            .args([
                "generate",
                "--out",
                dir.to_str().unwrap(),
                "--scenario",
                "tampering",
                "--seed",
                "1234",
            ])
            .assert()
            .success();
    }

    for f in list_files(&a) {
        let left = fs::read_to_string(a.join(&f)).unwrap();
        let right = fs::read_to_string(b.join(&f)).unwrap();
        assert_eq!(left, right, "{f}");
    }
}

#[test]
fn test_output_dir_from_config_file() {
    let dir = setup_out_dir("config_output_dir");
    let cfg_path = common::temp_file("config_output_dir", "yaml");
    fs::write(
        &cfg_path,
        format!(
            "output_dir: {}\nbatch:\n  normal: 2\n  tampering: 0\n  excessive_failures: 0\n  bypass: 0\n  insufficient: 1\n",
            dir.display()
        ),
    )
    .unwrap();

    ifx()
        .args(["--config", cfg_path.to_str().unwrap(), "generate"])
        .assert()
        .success();

    assert_eq!(
        list_files(&dir),
        [
            "driving_log_insufficient_001.csv",
            "driving_log_normal_001.csv",
            "driving_log_normal_002.csv",
        ]
    );
}

#[test]
fn test_existing_file_is_overwritten() {
    let dir = setup_out_dir("existing_file_overwritten");
    fs::create_dir_all(&dir).unwrap();
    let target = dir.join("driving_log_normal_001.csv");
    fs::write(&target, "junk,junk\nmore junk\n".repeat(200)).unwrap();

    ifx()
        .args([
            "generate",
            "--out",
            dir.to_str().unwrap(),
            "--scenario",
            "normal",
            "--count",
            "1",
        ])
        .assert()
        .success();

    assert_eq!(first_line(&target), HEADER);
    assert_eq!(raw_records(&target).len(), 120);
    assert!(!fs::read_to_string(&target).unwrap().contains("junk"));
}

#[test]
fn test_unwritable_output_aborts_the_batch() {
    // a regular file where the output directory should be
    let blocker = common::temp_file("unwritable_output", "txt");
    fs::write(&blocker, "not a directory").unwrap();

    let cfg = Config::default();
    let plan = BatchPlan::only(Scenario::Normal, 2);
    assert!(generate_batch(&cfg, &blocker, &plan, Some(1)).is_err());

    ifx()
        .args(["generate", "--out", blocker.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("Error:"));
}
