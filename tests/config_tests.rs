mod common;
use common::{ifx, temp_file};

use chrono::NaiveDate;
use interlock_fixtures::config::{BatchPlan, Config};
use interlock_fixtures::core::LogFixtureGenerator;
use interlock_fixtures::errors::AppError;
use interlock_fixtures::models::Scenario;
use predicates::str::contains;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;

#[test]
fn test_defaults_match_stock_fixture_set() {
    let cfg = Config::default();
    assert_eq!(cfg.output_dir, "sample-logs");
    assert_eq!(cfg.anchor_date, NaiveDate::from_ymd_opt(2025, 10, 1).unwrap());
    assert_eq!(cfg.daily_hours, vec![8, 12, 18, 22]);
    assert_eq!(cfg.grid_rows(), 120);
    assert_eq!(cfg.insufficient_rows, 15);
    assert_eq!(cfg.batch.total(), 50);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_partial_yaml_keeps_defaults() {
    let cfg = Config::from_yaml("tampering_rate: 0.25\nbatch:\n  normal: 10\n").unwrap();
    assert_eq!(cfg.tampering_rate, 0.25);
    assert_eq!(cfg.failure_rate, 0.6);
    assert_eq!(cfg.batch.normal, 10);
    assert_eq!(cfg.batch.tampering, 5);
    assert_eq!(cfg.batch.total(), 25);
}

#[test]
fn test_invalid_values_are_rejected() {
    for yaml in [
        "bypass_rate: 1.5",
        "failure_rate: -0.1",
        "window_days: 0",
        "daily_hours: []",
        "daily_hours: [8, 24]",
        "insufficient_hours: [22, 8]",
        "failure_bac: [0.2, 0.1]",
        "failure_bac: [.nan, 0.15]",
        "failure_bac: [0.03, .nan]",
        "failure_bac: [0.03, .inf]",
        "failure_bac: [-.inf, 0.15]",
        "anchor_jitter_days: 4000000000",
        "window_days: 4000000000",
        "window_days: 3661",
    ] {
        match Config::from_yaml(yaml) {
            Err(AppError::Config(_)) => {}
            other => panic!("{yaml}: expected config error, got {other:?}"),
        }
    }
}

#[test]
fn test_largest_spans_still_generate() {
    let cfg = Config::from_yaml("anchor_jitter_days: 3660\nwindow_days: 3660\n").unwrap();
    let mut generator = LogFixtureGenerator::new(&cfg, "unused", StdRng::seed_from_u64(3));

    let rows = generator.rows(Scenario::ExcessiveFailures).unwrap();
    assert_eq!(rows.len(), 3660 * 4);
    assert_eq!(generator.rows(Scenario::Insufficient).unwrap().len(), 15);
}

#[test]
fn test_anchor_near_calendar_end_is_rejected() {
    let cfg = Config {
        anchor_date: NaiveDate::MAX,
        ..Config::default()
    };
    assert!(matches!(cfg.validate(), Err(AppError::Config(_))));
}

#[test]
fn test_invalid_config_file_fails_generate_cleanly() {
    let path = temp_file("nan_bac_config_cli", "yaml");
    let out = temp_file("nan_bac_config_out", "d");
    fs::write(&path, "failure_bac: [.nan, 0.15]\n").unwrap();

    ifx()
        .args([
            "--config",
            path.to_str().unwrap(),
            "generate",
            "--out",
            out.to_str().unwrap(),
            "--scenario",
            "excessive-failures",
        ])
        .assert()
        .code(1)
        .stderr(contains("failure_bac"));
}

#[test]
fn test_malformed_yaml_is_an_error() {
    assert!(matches!(
        Config::from_yaml("window_days: [not a number"),
        Err(AppError::Yaml(_))
    ));
}

#[test]
fn test_load_without_path_gives_defaults() {
    let cfg = Config::load(None).unwrap();
    assert_eq!(cfg.batch, BatchPlan::default());
}

#[test]
fn test_load_missing_file_fails() {
    let path = temp_file("missing_config", "yaml");
    assert!(Config::load(Some(path.to_str().unwrap())).is_err());
}

#[test]
fn test_batch_plan_only() {
    let plan = BatchPlan::only(Scenario::Bypass, 7);
    assert_eq!(plan.total(), 7);
    assert_eq!(plan.count(Scenario::Bypass), 7);
    assert_eq!(plan.count(Scenario::Normal), 0);
}

#[test]
fn test_written_default_config_round_trips() {
    let path = temp_file("written_default_config", "yaml");

    ifx()
        .args(["config", "--write", path.to_str().unwrap()])
        .assert()
        .success();

    let content = fs::read_to_string(&path).unwrap();
    let cfg = Config::from_yaml(&content).unwrap();
    assert_eq!(cfg.batch, BatchPlan::default());
    assert_eq!(cfg.anchor_date, Config::default().anchor_date);
}

#[test]
fn test_config_print() {
    ifx()
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("anchor_date:"))
        .stdout(contains("2025-10-01"))
        .stdout(contains("window_days: 30"));
}

#[test]
fn test_invalid_config_file_fails_every_command() {
    let path = temp_file("invalid_config_cli", "yaml");
    fs::write(&path, "tampering_rate: 2.0\n").unwrap();

    ifx()
        .args(["--config", path.to_str().unwrap(), "config", "--print"])
        .assert()
        .failure()
        .stderr(contains("tampering_rate"));
}
