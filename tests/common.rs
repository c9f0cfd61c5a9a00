#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "timestamp,alcoholLevel,testResult,deviceStatus,gpsLocation,notes";

pub fn ifx() -> Command {
    cargo_bin_cmd!("interlock-fixtures")
}

/// Create a unique, empty output directory inside the system temp dir
pub fn setup_out_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_interlock_fixtures", name));
    fs::remove_dir_all(&path).ok();
    path
}

/// Create a temporary file path inside tempdir and ensure it's removed
pub fn temp_file(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_interlock_fixtures.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Sorted file names of a directory
pub fn list_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read output dir")
        .map(|e| e.expect("dir entry").file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

/// Raw CSV records of a file, header excluded
pub fn raw_records(path: &Path) -> Vec<csv::StringRecord> {
    let mut rdr = csv::Reader::from_path(path).expect("open csv");
    rdr.records().map(|r| r.expect("csv record")).collect()
}

pub fn first_line(path: &Path) -> String {
    let content = fs::read_to_string(path).expect("read csv");
    content.lines().next().unwrap_or_default().to_string()
}
