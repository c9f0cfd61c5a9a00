//! Fixture synthesis: one row-building routine per scenario, plus the CSV
//! writing shared by all of them.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::csv::write_rows;
use crate::models::gps::GPS_LOCATIONS;
use crate::models::{DeviceStatus, LogRow, Scenario, TestResult};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::path::{Path, PathBuf};

pub struct LogFixtureGenerator<'a, R: Rng> {
    cfg: &'a Config,
    out_dir: PathBuf,
    rng: R,
}

impl<'a, R: Rng> LogFixtureGenerator<'a, R> {
    pub fn new(cfg: &'a Config, out_dir: impl AsRef<Path>, rng: R) -> Self {
        Self {
            cfg,
            out_dir: out_dir.as_ref().to_path_buf(),
            rng,
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn generate(&mut self, scenario: Scenario, idx: u32) -> AppResult<PathBuf> {
        match scenario {
            Scenario::Normal => self.generate_normal(idx),
            Scenario::Tampering => self.generate_tampering(idx),
            Scenario::ExcessiveFailures => self.generate_excessive_failures(idx),
            Scenario::Bypass => self.generate_bypass(idx),
            Scenario::Insufficient => self.generate_insufficient(idx),
        }
    }

    pub fn generate_normal(&mut self, idx: u32) -> AppResult<PathBuf> {
        let rows = self.normal_rows()?;
        self.write(Scenario::Normal, idx, &rows)
    }

    pub fn generate_tampering(&mut self, idx: u32) -> AppResult<PathBuf> {
        let rows = self.tampering_rows()?;
        self.write(Scenario::Tampering, idx, &rows)
    }

    pub fn generate_excessive_failures(&mut self, idx: u32) -> AppResult<PathBuf> {
        let rows = self.excessive_failure_rows()?;
        self.write(Scenario::ExcessiveFailures, idx, &rows)
    }

    pub fn generate_bypass(&mut self, idx: u32) -> AppResult<PathBuf> {
        let rows = self.bypass_rows()?;
        self.write(Scenario::Bypass, idx, &rows)
    }

    pub fn generate_insufficient(&mut self, idx: u32) -> AppResult<PathBuf> {
        let rows = self.insufficient_rows()?;
        self.write(Scenario::Insufficient, idx, &rows)
    }

    /// Rows of one file, without touching the filesystem.
    pub fn rows(&mut self, scenario: Scenario) -> AppResult<Vec<LogRow>> {
        match scenario {
            Scenario::Normal => self.normal_rows(),
            Scenario::Tampering => self.tampering_rows(),
            Scenario::ExcessiveFailures => self.excessive_failure_rows(),
            Scenario::Bypass => self.bypass_rows(),
            Scenario::Insufficient => self.insufficient_rows(),
        }
    }

    fn write(&self, scenario: Scenario, idx: u32, rows: &[LogRow]) -> AppResult<PathBuf> {
        let path = self.out_dir.join(scenario.file_name(idx));
        write_rows(&path, rows)?;
        Ok(path)
    }

    fn normal_rows(&mut self) -> AppResult<Vec<LogRow>> {
        self.grid(|_, at, hour, gps| LogRow::pass(at, gps, format!("Normal test at {hour}:00")))
    }

    fn tampering_rows(&mut self) -> AppResult<Vec<LogRow>> {
        let rate = self.cfg.tampering_rate;
        self.grid(|rng, at, _, gps| {
            if rng.random_bool(rate) {
                LogRow {
                    test_result: TestResult::Skip,
                    device_status: DeviceStatus::Tampering,
                    ..LogRow::pass(at, gps, "Tampering attempt detected")
                }
            } else {
                LogRow::pass(at, gps, "Normal test")
            }
        })
    }

    fn excessive_failure_rows(&mut self) -> AppResult<Vec<LogRow>> {
        let rate = self.cfg.failure_rate;
        let (min_bac, max_bac) = self.cfg.failure_bac;
        self.grid(|rng, at, _, gps| {
            if rng.random_bool(rate) {
                let bac = rng.random_range(min_bac..=max_bac);
                LogRow {
                    alcohol_level: round2(bac),
                    test_result: TestResult::Fail,
                    ..LogRow::pass(at, gps, "Alcohol detected")
                }
            } else {
                LogRow::pass(at, gps, "Normal test")
            }
        })
    }

    fn bypass_rows(&mut self) -> AppResult<Vec<LogRow>> {
        let rate = self.cfg.bypass_rate;
        self.grid(|rng, at, _, gps| {
            if rng.random_bool(rate) {
                LogRow {
                    test_result: TestResult::Skip,
                    device_status: DeviceStatus::Bypass,
                    ..LogRow::pass(at, gps, "Bypass attempt detected")
                }
            } else {
                LogRow::pass(at, gps, "Normal test")
            }
        })
    }

    /// Sparse file: a handful of readings on random days, minute 0.
    fn insufficient_rows(&mut self) -> AppResult<Vec<LogRow>> {
        let cfg = self.cfg;
        let start = self.window_start();
        let (lo, hi) = cfg.insufficient_hours;
        let last_day = i64::from(cfg.window_days.saturating_sub(1));

        let mut rows = Vec::with_capacity(cfg.insufficient_rows as usize);
        for _ in 0..cfg.insufficient_rows {
            let day = start + Duration::days(self.rng.random_range(0..=last_day));
            let hour = self.rng.random_range(lo..=hi);
            let at = at_time(day, hour, 0)?;
            let gps = pick_gps(&mut self.rng);
            rows.push(LogRow::pass(at, gps, "Random test"));
        }
        Ok(rows)
    }

    /// Walks `window_days` consecutive days × `daily_hours`, building one row
    /// per slot at a random minute.
    fn grid<F>(&mut self, mut build: F) -> AppResult<Vec<LogRow>>
    where
        F: FnMut(&mut R, NaiveDateTime, u32, &'static str) -> LogRow,
    {
        let cfg = self.cfg;
        let start = self.window_start();
        let mut rows = Vec::with_capacity(cfg.grid_rows());

        for day in 0..cfg.window_days {
            let date = start + Duration::days(i64::from(day));
            for &hour in &cfg.daily_hours {
                let minute = self.rng.random_range(0..=59);
                let at = at_time(date, hour, minute)?;
                let gps = pick_gps(&mut self.rng);
                rows.push(build(&mut self.rng, at, hour, gps));
            }
        }
        Ok(rows)
    }

    fn window_start(&mut self) -> NaiveDate {
        let jitter = self.rng.random_range(0..=self.cfg.anchor_jitter_days);
        self.cfg.anchor_date + Duration::days(i64::from(jitter))
    }
}

fn pick_gps<R: Rng>(rng: &mut R) -> &'static str {
    GPS_LOCATIONS.choose(rng).copied().unwrap_or(GPS_LOCATIONS[0])
}

fn at_time(date: NaiveDate, hour: u32, minute: u32) -> AppResult<NaiveDateTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
        .map(|t| date.and_time(t))
        .ok_or_else(|| AppError::Config(format!("invalid time {hour:02}:{minute:02}")))
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
