//! Generation parameters.
//!
//! Every field has a serde default, so a missing configuration file (or a
//! file with only a few keys) yields the stock fixture set: a 30-day window
//! anchored on 2025-10-01, four daily tests and a 35/5/5/3/2 batch.

use crate::errors::{AppError, AppResult};
use crate::models::Scenario;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Upper bound for `window_days` and `anchor_jitter_days` (about ten years).
pub const MAX_SPAN_DAYS: u32 = 3660;

/// Number of files generated per scenario by the batch driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchPlan {
    #[serde(default = "default_normal_count")]
    pub normal: u32,
    #[serde(default = "default_anomaly_count")]
    pub tampering: u32,
    #[serde(default = "default_anomaly_count")]
    pub excessive_failures: u32,
    #[serde(default = "default_bypass_count")]
    pub bypass: u32,
    #[serde(default = "default_insufficient_count")]
    pub insufficient: u32,
}

fn default_normal_count() -> u32 {
    35
}
fn default_anomaly_count() -> u32 {
    5
}
fn default_bypass_count() -> u32 {
    3
}
fn default_insufficient_count() -> u32 {
    2
}

impl Default for BatchPlan {
    fn default() -> Self {
        Self {
            normal: default_normal_count(),
            tampering: default_anomaly_count(),
            excessive_failures: default_anomaly_count(),
            bypass: default_bypass_count(),
            insufficient: default_insufficient_count(),
        }
    }
}

impl BatchPlan {
    pub fn count(&self, scenario: Scenario) -> u32 {
        match scenario {
            Scenario::Normal => self.normal,
            Scenario::Tampering => self.tampering,
            Scenario::ExcessiveFailures => self.excessive_failures,
            Scenario::Bypass => self.bypass,
            Scenario::Insufficient => self.insufficient,
        }
    }

    /// Plan that only generates `count` files of `scenario`.
    pub fn only(scenario: Scenario, count: u32) -> Self {
        let mut plan = Self {
            normal: 0,
            tampering: 0,
            excessive_failures: 0,
            bypass: 0,
            insufficient: 0,
        };
        match scenario {
            Scenario::Normal => plan.normal = count,
            Scenario::Tampering => plan.tampering = count,
            Scenario::ExcessiveFailures => plan.excessive_failures = count,
            Scenario::Bypass => plan.bypass = count,
            Scenario::Insufficient => plan.insufficient = count,
        }
        plan
    }

    pub fn total(&self) -> u32 {
        Scenario::ALL.iter().map(|s| self.count(*s)).sum()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_anchor_date")]
    pub anchor_date: NaiveDate,
    /// The window start is `anchor_date + rand(0..=anchor_jitter_days)`.
    #[serde(default = "default_anchor_jitter")]
    pub anchor_jitter_days: u32,
    #[serde(default = "default_window_days")]
    pub window_days: u32,
    #[serde(default = "default_daily_hours")]
    pub daily_hours: Vec<u32>,
    #[serde(default = "default_insufficient_rows")]
    pub insufficient_rows: u32,
    /// Inclusive hour range for the sparse (insufficient) scenario.
    #[serde(default = "default_insufficient_hours")]
    pub insufficient_hours: (u32, u32),
    #[serde(default = "default_tampering_rate")]
    pub tampering_rate: f64,
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,
    #[serde(default = "default_bypass_rate")]
    pub bypass_rate: f64,
    /// Inclusive BAC range of a failed test.
    #[serde(default = "default_failure_bac")]
    pub failure_bac: (f64, f64),
    #[serde(default)]
    pub batch: BatchPlan,
}

fn default_output_dir() -> String {
    "sample-logs".to_string()
}
fn default_anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).unwrap_or_default()
}
fn default_anchor_jitter() -> u32 {
    30
}
fn default_window_days() -> u32 {
    30
}
fn default_daily_hours() -> Vec<u32> {
    vec![8, 12, 18, 22]
}
fn default_insufficient_rows() -> u32 {
    15
}
fn default_insufficient_hours() -> (u32, u32) {
    (8, 22)
}
fn default_tampering_rate() -> f64 {
    0.1
}
fn default_failure_rate() -> f64 {
    0.6
}
fn default_bypass_rate() -> f64 {
    0.05
}
fn default_failure_bac() -> (f64, f64) {
    (0.03, 0.15)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            anchor_date: default_anchor_date(),
            anchor_jitter_days: default_anchor_jitter(),
            window_days: default_window_days(),
            daily_hours: default_daily_hours(),
            insufficient_rows: default_insufficient_rows(),
            insufficient_hours: default_insufficient_hours(),
            tampering_rate: default_tampering_rate(),
            failure_rate: default_failure_rate(),
            bypass_rate: default_bypass_rate(),
            failure_bac: default_failure_bac(),
            batch: BatchPlan::default(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or return defaults when no path is given.
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        let Some(raw) = path else {
            return Ok(Self::default());
        };

        let path = expand_tilde(raw);
        let content = fs::read_to_string(&path).map_err(|e| {
            AppError::Config(format!("cannot read '{}': {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration to `path`.
    pub fn write_default(path: &str) -> AppResult<PathBuf> {
        let path = expand_tilde(path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, Self::default().to_yaml()?)?;
        Ok(path)
    }

    pub fn output_path(&self) -> PathBuf {
        expand_tilde(&self.output_dir)
    }

    /// Rows written by one dense (grid) scenario file.
    pub fn grid_rows(&self) -> usize {
        self.window_days as usize * self.daily_hours.len()
    }

    pub fn validate(&self) -> AppResult<()> {
        for (name, rate) in [
            ("tampering_rate", self.tampering_rate),
            ("failure_rate", self.failure_rate),
            ("bypass_rate", self.bypass_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(AppError::Config(format!(
                    "{name} must be between 0 and 1, got {rate}"
                )));
            }
        }

        if self.window_days == 0 {
            return Err(AppError::Config("window_days must be at least 1".into()));
        }
        for (name, days) in [
            ("window_days", self.window_days),
            ("anchor_jitter_days", self.anchor_jitter_days),
        ] {
            if days > MAX_SPAN_DAYS {
                return Err(AppError::Config(format!(
                    "{name} must be at most {MAX_SPAN_DAYS}, got {days}"
                )));
            }
        }
        let span = u64::from(self.anchor_jitter_days) + u64::from(self.window_days);
        if self.anchor_date.checked_add_days(Days::new(span)).is_none() {
            return Err(AppError::Config(format!(
                "anchor_date {} plus {span} days is out of the calendar range",
                self.anchor_date
            )));
        }

        if self.daily_hours.is_empty() {
            return Err(AppError::Config("daily_hours cannot be empty".into()));
        }
        if let Some(h) = self.daily_hours.iter().find(|h| **h > 23) {
            return Err(AppError::Config(format!("invalid hour in daily_hours: {h}")));
        }

        let (lo, hi) = self.insufficient_hours;
        if lo > hi || hi > 23 {
            return Err(AppError::Config(format!(
                "invalid insufficient_hours range: {lo}..{hi}"
            )));
        }

        let (min_bac, max_bac) = self.failure_bac;
        if !min_bac.is_finite() || !max_bac.is_finite() || min_bac < 0.0 || min_bac > max_bac {
            return Err(AppError::Config(format!(
                "invalid failure_bac range: {min_bac}..{max_bac}"
            )));
        }

        Ok(())
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
