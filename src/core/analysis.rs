//! Anomaly detection over a driving log.
//!
//! Rules are evaluated in order, the first match wins:
//!  1. data inconsistency (tiny file, no rows, future or over-long period)
//!  2. tampering attempts
//!  3. excessive failures
//!  4. bypass attempts (explicit, or too few tests in the period)
//!     The "too few tests" check applies to any period length, not only to
//!     periods of 30+ days: generated sparse files never span that long.
//!  5. device malfunction (average BAC too high)

use crate::errors::AppResult;
use crate::export::csv::read_rows;
use crate::models::{AnomalyType, DeviceStatus, LogRow, TestResult};
use chrono::NaiveDate;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const MIN_FILE_SIZE: u64 = 100;
pub const MAX_PERIOD_DAYS: i64 = 60;
pub const MAX_TAMPERING_ATTEMPTS: u32 = 3;
pub const MAX_FAILURE_RATE: f64 = 0.5;
/// At least one test per day over a month.
pub const MIN_TESTS: u32 = 30;
pub const MAX_AVERAGE_BAC: f64 = 0.1;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogStatistics {
    pub total_tests: u32,
    pub passed_tests: u32,
    pub failed_tests: u32,
    pub skipped_tests: u32,
    pub average_bac: f64,
    pub max_bac: f64,
    pub tampering_attempts: u32,
    pub bypass_attempts: u32,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
}

impl LogStatistics {
    pub fn from_rows(rows: &[LogRow]) -> Self {
        let mut stats = LogStatistics::default();
        let mut bac_sum = 0.0;

        for row in rows {
            stats.total_tests += 1;
            match row.test_result {
                TestResult::Pass => stats.passed_tests += 1,
                TestResult::Fail => stats.failed_tests += 1,
                TestResult::Skip => stats.skipped_tests += 1,
            }
            match row.device_status {
                DeviceStatus::Tampering => stats.tampering_attempts += 1,
                DeviceStatus::Bypass => stats.bypass_attempts += 1,
                DeviceStatus::Normal => {}
            }

            bac_sum += row.alcohol_level;
            stats.max_bac = stats.max_bac.max(row.alcohol_level);

            let date = row.timestamp.date();
            stats.period_start = Some(stats.period_start.map_or(date, |d| d.min(date)));
            stats.period_end = Some(stats.period_end.map_or(date, |d| d.max(date)));
        }

        if stats.total_tests > 0 {
            stats.average_bac = bac_sum / f64::from(stats.total_tests);
        }
        stats
    }

    pub fn failure_rate(&self) -> f64 {
        if self.total_tests == 0 {
            0.0
        } else {
            f64::from(self.failed_tests) / f64::from(self.total_tests)
        }
    }

    /// Days between the first and the last reading.
    pub fn period_days(&self) -> i64 {
        match (self.period_start, self.period_end) {
            (Some(s), Some(e)) => (e - s).num_days(),
            _ => 0,
        }
    }
}

pub fn detect_anomaly(stats: &LogStatistics, file_size: u64, today: NaiveDate) -> AnomalyType {
    if file_size < MIN_FILE_SIZE || stats.total_tests == 0 {
        return AnomalyType::DataInconsistency;
    }
    if stats.period_end.is_some_and(|end| end > today) || stats.period_days() > MAX_PERIOD_DAYS {
        return AnomalyType::DataInconsistency;
    }

    if stats.tampering_attempts > MAX_TAMPERING_ATTEMPTS {
        return AnomalyType::TamperingAttempt;
    }

    if stats.failure_rate() > MAX_FAILURE_RATE {
        return AnomalyType::ExcessiveFailures;
    }

    if stats.bypass_attempts > 0 || stats.total_tests < MIN_TESTS {
        return AnomalyType::BypassAttempt;
    }

    if stats.average_bac > MAX_AVERAGE_BAC {
        return AnomalyType::DeviceMalfunction;
    }

    AnomalyType::Normal
}

/// Outcome of analyzing one file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub file: String,
    pub file_size: u64,
    pub statistics: LogStatistics,
    pub anomaly_type: AnomalyType,
    pub anomaly_details: String,
}

pub fn analyze_file(path: &Path, today: NaiveDate) -> AppResult<AnalysisReport> {
    let file_size = fs::metadata(path)?.len();
    let rows = read_rows(path)?;
    let statistics = LogStatistics::from_rows(&rows);
    let anomaly_type = detect_anomaly(&statistics, file_size, today);

    Ok(AnalysisReport {
        file: path.display().to_string(),
        file_size,
        statistics,
        anomaly_type,
        anomaly_details: anomaly_type.description().to_string(),
    })
}
