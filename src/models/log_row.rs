use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// CSV header, in column order.
pub const HEADERS: [&str; 6] = [
    "timestamp",
    "alcoholLevel",
    "testResult",
    "deviceStatus",
    "gpsLocation",
    "notes",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestResult {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeviceStatus {
    Normal,
    Tampering,
    Bypass,
}

/// One reading of the interlock device, one CSV record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRow {
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    #[serde(serialize_with = "two_decimals")]
    pub alcohol_level: f64,
    pub test_result: TestResult,
    pub device_status: DeviceStatus,
    pub gps_location: String,
    pub notes: String,
}

impl LogRow {
    /// PASS / NORMAL / 0.00 row.
    pub fn pass(timestamp: NaiveDateTime, gps: &str, notes: impl Into<String>) -> Self {
        Self {
            timestamp,
            alcohol_level: 0.0,
            test_result: TestResult::Pass,
            device_status: DeviceStatus::Normal,
            gps_location: gps.to_string(),
            notes: notes.into(),
        }
    }

    /// Alcohol level as written in the CSV (`0.00`).
    pub fn alcohol_str(&self) -> String {
        format!("{:.2}", self.alcohol_level)
    }
}

fn two_decimals<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format!("{value:.2}"))
}

mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
