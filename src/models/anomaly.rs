use ansi_term::Colour;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnomalyType {
    Normal,
    TamperingAttempt,
    BypassAttempt,
    ExcessiveFailures,
    DeviceMalfunction,
    DataInconsistency,
}

impl AnomalyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyType::Normal => "NORMAL",
            AnomalyType::TamperingAttempt => "TAMPERING_ATTEMPT",
            AnomalyType::BypassAttempt => "BYPASS_ATTEMPT",
            AnomalyType::ExcessiveFailures => "EXCESSIVE_FAILURES",
            AnomalyType::DeviceMalfunction => "DEVICE_MALFUNCTION",
            AnomalyType::DataInconsistency => "DATA_INCONSISTENCY",
        }
    }

    /// Human readable explanation; empty for `Normal`.
    pub fn description(&self) -> &'static str {
        match self {
            AnomalyType::Normal => "",
            AnomalyType::TamperingAttempt => {
                "Device tampering attempts detected. Administrator review required."
            }
            AnomalyType::BypassAttempt => {
                "Suspected bypass attempt. The number of tests is abnormally low."
            }
            AnomalyType::ExcessiveFailures => {
                "Test failure rate is abnormally high. The device may need inspection."
            }
            AnomalyType::DeviceMalfunction => {
                "Suspected device malfunction. Abnormal readings were found."
            }
            AnomalyType::DataInconsistency => {
                "Data inconsistency found. Please check the file content."
            }
        }
    }

    pub fn is_flagged(&self) -> bool {
        !matches!(self, AnomalyType::Normal)
    }

    pub fn colour(&self) -> Colour {
        match self {
            AnomalyType::Normal => Colour::Green,
            AnomalyType::DataInconsistency => Colour::Purple,
            AnomalyType::DeviceMalfunction => Colour::Yellow,
            _ => Colour::Red,
        }
    }
}

impl fmt::Display for AnomalyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
