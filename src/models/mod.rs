pub mod anomaly;
pub mod gps;
pub mod log_row;
pub mod scenario;

pub use anomaly::AnomalyType;
pub use log_row::{DeviceStatus, LogRow, TestResult};
pub use scenario::Scenario;
