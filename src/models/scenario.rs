use clap::ValueEnum;
use std::fmt;

/// Generation profile of a fixture file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    Normal,
    Tampering,
    ExcessiveFailures,
    Bypass,
    Insufficient,
}

impl Scenario {
    /// Batch order.
    pub const ALL: [Scenario; 5] = [
        Scenario::Normal,
        Scenario::Tampering,
        Scenario::ExcessiveFailures,
        Scenario::Bypass,
        Scenario::Insufficient,
    ];

    /// Slug used in file names: `driving_log_<slug>_<NNN>.csv`.
    pub fn slug(&self) -> &'static str {
        match self {
            Scenario::Normal => "normal",
            Scenario::Tampering => "tampering",
            Scenario::ExcessiveFailures => "excessive_failures",
            Scenario::Bypass => "bypass",
            Scenario::Insufficient => "insufficient",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Normal => "normal logs",
            Scenario::Tampering => "tampering attempt logs",
            Scenario::ExcessiveFailures => "excessive failure logs",
            Scenario::Bypass => "bypass attempt logs",
            Scenario::Insufficient => "insufficient test count logs",
        }
    }

    pub fn file_name(&self, idx: u32) -> String {
        format!("driving_log_{}_{:03}.csv", self.slug(), idx)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
