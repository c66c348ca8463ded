use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The questionnaires this system knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum InstrumentKind {
    Gad7,
    Phq9,
}

impl InstrumentKind {
    pub const ALL: [InstrumentKind; 2] = [InstrumentKind::Gad7, InstrumentKind::Phq9];

    /// Stable identifier used in slot keys and export file names.
    pub fn id(self) -> &'static str {
        match self {
            InstrumentKind::Gad7 => "gad7",
            InstrumentKind::Phq9 => "phq9",
        }
    }

    /// Display name as the UI shows it (e.g., "GAD-7").
    pub fn name(self) -> &'static str {
        match self {
            InstrumentKind::Gad7 => "GAD-7",
            InstrumentKind::Phq9 => "PHQ-9",
        }
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InstrumentKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gad7" => Ok(InstrumentKind::Gad7),
            "phq9" => Ok(InstrumentKind::Phq9),
            other => Err(CoreError::UnknownInstrument(other.to_string())),
        }
    }
}
