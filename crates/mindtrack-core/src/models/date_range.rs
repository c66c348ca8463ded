use jiff::SignedDuration;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Dashboard date-range filter. Serialized values match the UI's filter
/// control ("all", "7", "30").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DateRange {
    #[serde(rename = "all")]
    All,
    #[serde(rename = "7")]
    Last7Days,
    #[serde(rename = "30")]
    Last30Days,
}

impl DateRange {
    /// Maximum age an entry may have and still fall inside the range.
    /// `None` means unbounded.
    pub fn max_age(self) -> Option<SignedDuration> {
        match self {
            DateRange::All => None,
            DateRange::Last7Days => Some(SignedDuration::from_hours(7 * 24)),
            DateRange::Last30Days => Some(SignedDuration::from_hours(30 * 24)),
        }
    }
}
