use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One completed, fully-answered questionnaire submission.
///
/// The timestamp doubles as the entry's identifier within one instrument's
/// history; there is no separate id field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Attempt {
    pub score: u32,
    pub severity: String,
    pub journal: Option<String>,
    pub timestamp: Timestamp,
}

impl Attempt {
    /// Build an attempt at an explicit instant. The journal is always absent
    /// at submission time; it is attached afterwards, if at all.
    pub fn new(score: u32, severity: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            score,
            severity: severity.into(),
            journal: None,
            timestamp,
        }
    }

    /// Build an attempt stamped with the current wall-clock instant.
    pub fn record(score: u32, severity: impl Into<String>) -> Self {
        Self::new(score, severity, Timestamp::now())
    }
}
