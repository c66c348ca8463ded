use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::attempt::Attempt;
use crate::models::instrument::InstrumentKind;

/// One row of the merged dashboard series: the union of both instruments'
/// timestamps, each side present only where that instrument has an entry
/// at that instant. A missing side is absent, never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrendPoint {
    pub timestamp: Timestamp,
    pub gad7: Option<u32>,
    pub phq9: Option<u32>,
}

impl TrendPoint {
    pub fn at(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            gad7: None,
            phq9: None,
        }
    }
}

/// One row of the combined results list: an attempt tagged with the
/// instrument that produced it. The tag is implicit while an attempt sits in
/// its own instrument's history slot and only becomes explicit here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CombinedEntry {
    pub kind: InstrumentKind,
    pub attempt: Attempt,
}
