use std::collections::BTreeMap;

use jiff::Timestamp;

use mindtrack_core::models::attempt::Attempt;
use mindtrack_core::models::combined::{CombinedEntry, TrendPoint};
use mindtrack_core::models::instrument::InstrumentKind;

/// Merge both instruments' entries into one chronological series: the union
/// of all distinct timestamps, ascending, each row carrying whichever
/// instrument(s) scored at that instant.
pub fn merge_by_timestamp(gad7: &[Attempt], phq9: &[Attempt]) -> Vec<TrendPoint> {
    let mut points: BTreeMap<Timestamp, TrendPoint> = BTreeMap::new();
    for entry in gad7 {
        points
            .entry(entry.timestamp)
            .or_insert_with(|| TrendPoint::at(entry.timestamp))
            .gad7
            .get_or_insert(entry.score);
    }
    for entry in phq9 {
        points
            .entry(entry.timestamp)
            .or_insert_with(|| TrendPoint::at(entry.timestamp))
            .phq9
            .get_or_insert(entry.score);
    }
    points.into_values().collect()
}

/// Both histories tagged with their instrument, newest first — the combined
/// results list.
pub fn combined_history(gad7: &[Attempt], phq9: &[Attempt]) -> Vec<CombinedEntry> {
    let mut combined: Vec<CombinedEntry> = gad7
        .iter()
        .cloned()
        .map(|attempt| CombinedEntry {
            kind: InstrumentKind::Gad7,
            attempt,
        })
        .chain(phq9.iter().cloned().map(|attempt| CombinedEntry {
            kind: InstrumentKind::Phq9,
            attempt,
        }))
        .collect();
    combined.sort_by(|a, b| b.attempt.timestamp.cmp(&a.attempt.timestamp));
    combined
}
