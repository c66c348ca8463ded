//! Storage slot-key and export file-name conventions.
//!
//! Pure string functions — no store dependency. These define the canonical
//! layout of the per-instrument slots in the local key-value store.

use crate::models::instrument::InstrumentKind;

/// Slot holding the latest-attempt snapshot (JSON object).
pub fn result(kind: InstrumentKind) -> String {
    format!("{}Result", kind.id())
}

/// Slot holding the full attempt history (JSON array, insertion order).
pub fn history(kind: InstrumentKind) -> String {
    format!("{}History", kind.id())
}

/// Download file name for the JSON export.
pub fn json_export(kind: InstrumentKind) -> String {
    format!("{}_history.json", kind.id())
}

/// Download file name for the CSV export.
pub fn csv_export(kind: InstrumentKind) -> String {
    format!("{}_history.csv", kind.id())
}
