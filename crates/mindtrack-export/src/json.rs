use mindtrack_core::models::attempt::Attempt;

use crate::error::ExportError;

/// Pretty-printed JSON array of the entry list, byte-for-byte what the
/// download file contains.
pub fn export_json(entries: &[Attempt]) -> Result<Vec<u8>, ExportError> {
    let bytes = serde_json::to_vec_pretty(entries)?;
    tracing::debug!(
        entries = entries.len(),
        bytes = bytes.len(),
        "JSON export built"
    );
    Ok(bytes)
}
