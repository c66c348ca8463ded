use mindtrack_core::models::attempt::Attempt;

/// `Score,Severity,Timestamp` header plus one line per entry. Fields are
/// comma-joined with no escaping: severity labels come from a closed set and
/// the journal is not part of the export.
pub fn export_csv(entries: &[Attempt]) -> Vec<u8> {
    let mut out = String::from("Score,Severity,Timestamp");
    for entry in entries {
        out.push_str(&format!(
            "\n{},{},{}",
            entry.score, entry.severity, entry.timestamp
        ));
    }
    tracing::debug!(entries = entries.len(), bytes = out.len(), "CSV export built");
    out.into_bytes()
}
