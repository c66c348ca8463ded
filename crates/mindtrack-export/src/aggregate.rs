use jiff::Timestamp;

use mindtrack_core::models::attempt::Attempt;
use mindtrack_core::models::date_range::DateRange;

/// Keep the entries whose age relative to `now` fits the range. `now` is an
/// explicit argument so the dashboard and the tests share one code path.
pub fn filter_by_range(entries: &[Attempt], range: DateRange, now: Timestamp) -> Vec<Attempt> {
    match range.max_age() {
        None => entries.to_vec(),
        Some(max_age) => entries
            .iter()
            .filter(|entry| now.duration_since(entry.timestamp) <= max_age)
            .cloned()
            .collect(),
    }
}

/// Mean score rounded to one decimal place, or `None` for an empty set.
pub fn average(entries: &[Attempt]) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }
    let sum: u32 = entries.iter().map(|e| e.score).sum();
    let mean = f64::from(sum) / entries.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}
