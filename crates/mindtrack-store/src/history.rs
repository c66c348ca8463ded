//! Per-instrument history log and latest-attempt snapshot.
//!
//! Two slots per instrument: `<kind>History` (the full log, insertion order)
//! and `<kind>Result` (a snapshot of the latest attempt). The snapshot is
//! write-through output only: reads always derive "last" from the history
//! tail, so a stale snapshot can never be observed.

use jiff::{SignedDuration, Timestamp};
use serde::Serialize;
use serde::de::DeserializeOwned;

use mindtrack_core::models::attempt::Attempt;
use mindtrack_core::models::instrument::InstrumentKind;
use mindtrack_core::store_keys;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Load a JSON slot. Malformed contents are treated as absent: the store is
/// user-local with no other source of truth, so refusing to parse would just
/// wedge the screen. The next write replaces the bad value.
pub fn load_slot<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(key, error = %e, "malformed slot, treating as absent");
            None
        }
    }
}

/// Save a value into a JSON slot, pretty-printed.
pub fn save_slot<T: Serialize>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(value)?;
    store.set(key, &json);
    Ok(())
}

/// Full log for one instrument, insertion order. Absent or malformed slots
/// read as empty.
pub fn list_all(store: &dyn KeyValueStore, kind: InstrumentKind) -> Vec<Attempt> {
    load_slot(store, &store_keys::history(kind)).unwrap_or_default()
}

/// The most recent attempt, derived from the history tail.
pub fn last_attempt(store: &dyn KeyValueStore, kind: InstrumentKind) -> Option<Attempt> {
    let mut log = list_all(store, kind);
    log.pop()
}

/// Append an attempt to the instrument's log and refresh the snapshot slot.
///
/// The timestamp is the entry's identity, so the log never moves backwards:
/// a timestamp at or before the current tail's is nudged 1 ms past it.
/// Returns the attempt as stored.
pub fn append(
    store: &mut dyn KeyValueStore,
    kind: InstrumentKind,
    mut attempt: Attempt,
) -> Result<Attempt, StoreError> {
    let mut log = list_all(store, kind);
    if let Some(tail) = log.last()
        && attempt.timestamp <= tail.timestamp
    {
        attempt.timestamp = tail
            .timestamp
            .saturating_add(SignedDuration::from_millis(1))
            .expect("SignedDuration arithmetic on Timestamp is infallible");
    }
    log.push(attempt.clone());
    save_slot(store, &store_keys::history(kind), &log)?;
    save_slot(store, &store_keys::result(kind), &attempt)?;
    tracing::debug!(
        instrument = kind.id(),
        score = attempt.score,
        "attempt appended"
    );
    Ok(attempt)
}

/// Remove the entry with the given timestamp. A missing timestamp is a
/// silent no-op. The snapshot slot is rewritten from the new tail (and
/// removed when the log empties) so it never points at a deleted entry.
pub fn delete_by_timestamp(
    store: &mut dyn KeyValueStore,
    kind: InstrumentKind,
    timestamp: Timestamp,
) -> Result<(), StoreError> {
    let mut log = list_all(store, kind);
    let before = log.len();
    log.retain(|entry| entry.timestamp != timestamp);
    if log.len() == before {
        return Ok(());
    }
    save_slot(store, &store_keys::history(kind), &log)?;
    reconcile_snapshot(store, kind, log.last())?;
    tracing::debug!(instrument = kind.id(), %timestamp, "attempt deleted");
    Ok(())
}

/// Empty the instrument's log and snapshot. Idempotent.
pub fn clear(store: &mut dyn KeyValueStore, kind: InstrumentKind) {
    store.remove(&store_keys::history(kind));
    store.remove(&store_keys::result(kind));
}

fn reconcile_snapshot(
    store: &mut dyn KeyValueStore,
    kind: InstrumentKind,
    tail: Option<&Attempt>,
) -> Result<(), StoreError> {
    match tail {
        Some(attempt) => save_slot(store, &store_keys::result(kind), attempt),
        None => {
            store.remove(&store_keys::result(kind));
            Ok(())
        }
    }
}
