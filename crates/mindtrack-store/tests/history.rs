use jiff::Timestamp;

use mindtrack_core::models::attempt::Attempt;
use mindtrack_core::models::instrument::InstrumentKind;
use mindtrack_core::store_keys;
use mindtrack_store::history;
use mindtrack_store::kv::{KeyValueStore, MemoryStore};

fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

fn attempt(score: u32, severity: &str, stamp: &str) -> Attempt {
    Attempt::new(score, severity, ts(stamp))
}

#[test]
fn append_then_list_preserves_insertion_order() {
    let mut store = MemoryStore::new();
    let kind = InstrumentKind::Gad7;

    history::append(&mut store, kind, attempt(5, "Mild Anxiety", "2026-01-01T09:00:00Z")).unwrap();
    history::append(&mut store, kind, attempt(12, "Moderate Anxiety", "2026-01-08T09:00:00Z"))
        .unwrap();
    history::append(&mut store, kind, attempt(3, "Minimal Anxiety", "2026-01-15T09:00:00Z"))
        .unwrap();

    let log = history::list_all(&store, kind);
    assert_eq!(log.len(), 3);
    assert_eq!(
        log.iter().map(|a| a.score).collect::<Vec<_>>(),
        vec![5, 12, 3]
    );
}

#[test]
fn histories_are_kept_per_instrument() {
    let mut store = MemoryStore::new();

    history::append(
        &mut store,
        InstrumentKind::Gad7,
        attempt(5, "Mild Anxiety", "2026-01-01T09:00:00Z"),
    )
    .unwrap();
    history::append(
        &mut store,
        InstrumentKind::Phq9,
        attempt(20, "Severe Depression", "2026-01-01T10:00:00Z"),
    )
    .unwrap();

    assert_eq!(history::list_all(&store, InstrumentKind::Gad7).len(), 1);
    assert_eq!(history::list_all(&store, InstrumentKind::Phq9).len(), 1);
    assert_eq!(
        history::last_attempt(&store, InstrumentKind::Phq9).unwrap().score,
        20
    );
}

#[test]
fn last_attempt_is_the_history_tail() {
    let mut store = MemoryStore::new();
    let kind = InstrumentKind::Phq9;
    assert!(history::last_attempt(&store, kind).is_none());

    history::append(&mut store, kind, attempt(8, "Mild Depression", "2026-02-01T08:00:00Z"))
        .unwrap();
    history::append(&mut store, kind, attempt(11, "Moderate Depression", "2026-02-02T08:00:00Z"))
        .unwrap();

    assert_eq!(history::last_attempt(&store, kind).unwrap().score, 11);
}

#[test]
fn append_nudges_non_increasing_timestamps() {
    let mut store = MemoryStore::new();
    let kind = InstrumentKind::Gad7;
    let stamp = "2026-03-01T12:00:00Z";

    let first = history::append(&mut store, kind, attempt(4, "Minimal Anxiety", stamp)).unwrap();
    let second = history::append(&mut store, kind, attempt(6, "Mild Anxiety", stamp)).unwrap();

    assert!(second.timestamp > first.timestamp);

    // Delete-by-timestamp stays unambiguous.
    history::delete_by_timestamp(&mut store, kind, first.timestamp).unwrap();
    let log = history::list_all(&store, kind);
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].score, 6);
}

#[test]
fn delete_removes_matching_entry_and_refreshes_snapshot() {
    let mut store = MemoryStore::new();
    let kind = InstrumentKind::Gad7;

    let first =
        history::append(&mut store, kind, attempt(5, "Mild Anxiety", "2026-01-01T09:00:00Z"))
            .unwrap();
    let second =
        history::append(&mut store, kind, attempt(12, "Moderate Anxiety", "2026-01-08T09:00:00Z"))
            .unwrap();

    history::delete_by_timestamp(&mut store, kind, second.timestamp).unwrap();

    let log = history::list_all(&store, kind);
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].timestamp, first.timestamp);
    // The snapshot follows the new tail instead of going stale.
    assert_eq!(history::last_attempt(&store, kind).unwrap().score, 5);
    let raw = store.get(&store_keys::result(kind)).unwrap();
    let snapshot: Attempt = serde_json::from_str(&raw).unwrap();
    assert_eq!(snapshot.score, 5);
}

#[test]
fn delete_of_missing_timestamp_is_a_noop() {
    let mut store = MemoryStore::new();
    let kind = InstrumentKind::Phq9;

    history::append(&mut store, kind, attempt(8, "Mild Depression", "2026-02-01T08:00:00Z"))
        .unwrap();
    history::delete_by_timestamp(&mut store, kind, ts("2030-01-01T00:00:00Z")).unwrap();

    assert_eq!(history::list_all(&store, kind).len(), 1);
}

#[test]
fn deleting_the_only_entry_reconciles_last_to_absent() {
    let mut store = MemoryStore::new();
    let kind = InstrumentKind::Gad7;

    let stored =
        history::append(&mut store, kind, attempt(5, "Mild Anxiety", "2026-01-01T09:00:00Z"))
            .unwrap();
    history::delete_by_timestamp(&mut store, kind, stored.timestamp).unwrap();

    assert!(history::list_all(&store, kind).is_empty());
    assert!(history::last_attempt(&store, kind).is_none());
    assert!(store.get(&store_keys::result(kind)).is_none());
}

#[test]
fn stale_snapshot_is_never_observed() {
    let mut store = MemoryStore::new();
    let kind = InstrumentKind::Gad7;

    // A snapshot left behind with no matching history entry must read as
    // absent, not resurrect a deleted attempt.
    let orphan = attempt(9, "Mild Anxiety", "2026-01-01T09:00:00Z");
    let raw = serde_json::to_string_pretty(&orphan).unwrap();
    store.set(&store_keys::result(kind), &raw);

    assert!(history::last_attempt(&store, kind).is_none());
}

#[test]
fn clear_is_idempotent() {
    let mut store = MemoryStore::new();
    let kind = InstrumentKind::Phq9;

    history::append(&mut store, kind, attempt(8, "Mild Depression", "2026-02-01T08:00:00Z"))
        .unwrap();

    history::clear(&mut store, kind);
    assert!(history::list_all(&store, kind).is_empty());
    assert!(history::last_attempt(&store, kind).is_none());

    history::clear(&mut store, kind);
    assert!(history::list_all(&store, kind).is_empty());
    assert!(store.get(&store_keys::history(kind)).is_none());
    assert!(store.get(&store_keys::result(kind)).is_none());
}

#[test]
fn malformed_history_slot_reads_as_empty_and_recovers() {
    let mut store = MemoryStore::new();
    let kind = InstrumentKind::Gad7;

    store.set(&store_keys::history(kind), "{ not json");
    assert!(history::list_all(&store, kind).is_empty());

    // The next append replaces the bad value cleanly.
    history::append(&mut store, kind, attempt(5, "Mild Anxiety", "2026-01-01T09:00:00Z")).unwrap();
    assert_eq!(history::list_all(&store, kind).len(), 1);
}

#[test]
fn persisted_attempt_matches_the_external_json_shape() {
    let mut store = MemoryStore::new();
    let kind = InstrumentKind::Gad7;

    history::append(&mut store, kind, attempt(5, "Mild Anxiety", "2026-01-05T09:00:00Z")).unwrap();

    let raw = store.get(&store_keys::result(kind)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["score"], 5);
    assert_eq!(value["severity"], "Mild Anxiety");
    assert!(value["journal"].is_null());
    assert_eq!(value["timestamp"], "2026-01-05T09:00:00Z");

    let raw = store.get(&store_keys::history(kind)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value.as_array().map(|a| a.len()), Some(1));
}
