//! Journal annotator: the optional free-text reflection attached to the most
//! recent attempt. Only the latest entry per instrument is annotatable;
//! older entries keep whatever was saved while they were the latest.

use mindtrack_core::models::instrument::InstrumentKind;
use mindtrack_core::store_keys;

use crate::error::StoreError;
use crate::history;
use crate::kv::KeyValueStore;

/// Per-instrument journal view state for the post-submission screen.
///
/// In normal mode, edits accumulate in the draft and an explicit `save`
/// commits them into the latest attempt. In private mode the draft lives
/// only in memory for the session and is never written to the store.
#[derive(Debug, Default)]
pub struct JournalPad {
    draft: String,
    saved: bool,
    private_mode: bool,
}

impl JournalPad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn is_private(&self) -> bool {
        self.private_mode
    }

    /// Seed the draft from the latest attempt's saved journal, as when the
    /// user returns to a quiz screen. Skipped in private mode.
    pub fn load_existing(&mut self, store: &dyn KeyValueStore, kind: InstrumentKind) {
        if self.private_mode {
            return;
        }
        if let Some(text) = history::last_attempt(store, kind).and_then(|a| a.journal) {
            self.draft = text;
            self.saved = true;
        }
    }

    /// Update the draft text and mark it unsaved.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.saved = false;
    }

    /// Commit the draft into the latest attempt. No-op (returns `false`)
    /// when private mode is on, the trimmed draft is empty, or there is no
    /// attempt to annotate.
    pub fn save(
        &mut self,
        store: &mut dyn KeyValueStore,
        kind: InstrumentKind,
    ) -> Result<bool, StoreError> {
        if self.private_mode || self.draft.trim().is_empty() {
            return Ok(false);
        }
        if !annotate_latest(store, kind, Some(self.draft.clone()))? {
            return Ok(false);
        }
        self.saved = true;
        Ok(true)
    }

    /// Remove the journal from the latest attempt and reset the pad to
    /// empty/unsaved.
    pub fn clear(
        &mut self,
        store: &mut dyn KeyValueStore,
        kind: InstrumentKind,
    ) -> Result<(), StoreError> {
        annotate_latest(store, kind, None)?;
        self.draft.clear();
        self.saved = false;
        Ok(())
    }

    /// Toggle private mode. Enabling it discards the latest attempt's saved
    /// journal and keeps all future text in memory only; earlier attempts
    /// are never touched.
    pub fn set_private(
        &mut self,
        store: &mut dyn KeyValueStore,
        kind: InstrumentKind,
        enabled: bool,
    ) -> Result<(), StoreError> {
        self.private_mode = enabled;
        if enabled {
            annotate_latest(store, kind, None)?;
            self.saved = false;
        }
        Ok(())
    }
}

/// Rewrite the latest attempt's journal field, updating both the history
/// tail and the snapshot slot. Returns `false` when the history is empty.
fn annotate_latest(
    store: &mut dyn KeyValueStore,
    kind: InstrumentKind,
    journal: Option<String>,
) -> Result<bool, StoreError> {
    let mut log = history::list_all(store, kind);
    let Some(tail) = log.last_mut() else {
        return Ok(false);
    };
    tail.journal = journal;
    let snapshot = tail.clone();
    history::save_slot(store, &store_keys::history(kind), &log)?;
    history::save_slot(store, &store_keys::result(kind), &snapshot)?;
    Ok(true)
}
