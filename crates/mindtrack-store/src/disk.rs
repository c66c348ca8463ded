//! Disk-backed key-value store: one JSON file per slot.

use std::fs;
use std::io;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// One file per slot under a single directory. Writes are atomic (tmp file +
/// rename) so a crash never leaves a half-written slot. Read and write
/// failures are absorbed and logged: this is user-local data with no other
/// source of truth, and losing one write beats losing the session.
#[derive(Debug)]
pub struct DiskStore {
    dir: PathBuf,
}

impl DiskStore {
    /// Open the store directory, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for DiskStore {
    fn get(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read slot, treating as absent");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let path = self.slot_path(key);
        let tmp = path.with_extension("json.tmp");
        let result = fs::write(&tmp, value).and_then(|()| fs::rename(&tmp, &path));
        match result {
            Ok(()) => tracing::debug!(key, path = %path.display(), "slot flushed to disk"),
            Err(e) => tracing::warn!(key, error = %e, "failed to write slot"),
        }
    }

    fn remove(&mut self, key: &str) {
        if let Err(e) = fs::remove_file(self.slot_path(key))
            && e.kind() != io::ErrorKind::NotFound
        {
            tracing::warn!(key, error = %e, "failed to remove slot");
        }
    }
}
