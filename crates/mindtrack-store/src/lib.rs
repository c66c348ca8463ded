//! mindtrack-store
//!
//! Local persistence for attempt history. A minimal key-value abstraction
//! (in-memory and on-disk), the per-instrument history log, and the journal
//! annotator.

pub mod disk;
pub mod error;
pub mod history;
pub mod journal;
pub mod kv;
