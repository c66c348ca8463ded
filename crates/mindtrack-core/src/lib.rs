//! mindtrack-core
//!
//! Pure domain types and storage slot-key conventions.
//! No I/O — this is the shared vocabulary of the mindtrack system.

pub mod error;
pub mod models;
pub mod store_keys;
