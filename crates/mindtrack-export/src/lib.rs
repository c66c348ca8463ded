//! mindtrack-export
//!
//! Summary statistics and export artifacts derived from stored history:
//! date-range filtering, averages, the merged trend series, and the JSON/CSV
//! download payloads.

pub mod aggregate;
pub mod csv;
pub mod error;
pub mod json;
pub mod merge;
