//! odonto-core
//!
//! Pure domain types (charts, patients, reminders, private notes), RUT
//! helpers, and storage key conventions.
//! No I/O here; this is the shared vocabulary of the odonto workspace.

pub mod error;
pub mod models;
pub mod rut;
pub mod storage_keys;
