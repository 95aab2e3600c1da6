//! odonto-storage
//!
//! JSON-file persistence for patients, charts, and edit history. Objects
//! are addressed by the keys in `odonto_core::storage_keys`, relative to a
//! data directory.

pub mod client;
pub mod error;
pub mod objects;
pub mod state;

pub use client::FileStore;
