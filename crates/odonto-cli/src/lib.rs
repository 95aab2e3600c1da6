//! odonto-cli library root.
//!
//! Exposes the config, chart-session, and patient-record layers so that
//! integration tests can drive them without going through argument parsing.

pub mod config;
pub mod records;
pub mod session;
