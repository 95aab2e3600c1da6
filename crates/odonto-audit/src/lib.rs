//! odonto-audit
//!
//! Application-level audit events and the per-patient edit history shown
//! alongside the chart.

pub mod events;
pub mod history;
