//! odonto-chart
//!
//! The odontogram state model. Pure in-memory state, no I/O: the tooth
//! catalogs for each dentition, the per-tooth status store, derived
//! statistics, the tooth editor, and the status-to-graphics mapping.

pub mod aggregate;
pub mod catalog;
pub mod editor;
pub mod error;
pub mod render;
pub mod store;

pub use aggregate::StatusCounts;
pub use catalog::{Catalog, Quadrant, catalog};
pub use editor::ToothEditor;
pub use error::ChartError;
pub use store::{ToothChange, ToothStatusStore};
