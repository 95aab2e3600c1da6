//! odonto-export
//!
//! Odontogram SVG and Markdown chart reports rendered from templates.

pub mod error;
pub mod render;
pub mod styles;
pub mod svg;
