use serde::{Deserialize, Serialize};

/// Layout configuration for the odontogram SVG.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OdontogramStyle {
    /// Rendered width and height of one tooth, in pixels.
    pub tooth_size: f64,

    /// Horizontal space between neighbouring teeth.
    pub tooth_gap: f64,

    /// Extra space at the midline, between the right and left quadrants.
    pub quadrant_gap: f64,

    /// Vertical space between the upper and lower rows.
    pub row_gap: f64,

    /// Outer margin on every side.
    pub margin: f64,

    /// Font size of the tooth number labels.
    pub label_font_size: f64,

    pub font_family: String,
}

impl Default for OdontogramStyle {
    fn default() -> Self {
        Self {
            tooth_size: 40.0,
            tooth_gap: 8.0,
            quadrant_gap: 32.0,
            row_gap: 24.0,
            margin: 16.0,
            label_font_size: 11.0,
            font_family: "Helvetica, Arial, sans-serif".to_string(),
        }
    }
}
