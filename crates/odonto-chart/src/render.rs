//! Mapping from tooth state to chart graphics.
//!
//! Everything here is a pure function of `(ToothNumber, ToothCondition)`.
//! Adding a condition is a compile error until every match below handles it.

use odonto_core::models::tooth::{ToothCondition, ToothNumber};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Side length of the square every tooth glyph is drawn in.
pub const TOOTH_VIEWBOX: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ToothShape {
    Incisor,
    Canine,
    Premolar,
    Molar,
    ExtractedMarker,
}

impl ToothShape {
    /// Shape category from the position digit; extracted teeth always draw
    /// the marker.
    pub fn for_tooth(number: ToothNumber, condition: ToothCondition) -> Self {
        if condition == ToothCondition::Extracted {
            return ToothShape::ExtractedMarker;
        }
        match number.position() {
            1 | 2 => ToothShape::Incisor,
            3 => ToothShape::Canine,
            4 | 5 => ToothShape::Premolar,
            _ => ToothShape::Molar,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Palette {
    pub fill: &'static str,
    pub stroke: &'static str,
}

pub fn palette(condition: ToothCondition) -> Palette {
    let (fill, stroke) = match condition {
        ToothCondition::Healthy => ("#ffffff", "#d1d5db"),
        ToothCondition::Caries => ("#ef4444", "#dc2626"),
        ToothCondition::RootCanalTreated => ("#8b5cf6", "#7c3aed"),
        ToothCondition::Extracted => ("#64748b", "#475569"),
        ToothCondition::Implant => ("#06b6d4", "#0891b2"),
        ToothCondition::Crown => ("#f59e0b", "#d97706"),
    };
    Palette { fill, stroke }
}

/// One row of the chart legend.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct LegendItem {
    pub condition: ToothCondition,
    pub label: &'static str,
    pub description: &'static str,
    pub palette: Palette,
}

pub fn legend() -> Vec<LegendItem> {
    [
        ToothCondition::Healthy,
        ToothCondition::Caries,
        ToothCondition::RootCanalTreated,
        ToothCondition::Crown,
        ToothCondition::Implant,
        ToothCondition::Extracted,
    ]
    .into_iter()
    .map(|condition| LegendItem {
        condition,
        label: condition.label(),
        description: condition.description(),
        palette: palette(condition),
    })
    .collect()
}

/// SVG group for one tooth, drawn in a `0 0 40 40` box.
pub fn tooth_svg(number: ToothNumber, condition: ToothCondition) -> String {
    let Palette { fill, stroke } = palette(condition);
    let mut out = String::from("<g class=\"tooth\">");
    out.push_str(&format!(
        "<title>Tooth {number} - {}</title>",
        condition.label()
    ));

    match ToothShape::for_tooth(number, condition) {
        ToothShape::ExtractedMarker => {
            out.push_str(&format!(
                "<rect x=\"2\" y=\"2\" width=\"36\" height=\"36\" rx=\"4\" fill=\"#f3f4f6\" \
                 stroke=\"{stroke}\" stroke-width=\"2\" stroke-dasharray=\"4,4\"/>"
            ));
            out.push_str(&format!(
                "<path d=\"M12 12 L28 28 M28 12 L12 28\" stroke=\"{stroke}\" \
                 stroke-width=\"3\" stroke-linecap=\"round\"/>"
            ));
        }
        ToothShape::Incisor => {
            out.push_str(&format!(
                "<rect x=\"8\" y=\"4\" width=\"24\" height=\"32\" rx=\"6\" ry=\"4\" \
                 fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"2\"/>"
            ));
        }
        ToothShape::Canine => {
            out.push_str(&format!(
                "<path d=\"M20 4 L32 36 L8 36 Z\" fill=\"{fill}\" stroke=\"{stroke}\" \
                 stroke-width=\"2\" stroke-linejoin=\"round\"/>"
            ));
        }
        ToothShape::Premolar => {
            out.push_str(&format!(
                "<rect x=\"6\" y=\"6\" width=\"28\" height=\"28\" rx=\"4\" \
                 fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"2\"/>"
            ));
            out.push_str(&cusp_line(20, 6, 20, 34, stroke));
        }
        ToothShape::Molar => {
            out.push_str(&format!(
                "<rect x=\"4\" y=\"4\" width=\"32\" height=\"32\" rx=\"6\" \
                 fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"2\"/>"
            ));
            out.push_str(&cusp_line(20, 4, 20, 36, stroke));
            out.push_str(&cusp_line(4, 20, 36, 20, stroke));
        }
    }

    match condition {
        ToothCondition::Implant => out.push_str(
            "<circle cx=\"20\" cy=\"20\" r=\"3\" fill=\"#ffffff\" stroke=\"#0891b2\" stroke-width=\"2\"/>",
        ),
        ToothCondition::Crown => out.push_str(
            "<path d=\"M12 8 L28 8 L30 12 L26 16 L14 16 L10 12 Z\" fill=\"#fbbf24\" \
             stroke=\"#d97706\" stroke-width=\"1\"/>",
        ),
        ToothCondition::RootCanalTreated => out.push_str(
            "<line x1=\"20\" y1=\"8\" x2=\"20\" y2=\"32\" stroke=\"#ffffff\" \
             stroke-width=\"2\" stroke-linecap=\"round\"/>",
        ),
        ToothCondition::Healthy | ToothCondition::Caries | ToothCondition::Extracted => {}
    }

    out.push_str("</g>");
    out
}

fn cusp_line(x1: u32, y1: u32, x2: u32, y2: u32, stroke: &str) -> String {
    format!(
        "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" stroke=\"{stroke}\" \
         stroke-width=\"1\" opacity=\"0.5\"/>"
    )
}
