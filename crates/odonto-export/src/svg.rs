use odonto_chart::ToothStatusStore;
use odonto_chart::catalog::catalog;
use odonto_chart::render::{TOOTH_VIEWBOX, tooth_svg};

use crate::styles::OdontogramStyle;

/// Render the whole chart as a standalone SVG document.
///
/// The upper row carries its labels above the teeth and the lower row below,
/// so the numbers frame the occlusal plane.
pub fn render_odontogram(store: &ToothStatusStore, style: &OdontogramStyle) -> String {
    let [upper, lower] = catalog(store.scheme()).display_rows();
    let per_row = upper.len().max(lower.len());
    let half = per_row / 2;

    let label_band = style.label_font_size + 6.0;
    let row_width = per_row as f64 * style.tooth_size
        + (per_row.saturating_sub(1)) as f64 * style.tooth_gap
        + style.quadrant_gap;
    let width = row_width + 2.0 * style.margin;
    let height = 2.0 * (style.tooth_size + label_band) + style.row_gap + 2.0 * style.margin;
    let scale = style.tooth_size / f64::from(TOOTH_VIEWBOX);

    let x_of = |i: usize| {
        let midline = if i >= half { style.quadrant_gap } else { 0.0 };
        style.margin + i as f64 * (style.tooth_size + style.tooth_gap) + midline
    };

    let mut out = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\" font-family=\"{}\" font-size=\"{}\">",
        style.font_family, style.label_font_size
    );
    out.push_str(&format!(
        "<title>Odontogram ({}, {} teeth)</title>",
        store.scheme(),
        store.len()
    ));

    let upper_label_y = style.margin + style.label_font_size;
    let upper_tooth_y = style.margin + label_band;
    let lower_tooth_y = upper_tooth_y + style.tooth_size + style.row_gap;
    let lower_label_y = lower_tooth_y + style.tooth_size + style.label_font_size + 2.0;

    for (row, tooth_y, label_y) in [
        (&upper, upper_tooth_y, upper_label_y),
        (&lower, lower_tooth_y, lower_label_y),
    ] {
        for (i, number) in row.iter().enumerate() {
            let tooth = store.get(*number);
            let x = x_of(i);
            out.push_str(&format!(
                "<text x=\"{}\" y=\"{label_y}\" text-anchor=\"middle\" fill=\"#6b7280\">{number}</text>",
                x + style.tooth_size / 2.0
            ));
            out.push_str(&format!(
                "<g transform=\"translate({x} {tooth_y}) scale({scale})\" data-tooth=\"{number}\" \
                 data-status=\"{}\">",
                tooth.status
            ));
            out.push_str(&tooth_svg(*number, tooth.status));
            out.push_str("</g>");
        }
    }

    let midline_x = x_of(half) - (style.quadrant_gap + style.tooth_gap) / 2.0;
    let occlusal_y = upper_tooth_y + style.tooth_size + style.row_gap / 2.0;
    out.push_str(&format!(
        "<line x1=\"{midline_x}\" y1=\"{}\" x2=\"{midline_x}\" y2=\"{}\" stroke=\"#e5e7eb\"/>",
        style.margin,
        height - style.margin
    ));
    out.push_str(&format!(
        "<line x1=\"{}\" y1=\"{occlusal_y}\" x2=\"{}\" y2=\"{occlusal_y}\" stroke=\"#e5e7eb\"/>",
        style.margin,
        width - style.margin
    ));

    out.push_str("</svg>");
    out
}
