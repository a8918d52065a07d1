//! Vertical placement: turns a chosen font size into per-glyph coordinates.
//!
//! A text block is one centered column. Each character is a stacked unit that
//! advances by the scaled line height. The block is vertically centered in the
//! area; text that still overflows at the minimum size spills past both edges
//! evenly instead of being rejected.

use serde::Serialize;
use tracing::warn;

use crate::layout::sizing::{calculate_font_size, is_latin_script};
use crate::layout::templates::ActiveArea;

/// How the external renderer should draw the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    /// Latin text drawn as a single rotated run along the column.
    SingleLine,
    /// One upright glyph per row, top to bottom.
    VerticalColumn,
}

/// Where to draw one character. `x` is the glyph's horizontal center, `y` its top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlyphPlacement {
    pub ch: char,
    pub x: f32,
    pub y: f32,
}

/// Layout parameters for one text run in one active area.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    pub font_size: u32,
    pub line_height: f32,
    pub total_height: f32,
    pub start_y: f32,
    pub center_x: f32,
    pub mode: LayoutMode,
    pub glyphs: Vec<GlyphPlacement>,
}

impl LayoutResult {
    /// True when the block is taller than the area it was laid out in.
    pub fn overflows(&self, area: &ActiveArea) -> bool {
        self.total_height > area.height as f32
    }
}

/// Lays out `text` as a single centered column in `area`.
pub fn layout_vertical_text(text: &str, area: &ActiveArea) -> LayoutResult {
    let font_size = calculate_font_size(text, area);
    let center_x = area.x as f32 + area.width as f32 / 2.0;
    place_column(text, area, font_size, center_x)
}

/// Places a column at a fixed font size and horizontal center.
pub(crate) fn place_column(
    text: &str,
    area: &ActiveArea,
    font_size: u32,
    center_x: f32,
) -> LayoutResult {
    let line_height = font_size as f32 * area.line_height as f32 / area.font_size as f32;
    let total_height = text.chars().count() as f32 * line_height;
    let start_y = area.y as f32 + (area.height as f32 - total_height) / 2.0;

    let mode = if is_latin_script(text) {
        LayoutMode::SingleLine
    } else {
        LayoutMode::VerticalColumn
    };

    let glyphs = text
        .chars()
        .enumerate()
        .map(|(i, ch)| GlyphPlacement {
            ch,
            x: center_x,
            y: start_y + i as f32 * line_height,
        })
        .collect();

    let result = LayoutResult {
        font_size,
        line_height,
        total_height,
        start_y,
        center_x,
        mode,
        glyphs,
    };

    if mode == LayoutMode::VerticalColumn && result.overflows(area) {
        warn!(
            area = area.id,
            total_height,
            available = area.height,
            font_size,
            "Text overflows active area at minimum font size"
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::templates::{resolve_area, AreaPurpose};

    fn center_area() -> ActiveArea {
        ActiveArea {
            id: "center",
            x: 45,
            y: 312,
            width: 230,
            height: 300,
            purpose: AreaPurpose::Main,
            font_size: 42,
            line_height: 42,
        }
    }

    #[test]
    fn test_two_char_name_scenario() {
        let result = layout_vertical_text("王明", &center_area());
        assert_eq!(result.font_size, 42);
        assert_eq!(result.line_height, 42.0);
        assert_eq!(result.total_height, 84.0);
        assert_eq!(result.start_y, 420.0);
        assert_eq!(result.center_x, 160.0);
        assert_eq!(result.mode, LayoutMode::VerticalColumn);
    }

    #[test]
    fn test_glyphs_stack_from_start_y() {
        let result = layout_vertical_text("陳小華", &center_area());
        let ys: Vec<f32> = result.glyphs.iter().map(|g| g.y).collect();
        assert_eq!(ys, vec![result.start_y, result.start_y + 42.0, result.start_y + 84.0]);
        assert!(result.glyphs.iter().all(|g| g.x == 160.0));
        let chars: String = result.glyphs.iter().map(|g| g.ch).collect();
        assert_eq!(chars, "陳小華");
    }

    #[test]
    fn test_line_height_scales_with_font_size() {
        let area = ActiveArea {
            line_height: 50,
            ..center_area()
        };
        // 10 × 50 = 500 > 300 → floor(42 × 300 / 500) = 25
        let result = layout_vertical_text(&"蓮".repeat(10), &area);
        assert_eq!(result.font_size, 25);
        assert!((result.line_height - 25.0 / 42.0 * 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_block_is_vertically_centered_when_it_fits() {
        let area = center_area();
        for n in 1..=12 {
            let result = layout_vertical_text(&"福".repeat(n), &area);
            assert!(!result.overflows(&area));
            let block_mid = result.start_y + result.total_height / 2.0;
            let area_mid = area.y as f32 + area.height as f32 / 2.0;
            assert!((block_mid - area_mid).abs() < 1e-3, "n={n}");
        }
    }

    #[test]
    fn test_center_x_independent_of_text() {
        let area = resolve_area("deceased", "left-applicant").unwrap();
        let long = "長".repeat(40);
        for text in ["", "陳", "John Smith", long.as_str()] {
            assert_eq!(layout_vertical_text(text, area).center_x, 33.0);
        }
    }

    #[test]
    fn test_pathological_text_overflows_symmetrically() {
        let area = center_area();
        let result = layout_vertical_text(&"壽".repeat(30), &area);
        assert_eq!(result.font_size, 21);
        assert_eq!(result.total_height, 630.0);
        assert!(result.overflows(&area));
        assert_eq!(result.start_y, 312.0 + (300.0 - 630.0) / 2.0);
    }

    #[test]
    fn test_latin_text_is_single_line_mode() {
        let result = layout_vertical_text("Christopher Nolan", &center_area());
        assert_eq!(result.mode, LayoutMode::SingleLine);
        assert_eq!(result.font_size, 25);
        assert_eq!(result.glyphs.len(), 17);
    }

    #[test]
    fn test_empty_text_has_no_glyphs() {
        let result = layout_vertical_text("", &center_area());
        assert!(result.glyphs.is_empty());
        assert_eq!(result.total_height, 0.0);
        assert_eq!(result.start_y, 462.0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = layout_vertical_text("王明", &center_area());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["fontSize"], 42);
        assert_eq!(json["startY"], 420.0);
        assert_eq!(json["mode"], "vertical-column");
    }
}
