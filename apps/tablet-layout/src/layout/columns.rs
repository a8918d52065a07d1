//! Multi-column split for long center text (baby memorial names, site addresses).
//!
//! A single column is kept whenever the text fits at a readable size. Past that
//! point the characters are chunked into 2, then 3, evenly sized columns, and the
//! split whose tallest column fits at the largest size wins. Columns read right
//! to left.

use serde::Serialize;
use tracing::debug;

use crate::layout::sizing::{calculate_font_size, fit_font_size, is_latin_script};
use crate::layout::templates::ActiveArea;
use crate::layout::vertical::{layout_vertical_text, place_column, LayoutResult};

/// Below this natural size a single column is considered hard to read.
pub const MIN_READABLE_SIZE: f32 = 20.0;

/// Upper bound on the number of columns a text may be split into.
pub const MAX_COLUMNS: usize = 3;

/// One or more columns sharing a font size, ordered right to left.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnLayout {
    pub font_size: u32,
    pub columns: Vec<LayoutResult>,
}

impl ColumnLayout {
    fn single(result: LayoutResult) -> Self {
        Self {
            font_size: result.font_size,
            columns: vec![result],
        }
    }
}

/// Splits `chars` into `count` chunks of `ceil(len / count)` characters.
fn chunk_text(chars: &[char], count: usize) -> Vec<String> {
    let per_column = chars.len().div_ceil(count);
    chars
        .chunks(per_column.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Lays out `text` in `area`, splitting into columns when allowed and needed.
///
/// Latin text and areas without multi-column support fall back to
/// `layout_vertical_text`.
pub fn layout_columns(text: &str, area: &ActiveArea, allow_multi_column: bool) -> ColumnLayout {
    let single = layout_vertical_text(text, area);
    if !allow_multi_column
        || is_latin_script(text)
        || fit_font_size(text, area) >= MIN_READABLE_SIZE
    {
        return ColumnLayout::single(single);
    }

    let chars: Vec<char> = text.chars().collect();
    let mut best_fit = fit_font_size(text, area);
    let mut best_split: Option<Vec<String>> = None;

    // Splits are compared on their natural size; the tallest column decides.
    for count in 2..=MAX_COLUMNS.min(chars.len()) {
        let split = chunk_text(&chars, count);
        let fit = split
            .iter()
            .map(|column| fit_font_size(column, area))
            .fold(f32::INFINITY, f32::min);

        if fit > best_fit {
            best_fit = fit;
            best_split = Some(split);
        }
        if count == 2 && best_fit >= MIN_READABLE_SIZE {
            break;
        }
    }

    let Some(split) = best_split else {
        return ColumnLayout::single(single);
    };
    let best_size = split
        .iter()
        .map(|column| calculate_font_size(column, area))
        .min()
        .unwrap_or(single.font_size);

    debug!(
        area = area.id,
        columns = split.len(),
        font_size = best_size,
        "Split text into columns"
    );

    let slot_width = area.width as f32 / split.len() as f32;
    let last = split.len() - 1;
    let columns = split
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let slot = (last - i) as f32;
            let center_x = area.x as f32 + slot_width * (slot + 0.5);
            place_column(column, area, best_size, center_x)
        })
        .collect();

    ColumnLayout {
        font_size: best_size,
        columns,
    }
}
