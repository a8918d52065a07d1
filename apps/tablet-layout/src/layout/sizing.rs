//! Font-size selection for a text run in an active area.
//!
//! Text is stacked along the area's height. Chinese (and any non-Latin) text
//! takes one line-height per character. Latin text is estimated from an average
//! glyph width. Most names fit at the base size and are left alone; longer text
//! is scaled down proportionally, but never below half the base size.
//!
//! All intermediate math is `f32`; only the final size is floored to whole pixels.

use tracing::debug;

use crate::layout::templates::ActiveArea;

/// Average glyph width as a fraction of the font size, for Latin text.
pub const LATIN_GLYPH_WIDTH_RATIO: f32 = 0.7;

/// Smallest allowed size as a fraction of the area's base font size.
pub const MIN_SCALE: f32 = 0.5;

/// True if the text contains at least one ASCII letter.
///
/// Mixed text such as "陳 John" is treated as Latin as a whole.
pub fn is_latin_script(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

/// Span the text needs along the area's height when set at the base size.
pub fn required_span(text: &str, area: &ActiveArea) -> f32 {
    let count = text.chars().count() as f32;
    if is_latin_script(text) {
        count * LATIN_GLYPH_WIDTH_RATIO * area.font_size as f32
    } else {
        count * area.line_height as f32
    }
}

/// The largest size (capped at the base size) at which the text fits the area,
/// without the legibility floor and without rounding.
pub fn fit_font_size(text: &str, area: &ActiveArea) -> f32 {
    let base = area.font_size as f32;
    let required = required_span(text, area);
    let available = area.height as f32;
    if required <= available {
        base
    } else {
        base * available / required
    }
}

/// Chooses the font size for `text` in `area`.
///
/// Returns `area.font_size` unchanged when the text fits; otherwise the
/// proportional size, clamped to `MIN_SCALE` of the base and floored.
pub fn calculate_font_size(text: &str, area: &ActiveArea) -> u32 {
    let base = area.font_size as f32;
    let fit = fit_font_size(text, area);
    if fit >= base {
        return area.font_size;
    }

    let size = fit.max(base * MIN_SCALE).floor() as u32;
    debug!(
        area = area.id,
        chars = text.chars().count(),
        latin = is_latin_script(text),
        base = area.font_size,
        size,
        "Scaled text down to fit active area"
    );
    size
}
