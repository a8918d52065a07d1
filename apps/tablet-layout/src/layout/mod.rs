// Layout engine: font sizing and glyph placement on fixed-size tablet templates.
// Pure functions of (text, area); safe to call from any number of tasks at once.

pub mod columns;
pub mod sizing;
pub mod templates;
pub mod vertical;

// Re-export the public API consumed by the tablet planner and the preview binary.
pub use columns::{layout_columns, ColumnLayout};
pub use sizing::{calculate_font_size, is_latin_script};
pub use templates::{
    get_template_config, resolve_area, template_for, ActiveArea, AreaPurpose, TemplateConfig,
};
pub use vertical::{layout_vertical_text, GlyphPlacement, LayoutMode, LayoutResult};
