// Memorial-tablet text layout: script normalization plus font sizing and glyph
// placement on fixed-size tablet templates. Produces layout parameters only; the
// rasterizer, PDF assembly and persistence live elsewhere.

pub mod config;
pub mod errors;
pub mod layout;
pub mod plan;
pub mod script;
pub mod tablet;

pub use errors::{ConversionError, LayoutError};
pub use layout::{
    calculate_font_size, get_template_config, is_latin_script, layout_columns,
    layout_vertical_text, resolve_area, ActiveArea, LayoutResult, TemplateConfig,
};
pub use plan::{plan_tablet, TabletPlan};
pub use script::{needs_conversion, Conversion, ConversionPolicy, ScriptNormalizer};
pub use tablet::TabletType;
