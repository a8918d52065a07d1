//! Static template registry: canvas size and active areas per tablet type.
//!
//! Coordinates are pixels on the 320 × 848 template canvas, origin top-left.
//! Center areas sit between the fixed header and footer inscriptions with 6px of
//! padding on each side; left areas sit between 陽上 and 敬薦 (or 叩薦).
//! All records are immutable and looked up by template id.

use serde::Serialize;

use crate::errors::LayoutError;
use crate::tablet::TabletType;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Semantic role of an active area. Does not affect geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AreaPurpose {
    /// Honoree text: the name, surname or address the tablet is for.
    Main,
    /// The applicant or descendant who requests the tablet.
    Applicant,
}

/// A rectangle on the template canvas that receives dynamic text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveArea {
    pub id: &'static str,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub purpose: AreaPurpose,
    /// Base (unscaled) font size in pixels.
    pub font_size: u32,
    /// Base advance per stacked character in pixels.
    pub line_height: u32,
}

/// Canvas dimensions plus the active areas of one tablet type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    pub template_id: TabletType,
    pub svg_width: u32,
    pub svg_height: u32,
    pub active_areas: &'static [ActiveArea],
}

impl TemplateConfig {
    /// Looks up an active area by id.
    pub fn area(&self, id: &str) -> Result<&'static ActiveArea, LayoutError> {
        self.active_areas
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| LayoutError::UnknownArea {
                template: self.template_id.id().to_string(),
                area: id.to_string(),
            })
    }

    /// Whether long center text may be split into several vertical columns.
    ///
    /// Only the free-form templates (baby memorial names, site addresses) allow it.
    pub fn allows_multi_column(&self) -> bool {
        matches!(
            self.template_id,
            TabletType::AbortedSpirits | TabletType::LandDeity
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared geometry
// ────────────────────────────────────────────────────────────────────────────

pub const CENTER_AREA_ID: &str = "center";
pub const LEFT_APPLICANT_AREA_ID: &str = "left-applicant";

const SVG_WIDTH: u32 = 320;
const SVG_HEIGHT: u32 = 848;

/// Center column: y 312 to 612 (header bottom 306 + 6, footer top 618 - 6).
const CENTER_AREA: ActiveArea = ActiveArea {
    id: CENTER_AREA_ID,
    x: 45,
    y: 312,
    width: 230,
    height: 300,
    purpose: AreaPurpose::Main,
    font_size: 42,
    line_height: 42,
};

/// Narrow left column: x 8 to 58, y 350 to 670.
const LEFT_APPLICANT_AREA: ActiveArea = ActiveArea {
    id: LEFT_APPLICANT_AREA_ID,
    x: 8,
    y: 350,
    width: 50,
    height: 320,
    purpose: AreaPurpose::Applicant,
    font_size: 20,
    line_height: 20,
};

// ────────────────────────────────────────────────────────────────────────────
// Templates
// ────────────────────────────────────────────────────────────────────────────

static LONGEVITY_TEMPLATE: TemplateConfig = TemplateConfig {
    template_id: TabletType::Longevity,
    svg_width: SVG_WIDTH,
    svg_height: SVG_HEIGHT,
    active_areas: &[CENTER_AREA],
};

static DECEASED_TEMPLATE: TemplateConfig = TemplateConfig {
    template_id: TabletType::Deceased,
    svg_width: SVG_WIDTH,
    svg_height: SVG_HEIGHT,
    active_areas: &[CENTER_AREA, LEFT_APPLICANT_AREA],
};

/// Center holds the surname only, ending above 氏歷代祖先 at y 490.
/// The left column starts lower, below 陽上後裔.
static ANCESTORS_TEMPLATE: TemplateConfig = TemplateConfig {
    template_id: TabletType::Ancestors,
    svg_width: SVG_WIDTH,
    svg_height: SVG_HEIGHT,
    active_areas: &[
        ActiveArea {
            height: 178,
            ..CENTER_AREA
        },
        ActiveArea {
            y: 370,
            height: 300,
            ..LEFT_APPLICANT_AREA
        },
    ],
};

/// The center inscription is printed into the template; only the applicant varies.
static KARMIC_CREDITORS_TEMPLATE: TemplateConfig = TemplateConfig {
    template_id: TabletType::KarmicCreditors,
    svg_width: SVG_WIDTH,
    svg_height: SVG_HEIGHT,
    active_areas: &[LEFT_APPLICANT_AREA],
};

static ABORTED_SPIRITS_TEMPLATE: TemplateConfig = TemplateConfig {
    template_id: TabletType::AbortedSpirits,
    svg_width: SVG_WIDTH,
    svg_height: SVG_HEIGHT,
    active_areas: &[CENTER_AREA, LEFT_APPLICANT_AREA],
};

static LAND_DEITY_TEMPLATE: TemplateConfig = TemplateConfig {
    template_id: TabletType::LandDeity,
    svg_width: SVG_WIDTH,
    svg_height: SVG_HEIGHT,
    active_areas: &[CENTER_AREA, LEFT_APPLICANT_AREA],
};

/// Returns the static template for a tablet type.
pub fn template_for(tablet: TabletType) -> &'static TemplateConfig {
    match tablet {
        TabletType::Longevity => &LONGEVITY_TEMPLATE,
        TabletType::Deceased => &DECEASED_TEMPLATE,
        TabletType::Ancestors => &ANCESTORS_TEMPLATE,
        TabletType::KarmicCreditors => &KARMIC_CREDITORS_TEMPLATE,
        TabletType::AbortedSpirits => &ABORTED_SPIRITS_TEMPLATE,
        TabletType::LandDeity => &LAND_DEITY_TEMPLATE,
    }
}

/// Looks up a template by its string id. Unknown ids are a configuration error.
pub fn get_template_config(template_id: &str) -> Result<&'static TemplateConfig, LayoutError> {
    template_id.parse::<TabletType>().map(template_for)
}

/// Resolves `(template_id, area_id)` to an active area in one step.
pub fn resolve_area(template_id: &str, area_id: &str) -> Result<&'static ActiveArea, LayoutError> {
    get_template_config(template_id)?.area(area_id)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
