//! Tablet rendering plan: everything the external compositor needs for one tablet.
//!
//! Sequence per area: compose text from the form → normalize script → lay out.
//! The normalizer and the layout engine never call each other; this module
//! drives them in order.

use serde::Serialize;
use tracing::{debug, info};

use crate::layout::{layout_columns, template_for, AreaPurpose, ColumnLayout};
use crate::script::ScriptNormalizer;
use crate::tablet::{petitioner_text, preview_text, FieldMap, TabletType};

/// Layout of the normalized text in one active area.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaPlan {
    pub area_id: &'static str,
    pub purpose: AreaPurpose,
    /// Text after script normalization.
    pub text: String,
    /// True if conversion was needed but failed and the original text is used.
    pub conversion_fallback: bool,
    pub layout: ColumnLayout,
}

/// Render plan for one tablet: canvas size plus every non-empty area.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabletPlan {
    pub template_id: TabletType,
    pub label: &'static str,
    pub svg_width: u32,
    pub svg_height: u32,
    pub areas: Vec<AreaPlan>,
}

/// Builds the render plan for a tablet from its form fields.
///
/// Areas whose composed text is empty are left out.
pub async fn plan_tablet(
    normalizer: &ScriptNormalizer,
    tablet: TabletType,
    fields: &FieldMap,
) -> TabletPlan {
    let template = template_for(tablet);
    let mut areas = Vec::with_capacity(template.active_areas.len());

    for area in template.active_areas {
        let (raw, multi_column) = match area.purpose {
            AreaPurpose::Main => (preview_text(tablet, fields), template.allows_multi_column()),
            AreaPurpose::Applicant => (petitioner_text(tablet, fields), false),
        };
        if raw.is_empty() {
            debug!(tablet = %tablet, area = area.id, "No text for area, skipping");
            continue;
        }

        let conversion = normalizer.convert_to_traditional(&raw).await;
        let conversion_fallback = conversion.is_fallback();
        let text = conversion.into_text();
        let layout = layout_columns(&text, area, multi_column);

        areas.push(AreaPlan {
            area_id: area.id,
            purpose: area.purpose,
            text,
            conversion_fallback,
            layout,
        });
    }

    info!(tablet = %tablet, areas = areas.len(), "Tablet plan ready");

    TabletPlan {
        template_id: tablet,
        label: tablet.label(),
        svg_width: template.svg_width,
        svg_height: template.svg_height,
        areas,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::errors::ConversionError;
    use crate::script::{EngineLoader, ScriptEngine};

    struct UnavailableLoader;

    #[async_trait]
    impl EngineLoader for UnavailableLoader {
        async fn load(&self) -> Result<Arc<dyn ScriptEngine>, ConversionError> {
            Err(ConversionError::EngineInit("offline".to_string()))
        }
    }

    fn fields(pairs: &[(&str, &str)]) -> FieldMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_longevity_plan_converts_and_centers_name() {
        let normalizer = ScriptNormalizer::taiwan();
        let plan = plan_tablet(
            &normalizer,
            TabletType::Longevity,
            &fields(&[("name", "刘德华")]),
        )
        .await;

        assert_eq!(plan.label, "長生祿位");
        assert_eq!((plan.svg_width, plan.svg_height), (320, 848));
        assert_eq!(plan.areas.len(), 1);

        let center = &plan.areas[0];
        assert_eq!(center.area_id, "center");
        assert_eq!(center.text, "劉德華");
        assert!(!center.conversion_fallback);
        assert_eq!(center.layout.font_size, 42);
        assert_eq!(center.layout.columns[0].start_y, 312.0 + (300.0 - 126.0) / 2.0);
    }

    #[tokio::test]
    async fn test_aborted_spirits_fills_both_areas() {
        let normalizer = ScriptNormalizer::taiwan();
        let plan = plan_tablet(
            &normalizer,
            TabletType::AbortedSpirits,
            &fields(&[
                ("name", "故兒妙音"),
                ("father_name", "陳明"),
                ("mother_name", "李華"),
            ]),
        )
        .await;

        let ids: Vec<_> = plan.areas.iter().map(|a| a.area_id).collect();
        assert_eq!(ids, vec!["center", "left-applicant"]);
        assert_eq!(plan.areas[1].text, "父 陳明 母 李華");
        assert_eq!(plan.areas[1].purpose, AreaPurpose::Applicant);
    }

    #[tokio::test]
    async fn test_land_deity_long_address_splits_columns() {
        let normalizer = ScriptNormalizer::taiwan();
        let plan = plan_tablet(
            &normalizer,
            TabletType::LandDeity,
            &fields(&[
                ("address", "中國福建省福州市蘭花區向陽橋路1009號之地基主"),
                ("applicant_name", "John Smith"),
            ]),
        )
        .await;

        assert_eq!(plan.areas[0].layout.columns.len(), 2);
        assert_eq!(plan.areas[1].layout.columns.len(), 1);
    }

    #[tokio::test]
    async fn test_karmic_creditors_uses_left_column_only() {
        let normalizer = ScriptNormalizer::taiwan();
        let plan = plan_tablet(
            &normalizer,
            TabletType::KarmicCreditors,
            &fields(&[("name", "李美華")]),
        )
        .await;
        assert_eq!(plan.areas.len(), 1);
        assert_eq!(plan.areas[0].area_id, "left-applicant");
        assert_eq!(plan.areas[0].layout.font_size, 20);
    }

    #[tokio::test]
    async fn test_empty_areas_are_skipped() {
        let normalizer = ScriptNormalizer::taiwan();
        let plan = plan_tablet(
            &normalizer,
            TabletType::Deceased,
            &fields(&[("name", "王大明")]),
        )
        .await;
        assert_eq!(plan.areas.len(), 1);
        assert_eq!(plan.areas[0].area_id, "center");
    }

    #[tokio::test]
    async fn test_conversion_failure_still_produces_plan() {
        let normalizer = ScriptNormalizer::new(Arc::new(UnavailableLoader));
        let plan = plan_tablet(
            &normalizer,
            TabletType::Longevity,
            &fields(&[("name", "长生")]),
        )
        .await;
        assert_eq!(plan.areas[0].text, "长生");
        assert!(plan.areas[0].conversion_fallback);
        assert_eq!(plan.areas[0].layout.font_size, 42);
    }

    #[tokio::test]
    async fn test_plan_serializes_for_renderer() {
        let normalizer = ScriptNormalizer::taiwan();
        let plan = plan_tablet(
            &normalizer,
            TabletType::Ancestors,
            &fields(&[("surname", "陳")]),
        )
        .await;
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["templateId"], "ancestors");
        assert_eq!(json["svgHeight"], 848);
        assert_eq!(json["areas"][0]["areaId"], "center");
        assert_eq!(json["areas"][0]["layout"]["columns"][0]["fontSize"], 42);
    }
}
