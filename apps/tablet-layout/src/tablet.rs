//! Tablet types and the text each one prints into its active areas.
//!
//! Applicant form values arrive as a flat field map. The center area carries the
//! honoree text (`preview_text`), the left column carries the applicant text
//! (`petitioner_text`). Field validation happens upstream; this module only
//! assembles strings.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LayoutError;

/// Form values keyed by field name (`name`, `father_name`, `address`, ...).
pub type FieldMap = BTreeMap<String, String>;

/// The six memorial-tablet types offered by the temple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabletType {
    /// 長生祿位, blessing for the living.
    Longevity,
    /// 往生蓮位, for someone deceased within the year.
    Deceased,
    /// 歷代祖先, family ancestors by surname.
    Ancestors,
    /// 冤親債主, karmic creditors of one person.
    KarmicCreditors,
    /// 嬰靈排位, aborted or stillborn children.
    AbortedSpirits,
    /// 地基主, guardian spirit of a house or business site.
    LandDeity,
}

impl TabletType {
    pub const ALL: [TabletType; 6] = [
        TabletType::Longevity,
        TabletType::Deceased,
        TabletType::Ancestors,
        TabletType::KarmicCreditors,
        TabletType::AbortedSpirits,
        TabletType::LandDeity,
    ];

    /// Registry key, also used on the wire.
    pub fn id(&self) -> &'static str {
        match self {
            TabletType::Longevity => "longevity",
            TabletType::Deceased => "deceased",
            TabletType::Ancestors => "ancestors",
            TabletType::KarmicCreditors => "karmic-creditors",
            TabletType::AbortedSpirits => "aborted-spirits",
            TabletType::LandDeity => "land-deity",
        }
    }

    /// Display name as printed on the tablet.
    pub fn label(&self) -> &'static str {
        match self {
            TabletType::Longevity => "長生祿位",
            TabletType::Deceased => "往生蓮位",
            TabletType::Ancestors => "歷代祖先",
            TabletType::KarmicCreditors => "冤親債主",
            TabletType::AbortedSpirits => "嬰靈排位",
            TabletType::LandDeity => "地基主",
        }
    }
}

impl fmt::Display for TabletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TabletType {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TabletType::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| LayoutError::UnknownTemplate(s.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Text composition
// ────────────────────────────────────────────────────────────────────────────

/// Returns the trimmed value of a field, or `None` if it is missing or blank.
fn field<'a>(fields: &'a FieldMap, name: &str) -> Option<&'a str> {
    fields
        .get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn join_fields(fields: &FieldMap, names: &[&str]) -> String {
    names
        .iter()
        .filter_map(|name| field(fields, name))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text for the main (center) area of a tablet.
///
/// Longevity tablets append 闔家 when the whole household is named.
pub fn preview_text(tablet: TabletType, fields: &FieldMap) -> String {
    match tablet {
        TabletType::Longevity => {
            let name = field(fields, "name").unwrap_or_default();
            let is_family = matches!(field(fields, "is_family"), Some("true" | "1"));
            if is_family {
                format!("{name}闔家")
            } else {
                name.to_string()
            }
        }
        TabletType::Deceased => join_fields(fields, &["deceased_title", "name"]),
        TabletType::Ancestors => join_fields(fields, &["surname"]),
        TabletType::KarmicCreditors | TabletType::AbortedSpirits => join_fields(fields, &["name"]),
        TabletType::LandDeity => join_fields(fields, &["address"]),
    }
}

/// Text for the applicant (left) column of a tablet.
pub fn petitioner_text(tablet: TabletType, fields: &FieldMap) -> String {
    match tablet {
        TabletType::Longevity => String::new(),
        TabletType::Deceased => join_fields(fields, &["petitioner_title", "petitioner_name"]),
        TabletType::Ancestors => join_fields(fields, &["descendant_name"]),
        TabletType::KarmicCreditors => join_fields(fields, &["name"]),
        TabletType::AbortedSpirits => {
            let mut parts = Vec::with_capacity(2);
            if let Some(father) = field(fields, "father_name") {
                parts.push(format!("父 {father}"));
            }
            if let Some(mother) = field(fields, "mother_name") {
                parts.push(format!("母 {mother}"));
            }
            parts.join(" ")
        }
        TabletType::LandDeity => join_fields(fields, &["applicant_name"]),
    }
}
