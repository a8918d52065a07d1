use anyhow::{Context, Result};

use crate::script::ConversionPolicy;

/// Runtime configuration loaded from environment variables.
/// Every variable is optional; only malformed values are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Locale hint for script detection (`TABLET_LOCALE`, falling back to `LANG`).
    pub locale: Option<String>,
    pub conversion_policy: ConversionPolicy,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            locale: None,
            conversion_policy: ConversionPolicy::Detect,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key → value source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let conversion_policy = match get("CONVERSION_POLICY") {
            Some(raw) => raw
                .parse::<ConversionPolicy>()
                .map_err(anyhow::Error::msg)
                .context("CONVERSION_POLICY must be one of detect, always, never")?,
            None => ConversionPolicy::default(),
        };

        Ok(Config {
            locale: get("TABLET_LOCALE").or_else(|| get("LANG")),
            conversion_policy,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
