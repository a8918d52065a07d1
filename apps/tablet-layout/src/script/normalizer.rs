//! Script Normalizer: Simplified→Traditional conversion with a lazily loaded engine.
//!
//! # Engine lifecycle
//! The engine is built on first use and never torn down. Construction goes through
//! `tokio::sync::OnceCell::get_or_try_init`, so concurrent first callers share a
//! single in-flight construction and all await its result. A failed construction
//! leaves the cell empty and the next caller tries again.
//!
//! # Failure policy
//! Conversion is best-effort. Any engine failure yields `Conversion::Fallback`
//! carrying the original text; callers never see an error.

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::ConversionError;
use crate::script::detect::needs_conversion;
use crate::script::engine::{EngineLoader, ScriptEngine, TaiwanEngineLoader};

// ────────────────────────────────────────────────────────────────────────────
// Policy & outcome types
// ────────────────────────────────────────────────────────────────────────────

/// When the normalizer invokes the conversion engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConversionPolicy {
    /// Convert only when detection says so (preview and submission path).
    #[default]
    Detect,
    /// Convert every non-empty text (print path: fonts only carry Traditional glyphs).
    Always,
    /// Never convert.
    Never,
}

impl FromStr for ConversionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detect" => Ok(ConversionPolicy::Detect),
            "always" => Ok(ConversionPolicy::Always),
            "never" => Ok(ConversionPolicy::Never),
            other => Err(format!(
                "unknown conversion policy '{other}' (expected detect, always or never)"
            )),
        }
    }
}

impl fmt::Display for ConversionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConversionPolicy::Detect => "detect",
            ConversionPolicy::Always => "always",
            ConversionPolicy::Never => "never",
        })
    }
}

/// Outcome of `convert_to_traditional`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conversion {
    /// No conversion was needed; the engine was not touched.
    Unchanged(String),
    /// The engine converted the text.
    Converted(String),
    /// The engine failed; the original text is returned as-is.
    Fallback {
        original: String,
        error: ConversionError,
    },
}

impl Conversion {
    /// The text to render, whatever the outcome.
    pub fn text(&self) -> &str {
        match self {
            Conversion::Unchanged(text) | Conversion::Converted(text) => text,
            Conversion::Fallback { original, .. } => original,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Conversion::Unchanged(text) | Conversion::Converted(text) => text,
            Conversion::Fallback { original, .. } => original,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Conversion::Fallback { .. })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Normalizer
// ────────────────────────────────────────────────────────────────────────────

/// Converts applicant text to Traditional Chinese when, and only when, needed.
///
/// Share one instance (behind `Arc` or via `shared()`) so the engine is built once.
pub struct ScriptNormalizer {
    loader: Arc<dyn EngineLoader>,
    locale: Option<String>,
    policy: ConversionPolicy,
    engine: OnceCell<Arc<dyn ScriptEngine>>,
}

impl ScriptNormalizer {
    pub fn new(loader: Arc<dyn EngineLoader>) -> Self {
        Self {
            loader,
            locale: None,
            policy: ConversionPolicy::Detect,
            engine: OnceCell::new(),
        }
    }

    /// Normalizer backed by the built-in Taiwan-standard engine.
    pub fn taiwan() -> Self {
        Self::new(Arc::new(TaiwanEngineLoader))
    }

    /// Built-in engine configured from the locale and policy in `config`.
    pub fn from_config(config: &Config) -> Self {
        let normalizer = Self::taiwan().with_policy(config.conversion_policy);
        match &config.locale {
            Some(locale) => normalizer.with_locale(locale.clone()),
            None => normalizer,
        }
    }

    /// Sets the caller's locale tag (`zh-CN`, `zh-TW`, `en-US`, ...).
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_policy(mut self, policy: ConversionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn policy(&self) -> ConversionPolicy {
        self.policy
    }

    /// True once the engine has been constructed.
    pub fn is_engine_loaded(&self) -> bool {
        self.engine.initialized()
    }

    /// Whether `text` would be sent through the engine under the current policy.
    pub fn needs_conversion(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        match self.policy {
            ConversionPolicy::Detect => needs_conversion(text, self.locale()),
            ConversionPolicy::Always => true,
            ConversionPolicy::Never => false,
        }
    }

    /// Returns `text` in Traditional Chinese, loading the engine only if needed.
    pub async fn convert_to_traditional(&self, text: &str) -> Conversion {
        if !self.needs_conversion(text) {
            debug!(chars = text.chars().count(), "Script conversion skipped");
            return Conversion::Unchanged(text.to_string());
        }

        let converted = match self.engine().await {
            Ok(engine) => engine.convert(text),
            Err(error) => Err(error),
        };

        match converted {
            Ok(converted) => Conversion::Converted(converted),
            Err(error) => {
                warn!(error = %error, "Script conversion failed, keeping original text");
                Conversion::Fallback {
                    original: text.to_string(),
                    error,
                }
            }
        }
    }

    /// Gets the engine, constructing it on first use (single-flight).
    async fn engine(&self) -> Result<&Arc<dyn ScriptEngine>, ConversionError> {
        self.engine
            .get_or_try_init(|| async {
                info!("Loading Simplified→Traditional conversion engine");
                let engine = self.loader.load().await?;
                info!("Conversion engine ready");
                Ok::<_, ConversionError>(engine)
            })
            .await
    }
}

impl fmt::Debug for ScriptNormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptNormalizer")
            .field("locale", &self.locale)
            .field("policy", &self.policy)
            .field("engine_loaded", &self.is_engine_loaded())
            .finish()
    }
}

/// Process-wide normalizer configured from the environment on first access.
pub fn shared() -> &'static ScriptNormalizer {
    static SHARED: OnceLock<ScriptNormalizer> = OnceLock::new();
    SHARED.get_or_init(|| match Config::from_env() {
        Ok(config) => ScriptNormalizer::from_config(&config),
        Err(e) => {
            warn!("Invalid normalizer configuration, using defaults: {e:#}");
            ScriptNormalizer::taiwan()
        }
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
