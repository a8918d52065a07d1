//! Conversion engine seam.
//!
//! `ScriptEngine` converts text; `EngineLoader` builds one. Construction may be
//! expensive (the built-in engine compiles its phrase tables on first use), so the
//! normalizer only ever asks its loader once per process.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use zhconv::{get_builtin_converter, Variant, ZhConverter};

use crate::errors::ConversionError;

/// A ready-to-use Simplified→Traditional converter.
///
/// Implementations must not keep per-call state: one instance is shared by
/// every concurrent caller.
pub trait ScriptEngine: Send + Sync {
    fn convert(&self, text: &str) -> Result<String, ConversionError>;
}

/// Builds a conversion engine. Called at most once per `ScriptNormalizer`.
#[async_trait]
pub trait EngineLoader: Send + Sync {
    async fn load(&self) -> Result<Arc<dyn ScriptEngine>, ConversionError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Built-in engine (Taiwan standard)
// ────────────────────────────────────────────────────────────────────────────

/// Simplified→Traditional (Taiwan) converter backed by zhconv's built-in tables.
pub struct TaiwanEngine {
    converter: &'static ZhConverter,
}

impl ScriptEngine for TaiwanEngine {
    fn convert(&self, text: &str) -> Result<String, ConversionError> {
        Ok(self.converter.convert(text))
    }
}

/// Loads `TaiwanEngine`. Table construction is CPU-bound, so it runs on the
/// blocking pool instead of stalling the async executor.
#[derive(Debug, Default, Clone, Copy)]
pub struct TaiwanEngineLoader;

#[async_trait]
impl EngineLoader for TaiwanEngineLoader {
    async fn load(&self) -> Result<Arc<dyn ScriptEngine>, ConversionError> {
        let converter = tokio::task::spawn_blocking(|| get_builtin_converter(Variant::ZhTW))
            .await
            .map_err(|e| ConversionError::EngineInit(format!("table build task failed: {e}")))?;
        debug!("zh-TW conversion tables ready");
        Ok(Arc::new(TaiwanEngine { converter }))
    }
}
