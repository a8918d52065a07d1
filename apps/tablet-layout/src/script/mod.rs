// Script Normalizer: detection of Simplified Chinese input and lazy, single-flight
// conversion to Traditional Chinese (Taiwan standard).

pub mod detect;
pub mod engine;
pub mod normalizer;

pub use detect::{is_simplified_locale, needs_conversion};
pub use engine::{EngineLoader, ScriptEngine, TaiwanEngineLoader};
pub use normalizer::{shared, Conversion, ConversionPolicy, ScriptNormalizer};
