use thiserror::Error;

/// Configuration errors raised by the template registry.
///
/// Template and area ids form a closed set known at compile time, so hitting one
/// of these means the caller and the registry disagree. They are never caused by
/// applicant input and should fail loudly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Unknown active area '{area}' in template '{template}'")]
    UnknownArea { template: String, area: String },
}

/// Failures of the Simplified→Traditional conversion engine.
///
/// These never escape `ScriptNormalizer::convert_to_traditional`; they are carried
/// inside `Conversion::Fallback` next to the original text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Conversion engine failed to initialise: {0}")]
    EngineInit(String),

    #[error("Conversion engine failed on input: {0}")]
    Invocation(String),
}
