//! Error types for the redaction core.

use thiserror::Error;

/// Result type for redaction operations.
pub type Result<T> = std::result::Result<T, RedactionError>;

/// Errors that can occur while preparing the redaction core.
///
/// Running the pipeline itself is infallible; these only surface when
/// compiling patterns or loading a lexicon.
#[derive(Error, Debug)]
pub enum RedactionError {
    /// Failed to compile a regex pattern.
    #[error("pattern error: {0}")]
    PatternError(String),

    /// The lexicon failed validation.
    #[error("lexicon error: {0}")]
    LexiconError(String),

    /// I/O error while reading a lexicon file.
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl From<intake_config::ValidationError> for RedactionError {
    fn from(err: intake_config::ValidationError) -> Self {
        RedactionError::LexiconError(err.to_string())
    }
}

impl From<RedactionError> for intake_common::Error {
    fn from(err: RedactionError) -> Self {
        match err {
            RedactionError::PatternError(msg) => intake_common::Error::Pattern(msg),
            RedactionError::LexiconError(msg) => intake_common::Error::InvalidLexicon(msg),
            RedactionError::IoError(e) => intake_common::Error::Io(e),
            RedactionError::JsonError(e) => intake_common::Error::Json(e),
        }
    }
}
