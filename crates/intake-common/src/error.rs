//! Error types for case intake.
//!
//! This module provides structured error handling with:
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//! - Recoverability hints for automation
//! - Remediation suggestions for humans
//!
//! # Human-Facing Output
//!
//! ```text
//! ✗ Invalid Lexicon
//!   Reason: invalid lexicon file: urgent_keywords must not be empty
//!   Fix: Run 'intake check' to validate, or remove the file to use built-in defaults
//! ```
//!
//! # Machine-Facing Output
//!
//! ```json
//! {
//!   "code": 11,
//!   "category": "config",
//!   "message": "invalid lexicon file: urgent_keywords must not be empty",
//!   "recoverable": true,
//!   "suggested_action": "run_check"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Result type alias for case intake operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Lexicon or configuration file errors.
    Config,
    /// Built-in pattern compilation errors.
    Pattern,
    /// File I/O, input decoding and serialization errors.
    Io,
    /// Errors talking to the external categorization service.
    Transport,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Pattern => write!(f, "pattern"),
            ErrorCategory::Io => write!(f, "io"),
            ErrorCategory::Transport => write!(f, "transport"),
        }
    }
}

/// Suggested actions for automation to take in response to errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedAction {
    /// Retry the operation (possibly with backoff).
    Retry,
    /// Remove the custom lexicon and use built-in defaults.
    ResetConfig,
    /// Run the validation command.
    RunCheck,
    /// Skip the optional step and continue.
    Skip,
    /// Abort the operation.
    Abort,
    /// Manual intervention required.
    ManualIntervention,
}

impl std::fmt::Display for SuggestedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestedAction::Retry => write!(f, "retry"),
            SuggestedAction::ResetConfig => write!(f, "reset_config"),
            SuggestedAction::RunCheck => write!(f, "run_check"),
            SuggestedAction::Skip => write!(f, "skip"),
            SuggestedAction::Abort => write!(f, "abort"),
            SuggestedAction::ManualIntervention => write!(f, "manual_intervention"),
        }
    }
}

/// Unified error type for case intake.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid lexicon file: {0}")]
    InvalidLexicon(String),

    #[error("schema validation failed: {0}")]
    SchemaValidation(String),

    // Pattern errors (20-29)
    #[error("redaction pattern failed to compile: {0}")]
    Pattern(String),

    // I/O errors (30-39)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("input is not valid UTF-8")]
    InvalidInput,

    // Transport errors (40-49)
    #[error("categorization request failed: {0}")]
    Transport(String),

    #[error("categorization response malformed: {0}")]
    MalformedResponse(String),
}

impl Error {
    /// Returns the error code for this error type.
    ///
    /// Error codes are stable and grouped by category:
    /// - 10-19: Configuration errors
    /// - 20-29: Pattern errors
    /// - 30-39: I/O errors
    /// - 40-49: Transport errors
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidLexicon(_) => 11,
            Error::SchemaValidation(_) => 12,
            Error::Pattern(_) => 20,
            Error::Io(_) => 30,
            Error::Json(_) => 31,
            Error::InvalidInput => 32,
            Error::Transport(_) => 40,
            Error::MalformedResponse(_) => 41,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_) | Error::InvalidLexicon(_) | Error::SchemaValidation(_) => {
                ErrorCategory::Config
            }
            Error::Pattern(_) => ErrorCategory::Pattern,
            Error::Io(_) | Error::Json(_) | Error::InvalidInput => ErrorCategory::Io,
            Error::Transport(_) | Error::MalformedResponse(_) => ErrorCategory::Transport,
        }
    }

    /// Returns whether this error is potentially recoverable.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Error::Config(_) => true,
            Error::InvalidLexicon(_) => true,
            Error::SchemaValidation(_) => true,

            // A broken built-in pattern is a defect, not a runtime condition
            Error::Pattern(_) => false,

            Error::Io(_) => true,
            Error::Json(_) => true,
            Error::InvalidInput => false,

            Error::Transport(_) => true,
            Error::MalformedResponse(_) => true,
        }
    }

    /// Returns the suggested action for automation.
    pub fn suggested_action(&self) -> SuggestedAction {
        match self {
            Error::Config(_) => SuggestedAction::RunCheck,
            Error::InvalidLexicon(_) => SuggestedAction::RunCheck,
            Error::SchemaValidation(_) => SuggestedAction::ResetConfig,
            Error::Pattern(_) => SuggestedAction::Abort,
            Error::Io(_) => SuggestedAction::Retry,
            Error::Json(_) => SuggestedAction::ManualIntervention,
            Error::InvalidInput => SuggestedAction::Abort,
            Error::Transport(_) => SuggestedAction::Skip,
            Error::MalformedResponse(_) => SuggestedAction::Skip,
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::Config(_) => "Run 'intake check' to see which lexicon file was resolved and why it failed.",
            Error::InvalidLexicon(_) => {
                "Run 'intake check' to validate, or remove the file to use built-in defaults."
            }
            Error::SchemaValidation(_) => {
                "Set \"schema_version\" to the supported version or regenerate the lexicon file."
            }
            Error::Pattern(_) => "A built-in redaction pattern is broken. Report this as a bug.",
            Error::Io(_) => "Check that the input file exists and is readable. Retry the operation.",
            Error::Json(_) => "Invalid JSON. Check syntax with 'jq . <file>'.",
            Error::InvalidInput => "Convert the narrative to UTF-8 before submitting it.",
            Error::Transport(_) => {
                "The categorization service is unreachable. The redaction result is still valid."
            }
            Error::MalformedResponse(_) => {
                "The categorization service returned an unexpected payload. The redaction result is still valid."
            }
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::Config(_) => "Configuration Error",
            Error::InvalidLexicon(_) => "Invalid Lexicon",
            Error::SchemaValidation(_) => "Schema Validation Failed",
            Error::Pattern(_) => "Pattern Compilation Failed",
            Error::Io(_) => "I/O Error",
            Error::Json(_) => "JSON Error",
            Error::InvalidInput => "Invalid Input",
            Error::Transport(_) => "Categorization Unavailable",
            Error::MalformedResponse(_) => "Categorization Response Malformed",
        }
    }
}

/// Structured error response for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Stable error code.
    pub code: u32,

    /// Error category for grouping.
    pub category: ErrorCategory,

    /// Human-readable error message.
    pub message: String,

    /// Whether the error is potentially recoverable.
    pub recoverable: bool,

    /// Suggested action for automation.
    pub suggested_action: SuggestedAction,

    /// Additional structured context (e.g., file path).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, serde_json::Value>,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        StructuredError {
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
            recoverable: err.is_recoverable(),
            suggested_action: err.suggested_action(),
            context: HashMap::new(),
        }
    }
}

impl StructuredError {
    /// Add additional context to the error.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.context.insert(key.into(), v);
        }
        self
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }
}

/// Format an error for human-readable stderr output.
///
/// Output format:
/// ```text
/// ✗ [Headline]
///   Reason: [Error message]
///   Fix: [Remediation hint]
/// ```
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, cyan, reset) = if use_color {
        ("\x1b[31m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}\n  {cyan}Fix:{reset} {remediation}",
        red = red,
        cyan = cyan,
        reset = reset,
        headline = err.headline(),
        message = err,
        remediation = err.remediation()
    )
}
