//! Lexicon validation errors and semantic validation.

use crate::lexicon::LexiconConfig;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Lexicon validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Semantic validation failed: {0}")]
    SemanticError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 60,
            ValidationError::ParseError(_) => 61,
            ValidationError::SemanticError(_) => 63,
            ValidationError::InvalidValue { .. } => 65,
            ValidationError::VersionMismatch { .. } => 66,
        }
    }
}

/// Validate a lexicon semantically.
///
/// Checks, in order: schema version, a non-empty urgent list, per-entry
/// hygiene (non-blank, trimmed, lower-case, unique within its list), and
/// pairwise disjointness of the four lists.
pub fn validate_lexicon(lexicon: &LexiconConfig) -> ValidationResult<()> {
    if lexicon.schema_version != crate::CONFIG_SCHEMA_VERSION {
        return Err(ValidationError::VersionMismatch {
            expected: crate::CONFIG_SCHEMA_VERSION.to_string(),
            actual: lexicon.schema_version.clone(),
        });
    }

    if lexicon.urgent_keywords.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "urgent_keywords".to_string(),
            message: "Must contain at least one keyword".to_string(),
        });
    }

    let lists = named_lists(lexicon);
    for (name, entries) in &lists {
        validate_entries(name, entries)?;
    }

    validate_disjoint(&lists)
}

fn named_lists(lexicon: &LexiconConfig) -> [(&'static str, &[String]); 4] {
    [
        ("common_terms", lexicon.common_terms.as_slice()),
        ("legal_terms", lexicon.legal_terms.as_slice()),
        ("urgent_keywords", lexicon.urgent_keywords.as_slice()),
        ("medium_keywords", lexicon.medium_keywords.as_slice()),
    ]
}

/// Validate the entries of a single list.
fn validate_entries(field: &str, entries: &[String]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(entries.len());

    for (idx, entry) in entries.iter().enumerate() {
        if entry.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: format!("{}[{}]", field, idx),
                message: "Must not be empty".to_string(),
            });
        }

        if entry.trim() != entry.as_str() {
            return Err(ValidationError::InvalidValue {
                field: format!("{}[{}]", field, idx),
                message: format!("Must not have leading or trailing whitespace, got {:?}", entry),
            });
        }

        if entry.to_lowercase() != *entry {
            return Err(ValidationError::InvalidValue {
                field: format!("{}[{}]", field, idx),
                message: format!("Must be lower-case, got {:?}", entry),
            });
        }

        if !seen.insert(entry.as_str()) {
            return Err(ValidationError::InvalidValue {
                field: format!("{}[{}]", field, idx),
                message: format!("Duplicate entry {:?}", entry),
            });
        }
    }

    Ok(())
}

/// Every entry may appear in at most one list.
fn validate_disjoint(lists: &[(&'static str, &[String]); 4]) -> ValidationResult<()> {
    let mut owner: HashMap<&str, &str> = HashMap::new();

    for (name, entries) in lists {
        for entry in entries.iter() {
            if let Some(first) = owner.insert(entry.as_str(), *name) {
                return Err(ValidationError::SemanticError(format!(
                    "Entry {:?} appears in both {} and {}; lexicon lists must be disjoint",
                    entry, first, name
                )));
            }
        }
    }

    Ok(())
}
