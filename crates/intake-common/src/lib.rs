//! Case intake common types and errors.
//!
//! This crate provides foundational types shared across the intake crates:
//! - Triage urgency levels
//! - The redaction result handed to callers
//! - Common error types
//! - Output format specifications

pub mod error;
pub mod output;
pub mod result;
pub mod urgency;

pub use error::{Error, ErrorCategory, Result, StructuredError};
pub use output::OutputFormat;
pub use result::RedactionResult;
pub use urgency::UrgencyLevel;

/// Schema version of the JSON payloads emitted by the CLI.
pub const SCHEMA_VERSION: &str = "1.0.0";
