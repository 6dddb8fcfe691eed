//! Redaction core for legal case narratives.
//!
//! Strips personally identifying spans from free text, reports what was
//! removed, and assigns a triage urgency level. Everything here is a pure,
//! synchronous text transformation: no I/O, no state kept between calls.
//!
//! # Key Features
//!
//! - **Ordered stages**: emails, national IDs, phones, ages, amounts, dates
//!   and organizations are matched and replaced in a fixed order, each stage
//!   working on the previous stage's output.
//! - **Name heuristics**: capitalized words are redacted as names unless
//!   they open a sentence, are common terms, or belong to an organization.
//! - **Fail-closed**: if a name pattern cannot be compiled the name is still
//!   removed by literal replacement.
//! - **Configurable lexicon**: the word lists can be replaced via
//!   [`Lexicon::from_config`].
//!
//! # Example
//!
//! ```
//! use intake_redact::{extract_personal_info, UrgencyLevel};
//!
//! let result = extract_personal_info("Contact me at jane.doe@example.com regarding the case.");
//! assert_eq!(result.sanitized_text, "Contact me at [EMAIL] regarding the case.");
//! assert_eq!(result.extracted_items, vec!["jane.doe@example.com"]);
//! assert_eq!(result.urgency, UrgencyLevel::Low);
//! ```

pub mod concepts;
pub mod error;
pub mod lexicon;
pub mod names;
pub mod pipeline;
pub mod stage;
pub mod urgency;

pub use concepts::{extract_legal_concepts, extract_legal_concepts_with};
pub use error::{RedactionError, Result};
pub use intake_common::{RedactionResult, UrgencyLevel};
pub use lexicon::Lexicon;
pub use names::NameDisambiguator;
pub use pipeline::{
    extract_entities, extract_personal_info, extract_personal_info_with, ExtractedSpan,
    Extraction,
};
pub use stage::{EntityCategory, Stage, StageOutput};
pub use urgency::{assess_urgency, assess_urgency_with};

/// Compile every pattern the pipeline uses.
///
/// The patterns are fixed, so this only fails on a build with a broken
/// pattern table. Call it once at startup to fail fast instead of panicking
/// on first use.
pub fn ensure_patterns() -> Result<()> {
    let compiled = stage::compile_stages()?;

    for (name, pattern) in [
        ("full name", names::FULL_NAME_PATTERN),
        ("single name", names::SINGLE_NAME_PATTERN),
        ("sentence start", names::SENTENCE_START_PATTERN),
    ] {
        regex::Regex::new(pattern)
            .map_err(|e| RedactionError::PatternError(format!("{} pattern: {}", name, e)))?;
    }

    tracing::debug!(stages = compiled.len() + 2, "redaction patterns compiled");
    Ok(())
}
