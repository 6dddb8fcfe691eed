//! Result of running the redaction pipeline over one narrative.

use crate::UrgencyLevel;
use serde::{Deserialize, Serialize};

/// Combined output of one redaction call.
///
/// Serializes with the field names downstream consumers expect:
/// `extractedItems`, `sanitizedText`, `urgency`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedactionResult {
    /// Redacted spans in stage order (not text order).
    pub extracted_items: Vec<String>,

    /// Narrative with every redacted span replaced by its placeholder.
    pub sanitized_text: String,

    /// Urgency computed from the original, un-redacted narrative.
    pub urgency: UrgencyLevel,
}

impl RedactionResult {
    /// Create a new result.
    pub fn new(extracted_items: Vec<String>, sanitized_text: String, urgency: UrgencyLevel) -> Self {
        Self {
            extracted_items,
            sanitized_text,
            urgency,
        }
    }

    /// Whether nothing was redacted.
    pub fn is_clean(&self) -> bool {
        self.extracted_items.is_empty()
    }

    /// Number of redacted spans.
    pub fn item_count(&self) -> usize {
        self.extracted_items.len()
    }
}
