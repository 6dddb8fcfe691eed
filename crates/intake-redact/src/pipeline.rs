//! The redaction pipeline.
//!
//! Structured stages run first, then name disambiguation, each consuming the
//! previous stage's output. Urgency is computed from the original text.

use crate::lexicon::Lexicon;
use crate::names::NameDisambiguator;
use crate::stage::{stages, EntityCategory};
use crate::urgency::assess_urgency_with;
use intake_common::{RedactionResult, UrgencyLevel};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// A redacted span and the category that matched it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedSpan {
    pub category: EntityCategory,
    pub text: String,
}

impl ExtractedSpan {
    fn new(category: EntityCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

/// Spans and sanitized text, without urgency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Spans in stage order.
    pub spans: Vec<ExtractedSpan>,
    pub sanitized_text: String,
}

impl Extraction {
    /// Matched substrings in stage order.
    pub fn item_texts(&self) -> Vec<String> {
        self.spans.iter().map(|s| s.text.clone()).collect()
    }

    /// Spans of one category.
    pub fn of_category(&self, category: EntityCategory) -> impl Iterator<Item = &ExtractedSpan> {
        self.spans.iter().filter(move |s| s.category == category)
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Attach an urgency level and produce the caller-facing result.
    pub fn into_result(self, urgency: UrgencyLevel) -> RedactionResult {
        let items = self.spans.into_iter().map(|s| s.text).collect();
        RedactionResult::new(items, self.sanitized_text, urgency)
    }
}

/// Run every stage over `text` and return the categorized spans.
pub fn extract_entities(text: &str, lexicon: &Lexicon) -> Extraction {
    let mut spans = Vec::new();
    let mut organizations = Vec::new();
    let mut working = text.to_string();

    for stage in stages() {
        let started = Instant::now();
        let output = stage.apply(&working);

        tracing::trace!(
            stage = %output.category,
            matches = output.matches.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "stage complete"
        );

        if output.category == EntityCategory::Organization {
            organizations.extend(output.matches.iter().cloned());
        }
        spans.extend(
            output
                .matches
                .into_iter()
                .map(|m| ExtractedSpan::new(output.category, m)),
        );
        working = output.text;
    }

    let started = Instant::now();
    let names = NameDisambiguator::new(&working, &organizations, lexicon).run(&working);
    tracing::trace!(
        full_names = names.full_names.len(),
        single_names = names.single_names.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "name disambiguation complete"
    );

    spans.extend(
        names
            .full_names
            .into_iter()
            .map(|n| ExtractedSpan::new(EntityCategory::FullName, n)),
    );
    spans.extend(
        names
            .single_names
            .into_iter()
            .map(|n| ExtractedSpan::new(EntityCategory::SingleName, n)),
    );

    tracing::debug!(
        input_bytes = text.len(),
        spans = spans.len(),
        "entity extraction complete"
    );

    Extraction {
        spans,
        sanitized_text: names.text,
    }
}

/// Redact `text` with the built-in lexicon.
pub fn extract_personal_info(text: &str) -> RedactionResult {
    extract_personal_info_with(text, Lexicon::builtin())
}

/// Redact `text` with a specific lexicon.
pub fn extract_personal_info_with(text: &str, lexicon: &Lexicon) -> RedactionResult {
    let urgency = assess_urgency_with(text, lexicon);
    let extraction = extract_entities(text, lexicon);
    tracing::debug!(
        items = extraction.spans.len(),
        urgency = %urgency,
        "redaction complete"
    );
    extraction.into_result(urgency)
}
