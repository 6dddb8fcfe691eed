//! Keyword-based urgency triage.

use crate::lexicon::Lexicon;
use intake_common::UrgencyLevel;

/// Classify urgency with the built-in lexicon.
pub fn assess_urgency(text: &str) -> UrgencyLevel {
    assess_urgency_with(text, Lexicon::builtin())
}

/// Classify urgency with a specific lexicon.
///
/// Matching is case-insensitive substring containment. Any urgent keyword
/// yields HIGH regardless of how many medium keywords are present.
pub fn assess_urgency_with(text: &str, lexicon: &Lexicon) -> UrgencyLevel {
    let lower = text.to_lowercase();

    if contains_any(&lower, lexicon.urgent_keywords()) {
        UrgencyLevel::High
    } else if contains_any(&lower, lexicon.medium_keywords()) {
        UrgencyLevel::Medium
    } else {
        UrgencyLevel::Low
    }
}

fn contains_any(haystack: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|k| haystack.contains(k.as_str()))
}
