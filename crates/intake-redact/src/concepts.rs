//! Legal concept extraction.

use crate::lexicon::Lexicon;
use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Legal terms from the built-in lexicon that occur in `text`.
pub fn extract_legal_concepts(text: &str) -> Vec<String> {
    extract_legal_concepts_with(text, Lexicon::builtin())
}

/// Legal terms from `lexicon` that occur in `text`, in lexicon order.
///
/// The text is lower-cased and markup tags are replaced by a space before
/// the substring scan.
pub fn extract_legal_concepts_with(text: &str, lexicon: &Lexicon) -> Vec<String> {
    let lower = text.to_lowercase();
    let clean = MARKUP_TAG.replace_all(&lower, " ");

    lexicon
        .legal_terms()
        .iter()
        .filter(|term| clean.contains(term.as_str()))
        .cloned()
        .collect()
}
