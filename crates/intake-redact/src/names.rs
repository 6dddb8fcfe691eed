//! Heuristic personal-name detection.
//!
//! Runs after the structured stages, on text where organizations have
//! already been replaced. Capitalized words are treated as names unless
//! they open a sentence, are common terms, or belong to an organization.
//!
//! The name classes are ASCII and so are their word boundaries: a
//! surname such as `Mihăilescu` yields the candidate `Mih`. The common
//! term check looks at both the candidate and the whole word it was cut
//! from, so `Judecătoria` is still recognised as an institution.

use crate::lexicon::Lexicon;
use crate::stage::EntityCategory;
use once_cell::sync::Lazy;
use regex::{Match, NoExpand, Regex};
use std::cmp::Reverse;
use std::collections::HashSet;
use std::ops::Range;

pub(crate) const FULL_NAME_PATTERN: &str =
    r"(?-u:\b)[A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,2}(?-u:\b)";
pub(crate) const SINGLE_NAME_PATTERN: &str = r"(?-u:\b)[A-Z][a-z]{2,}(?-u:\b)";
pub(crate) const SENTENCE_START_PATTERN: &str = r"(?:^|[.!?]\s+)([A-Z][a-z]+)(?-u:\b)";

static FULL_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(FULL_NAME_PATTERN).unwrap());
static SINGLE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(SINGLE_NAME_PATTERN).unwrap());
static SENTENCE_START: Lazy<Regex> = Lazy::new(|| Regex::new(SENTENCE_START_PATTERN).unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Names accepted for one narrative and the rewritten text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameOutput {
    /// Accepted multi-word names, first occurrence order.
    pub full_names: Vec<String>,
    /// Accepted single-word names, first occurrence order.
    pub single_names: Vec<String>,
    /// Text with every accepted name replaced.
    pub text: String,
}

/// Per-call name state.
///
/// Holds the sentence-start words of the text being processed and the
/// organizations found by the earlier stage.
pub struct NameDisambiguator<'a> {
    lexicon: &'a Lexicon,
    organizations: &'a [String],
    sentence_starts: HashSet<String>,
}

impl<'a> NameDisambiguator<'a> {
    /// Prepare disambiguation for `text`.
    pub fn new(text: &str, organizations: &'a [String], lexicon: &'a Lexicon) -> Self {
        Self {
            lexicon,
            organizations,
            sentence_starts: find_sentence_starts(text),
        }
    }

    fn is_organization(&self, candidate: &str) -> bool {
        self.organizations.iter().any(|org| org == candidate)
    }

    fn is_common(&self, text: &str, candidate: &Match<'_>) -> bool {
        self.lexicon.is_common_term(candidate.as_str())
            || self
                .lexicon
                .is_common_term(enclosing_words(text, candidate.range()))
    }

    /// Whether a multi-word candidate found in `text` should be treated as
    /// a name.
    pub fn accepts_full_name(&self, text: &str, candidate: &Match<'_>) -> bool {
        !self.is_common(text, candidate) && !self.is_organization(candidate.as_str())
    }

    /// Whether a single-word candidate found in `text` should be treated
    /// as a name.
    ///
    /// `name_words` holds the constituents of already-accepted full names.
    pub fn accepts_single_name(
        &self,
        text: &str,
        candidate: &Match<'_>,
        name_words: &HashSet<String>,
    ) -> bool {
        let word = candidate.as_str();
        !name_words.contains(word)
            && !self.sentence_starts.contains(word)
            && !self.is_common(text, candidate)
            && !self.is_organization(word)
    }

    /// Find, accept and replace names in `text`.
    pub fn run(&self, text: &str) -> NameOutput {
        let mut seen = HashSet::new();
        let mut full_names = Vec::new();
        let mut full_spans = Vec::new();
        let mut name_words = HashSet::new();
        let mut constituents = Vec::new();

        for m in FULL_NAME.find_iter(text) {
            if !self.accepts_full_name(text, &m) {
                continue;
            }
            let candidate = m.as_str();
            full_spans.push(m.range());
            if seen.insert(candidate.to_string()) {
                full_names.push(candidate.to_string());
            }
            for word in WHITESPACE.split(candidate) {
                if name_words.insert(word.to_string()) {
                    constituents.push(word.to_string());
                }
            }
        }

        let mut single_names = Vec::new();
        for m in SINGLE_NAME.find_iter(text) {
            if self.accepts_single_name(text, &m, &name_words)
                && seen.insert(m.as_str().to_string())
            {
                single_names.push(m.as_str().to_string());
            }
        }

        // Matched spans go first, so a shorter name can never split a
        // longer one. Remaining occurrences are replaced longest first.
        let mut working = replace_spans(text, &full_spans);
        let mut remaining: Vec<&String> = full_names.iter().chain(single_names.iter()).collect();
        remaining.sort_by_key(|name| Reverse(name.chars().count()));
        for name in remaining {
            working = replace_word(&working, name);
        }

        // A surname seen in a full name is still a name when it recurs alone.
        for word in &constituents {
            if !self.lexicon.is_common_term(word) {
                working = replace_word(&working, word);
            }
        }

        NameOutput {
            full_names,
            single_names,
            text: working,
        }
    }
}

/// `range` widened to the whole words it was cut from.
fn enclosing_words(text: &str, range: Range<usize>) -> &str {
    let start = text[..range.start]
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric())
        .last()
        .map_or(range.start, |(i, _)| i);
    let end = range.end
        + text[range.end..]
            .chars()
            .take_while(|c| c.is_alphanumeric())
            .map(char::len_utf8)
            .sum::<usize>();
    &text[start..end]
}

/// Replace each of the sorted, non-overlapping `spans` with the name
/// placeholder.
fn replace_spans(text: &str, spans: &[Range<usize>]) -> String {
    let placeholder = EntityCategory::FullName.placeholder();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for span in spans {
        out.push_str(&text[last..span.start]);
        out.push_str(placeholder);
        last = span.end;
    }
    out.push_str(&text[last..]);
    out
}

/// Capitalized words at the start of the text or after `.`, `!` or `?`
/// followed by whitespace.
pub fn find_sentence_starts(text: &str) -> HashSet<String> {
    SENTENCE_START
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Replace every whole-word occurrence of `word` with the name placeholder.
///
/// Falls back to plain substring replacement if the pattern cannot be
/// built, so the name is still removed.
pub fn replace_word(text: &str, word: &str) -> String {
    let placeholder = EntityCategory::FullName.placeholder();
    let pattern = format!(r"(?-u:\b){}(?-u:\b)", regex::escape(word));

    match Regex::new(&pattern) {
        Ok(re) => re.replace_all(text, NoExpand(placeholder)).into_owned(),
        Err(e) => {
            tracing::warn!(error = %e, "name pattern failed to compile; using literal replacement");
            text.replace(word, placeholder)
        }
    }
}
