//! Fuzz target for redaction under a structured, arbitrary lexicon.
//!
//! Lexicons that pass validation must be usable with any narrative.

#![no_main]

use arbitrary::Arbitrary;
use intake_config::LexiconConfig;
use intake_redact::{extract_personal_info_with, Lexicon};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    common_terms: Vec<String>,
    legal_terms: Vec<String>,
    urgent_keywords: Vec<String>,
    medium_keywords: Vec<String>,
    narrative: String,
}

fuzz_target!(|input: Input| {
    let config = LexiconConfig {
        common_terms: input.common_terms,
        legal_terms: input.legal_terms,
        urgent_keywords: input.urgent_keywords,
        medium_keywords: input.medium_keywords,
        ..LexiconConfig::default()
    };

    if let Ok(lexicon) = Lexicon::from_config(&config) {
        let _ = extract_personal_info_with(&input.narrative, &lexicon);
    }
});
