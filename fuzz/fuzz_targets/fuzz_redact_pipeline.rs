//! Fuzz target for the redaction pipeline.
//!
//! Arbitrary UTF-8 narratives must never panic, and the same narrative
//! must always produce the same result.

#![no_main]

use intake_redact::{extract_legal_concepts, extract_personal_info};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let first = extract_personal_info(text);
    assert_eq!(first, extract_personal_info(text));

    // Sanitized output is itself a valid narrative
    let _ = extract_personal_info(&first.sanitized_text);
    let _ = extract_legal_concepts(text);
});
