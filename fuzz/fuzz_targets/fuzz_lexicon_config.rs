//! Fuzz target for lexicon.json parsing and validation.
//!
//! Tests that lexicon parsing and validation handle arbitrary input
//! without panicking.

#![no_main]

use intake_config::{validate_lexicon, LexiconConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Should never panic, only return an error
    if let Ok(config) = serde_json::from_slice::<LexiconConfig>(data) {
        let _ = validate_lexicon(&config);
    }
});
