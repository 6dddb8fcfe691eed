//! Case intake CLI support library.
//!
//! Backs the `intake` binary:
//! - Exit codes
//! - Logging setup
//! - Narrative input and lexicon resolution
//! - Payload rendering
//! - Optional categorization client (feature `categorize`)

#[cfg(feature = "categorize")]
pub mod category;
pub mod exit_codes;
pub mod input;
pub mod lexicon;
pub mod logging;
pub mod output;

pub use exit_codes::ExitCode;
pub use lexicon::ActiveLexicon;
