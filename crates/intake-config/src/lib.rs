//! Case intake lexicon configuration loading and validation.
//!
//! This crate provides:
//! - The lexicon file format with built-in defaults
//! - Config resolution (CLI → env → XDG → system → defaults)
//! - Semantic validation
//! - Lexicon snapshots for reproducibility

pub mod lexicon;
pub mod resolve;
pub mod snapshot;
pub mod validate;

pub use lexicon::LexiconConfig;
pub use resolve::{load_lexicon, resolve_lexicon, ConfigSource, LexiconPath, LoadedLexicon};
pub use snapshot::LexiconSnapshot;
pub use validate::{validate_lexicon, ValidationError, ValidationResult};

/// Schema version for lexicon files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
