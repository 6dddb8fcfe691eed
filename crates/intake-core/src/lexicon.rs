//! Lexicon resolution for CLI commands.

use intake_common::{Error, Result};
use intake_config::{load_lexicon, LexiconSnapshot, LoadedLexicon, ValidationError};
use intake_redact::Lexicon;
use std::path::Path;

/// The lexicon a command runs with, plus where it came from.
#[derive(Debug, Clone)]
pub struct ActiveLexicon {
    pub lexicon: Lexicon,
    pub loaded: LoadedLexicon,
}

impl ActiveLexicon {
    /// Resolve and validate the lexicon, then build the runtime word lists.
    pub fn load(cli_path: Option<&Path>) -> Result<Self> {
        let loaded = load_lexicon(cli_path).map_err(config_error)?;
        let lexicon = Lexicon::from_config(&loaded.config)?;
        Ok(ActiveLexicon { lexicon, loaded })
    }

    pub fn snapshot(&self) -> LexiconSnapshot {
        LexiconSnapshot::new(&self.loaded)
    }
}

/// Map a lexicon loading failure onto the unified error.
pub fn config_error(err: ValidationError) -> Error {
    match err {
        ValidationError::IoError(msg) => Error::Config(msg),
        ValidationError::VersionMismatch { .. } => Error::SchemaValidation(err.to_string()),
        other => Error::InvalidLexicon(other.to_string()),
    }
}
