//! Runtime lexicon used by the pipeline.
//!
//! Built from an [`intake_config::LexiconConfig`]: common terms become a
//! lower-cased set for membership tests, the other three lists keep their
//! configured order.

use crate::error::Result;
use intake_config::{validate_lexicon, LexiconConfig};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::path::Path;

static BUILTIN: Lazy<Lexicon> = Lazy::new(|| Lexicon::from_trusted(&LexiconConfig::default()));

/// Immutable word lists consulted by the pipeline.
#[derive(Debug, Clone)]
pub struct Lexicon {
    common_terms: HashSet<String>,
    legal_terms: Vec<String>,
    urgent_keywords: Vec<String>,
    medium_keywords: Vec<String>,
}

impl Lexicon {
    /// The built-in lexicon, initialized once per process.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Build a lexicon from a configuration after validating it.
    pub fn from_config(config: &LexiconConfig) -> Result<Self> {
        validate_lexicon(config)?;
        Ok(Self::from_trusted(config))
    }

    /// Read, parse and validate a lexicon file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: LexiconConfig = serde_json::from_str(&content)?;
        Self::from_config(&config)
    }

    fn from_trusted(config: &LexiconConfig) -> Self {
        let lower = |items: &[String]| -> Vec<String> {
            items.iter().map(|s| s.to_lowercase()).collect()
        };

        Lexicon {
            common_terms: config.common_terms.iter().map(|s| s.to_lowercase()).collect(),
            legal_terms: lower(&config.legal_terms),
            urgent_keywords: lower(&config.urgent_keywords),
            medium_keywords: lower(&config.medium_keywords),
        }
    }

    /// Case-insensitive membership test against the common terms.
    ///
    /// Multi-word phrases are tested as a whole.
    pub fn is_common_term(&self, phrase: &str) -> bool {
        self.common_terms.contains(&phrase.to_lowercase())
    }

    pub fn legal_terms(&self) -> &[String] {
        &self.legal_terms
    }

    pub fn urgent_keywords(&self) -> &[String] {
        &self.urgent_keywords
    }

    pub fn medium_keywords(&self) -> &[String] {
        &self.medium_keywords
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::builtin().clone()
    }
}
