//! Lexicon snapshots for reproducibility.
//!
//! A snapshot identifies exactly which word lists produced a redaction, so a
//! result can be reproduced later against the same lexicon.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::resolve::LoadedLexicon;
use crate::LexiconConfig;

/// A frozen description of the lexicon in use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconSnapshot {
    /// Schema version of the lexicon.
    pub schema_version: String,

    /// Source of the lexicon (CLI argument, environment, ...).
    pub source: String,

    /// Path the lexicon was loaded from, if any.
    #[serde(default)]
    pub path: Option<String>,

    /// SHA-256 of the canonical JSON serialization of the lexicon.
    pub hash: String,

    /// Number of entries per list.
    pub counts: LexiconCounts,
}

/// Entry counts per lexicon list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconCounts {
    pub common_terms: usize,
    pub legal_terms: usize,
    pub urgent_keywords: usize,
    pub medium_keywords: usize,
}

impl LexiconCounts {
    fn of(config: &LexiconConfig) -> Self {
        LexiconCounts {
            common_terms: config.common_terms.len(),
            legal_terms: config.legal_terms.len(),
            urgent_keywords: config.urgent_keywords.len(),
            medium_keywords: config.medium_keywords.len(),
        }
    }
}

impl LexiconSnapshot {
    /// Snapshot a resolved lexicon.
    ///
    /// The hash covers the parsed lexicon rather than the raw file, so
    /// formatting changes in the file do not change the snapshot.
    pub fn new(loaded: &LoadedLexicon) -> Self {
        LexiconSnapshot {
            schema_version: loaded.config.schema_version.clone(),
            source: loaded.location.source.to_string(),
            path: loaded
                .location
                .path
                .as_ref()
                .map(|p| p.display().to_string()),
            hash: hash_config(&loaded.config),
            counts: LexiconCounts::of(&loaded.config),
        }
    }

    /// Snapshot of the built-in lexicon.
    pub fn defaults_only() -> Self {
        let config = LexiconConfig::default();
        LexiconSnapshot {
            schema_version: config.schema_version.clone(),
            source: crate::ConfigSource::BuiltinDefault.to_string(),
            path: None,
            hash: hash_config(&config),
            counts: LexiconCounts::of(&config),
        }
    }

    /// Serialize snapshot to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check if this snapshot describes the same lexicon contents.
    pub fn matches(&self, other: &LexiconSnapshot) -> bool {
        self.hash == other.hash
    }

    /// Short identifier (first 12 chars of hash).
    pub fn short_id(&self) -> &str {
        &self.hash[..12.min(self.hash.len())]
    }
}

fn hash_config(config: &LexiconConfig) -> String {
    // Serializing a struct of strings and string vectors cannot fail.
    let canonical = serde_json::to_string(config).unwrap_or_default();
    hash_content(&canonical)
}

/// Hash content with SHA-256 and return hex string.
fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
