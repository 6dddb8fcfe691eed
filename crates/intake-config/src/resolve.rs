//! Lexicon resolution and path discovery.
//!
//! Resolution order: CLI argument → environment variables → XDG paths →
//! system config → built-in defaults.

use crate::lexicon::LexiconConfig;
use crate::validate::{validate_lexicon, ValidationError, ValidationResult};
use std::path::{Path, PathBuf};

/// Where the lexicon was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided via CLI argument.
    CliArgument,

    /// Set via environment variable.
    Environment,

    /// Found in XDG config directory.
    XdgConfig,

    /// Found in /etc/case-intake/.
    SystemConfig,

    /// Using built-in defaults.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::CliArgument => write!(f, "CLI argument"),
            ConfigSource::Environment => write!(f, "environment variable"),
            ConfigSource::XdgConfig => write!(f, "XDG config"),
            ConfigSource::SystemConfig => write!(f, "system config"),
            ConfigSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Resolved lexicon location.
#[derive(Debug, Clone, Default)]
pub struct LexiconPath {
    /// Path to lexicon.json (or None when using built-in defaults).
    pub path: Option<PathBuf>,

    /// Source of the lexicon (for diagnostics).
    pub source: ConfigSource,
}

/// A resolved, parsed and validated lexicon.
#[derive(Debug, Clone)]
pub struct LoadedLexicon {
    /// The lexicon contents.
    pub config: LexiconConfig,

    /// Where it came from.
    pub location: LexiconPath,

    /// Raw file content, when loaded from disk.
    pub raw_json: Option<String>,
}

/// Environment variable names.
pub const ENV_LEXICON_PATH: &str = "CASE_INTAKE_LEXICON";
pub const ENV_CONFIG_DIR: &str = "CASE_INTAKE_CONFIG_DIR";

/// Standard lexicon file name.
pub const LEXICON_FILENAME: &str = "lexicon.json";

/// Application name for XDG directories.
const APP_NAME: &str = "case-intake";

/// Resolve the lexicon path using the standard resolution order.
///
/// 1. Explicit CLI path (if it exists)
/// 2. `CASE_INTAKE_LEXICON` environment variable
/// 3. `CASE_INTAKE_CONFIG_DIR` environment variable + `lexicon.json`
/// 4. XDG config directory (`~/.config/case-intake/`)
/// 5. System config (`/etc/case-intake/`)
/// 6. Built-in defaults (None)
pub fn resolve_lexicon(cli_path: Option<&Path>) -> LexiconPath {
    if let Some(path) = cli_path {
        if path.exists() {
            return LexiconPath {
                path: Some(path.to_path_buf()),
                source: ConfigSource::CliArgument,
            };
        }
    }

    if let Ok(env_path) = std::env::var(ENV_LEXICON_PATH) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return LexiconPath {
                path: Some(path),
                source: ConfigSource::Environment,
            };
        }
    }

    if let Ok(config_dir) = std::env::var(ENV_CONFIG_DIR) {
        let path = PathBuf::from(config_dir).join(LEXICON_FILENAME);
        if path.exists() {
            return LexiconPath {
                path: Some(path),
                source: ConfigSource::Environment,
            };
        }
    }

    if let Some(dir) = xdg_config_dir() {
        let path = dir.join(LEXICON_FILENAME);
        if path.exists() {
            return LexiconPath {
                path: Some(path),
                source: ConfigSource::XdgConfig,
            };
        }
    }

    let system_path = system_config_dir().join(LEXICON_FILENAME);
    if system_path.exists() {
        return LexiconPath {
            path: Some(system_path),
            source: ConfigSource::SystemConfig,
        };
    }

    LexiconPath::default()
}

/// Resolve, read, parse and validate the lexicon.
///
/// An explicit CLI path that does not exist is an error rather than a silent
/// fallback, since the caller asked for that file specifically.
pub fn load_lexicon(cli_path: Option<&Path>) -> ValidationResult<LoadedLexicon> {
    if let Some(path) = cli_path {
        if !path.exists() {
            return Err(ValidationError::IoError(format!(
                "{}: lexicon file not found",
                path.display()
            )));
        }
    }

    let location = resolve_lexicon(cli_path);

    let Some(path) = location.path.as_deref() else {
        tracing::debug!(source = %location.source, "using built-in lexicon");
        return Ok(LoadedLexicon {
            config: LexiconConfig::default(),
            location,
            raw_json: None,
        });
    };

    let raw = std::fs::read_to_string(path)
        .map_err(|e| ValidationError::IoError(format!("{}: {}", path.display(), e)))?;
    let config = LexiconConfig::from_json_str(&raw)?;
    validate_lexicon(&config)?;

    tracing::debug!(
        source = %location.source,
        path = %path.display(),
        entries = config.entry_count(),
        "loaded lexicon"
    );

    Ok(LoadedLexicon {
        config,
        location,
        raw_json: Some(raw),
    })
}

/// Get the XDG config directory for case-intake.
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Get the system config directory.
pub fn system_config_dir() -> PathBuf {
    PathBuf::from("/etc").join(APP_NAME)
}
