//! Exit codes for the intake CLI.
//!
//! Exit codes communicate the outcome without requiring output parsing.
//!
//! Exit code ranges:
//! - 0-1: Operational outcomes (whether anything was redacted)
//! - 10-19: User/environment errors (recoverable by user action)
//! - 20-29: Internal errors (bugs, should be reported)

use intake_common::{Error, ErrorCategory};

/// Exit codes for intake operations.
///
/// These codes are a stable contract for automation. Changes require
/// a major version bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    // ========================================================================
    // Operational Outcomes (0-1)
    // ========================================================================
    /// Success: nothing was redacted
    Clean = 0,

    /// Success: at least one span was redacted
    ItemsRedacted = 1,

    // ========================================================================
    // User / Environment Errors (10-19)
    // ========================================================================
    /// Invalid arguments or undecodable input
    ArgsError = 10,

    /// Lexicon could not be resolved, parsed or validated
    ConfigError = 11,

    // ========================================================================
    // Internal Errors (20-29)
    // ========================================================================
    /// Internal error (a built-in pattern failed to compile)
    InternalError = 20,

    /// I/O error
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Exit code for a completed redaction.
    pub fn for_item_count(count: usize) -> Self {
        if count == 0 {
            ExitCode::Clean
        } else {
            ExitCode::ItemsRedacted
        }
    }

    /// Map a unified error onto its exit code.
    pub fn from_error(err: &Error) -> Self {
        if matches!(err, Error::InvalidInput) {
            return ExitCode::ArgsError;
        }
        match err.category() {
            ErrorCategory::Config => ExitCode::ConfigError,
            ErrorCategory::Pattern => ExitCode::InternalError,
            ErrorCategory::Io | ErrorCategory::Transport => ExitCode::IoError,
        }
    }

    /// Check if this exit code indicates operational outcome (codes 0-1).
    /// These are not errors.
    pub fn is_operational(self) -> bool {
        (self as i32) < 10
    }

    /// Check if this exit code is a user/environment error (codes 10-19).
    pub fn is_user_error(self) -> bool {
        let code = self as i32;
        (10..20).contains(&code)
    }

    /// Check if this exit code is an internal error (codes 20-29).
    pub fn is_internal_error(self) -> bool {
        (self as i32) >= 20
    }

    /// Check if this exit code indicates any error requiring attention.
    pub fn is_error(self) -> bool {
        (self as i32) >= 10
    }

    /// Get the error code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK_CLEAN",
            ExitCode::ItemsRedacted => "OK_REDACTED",
            ExitCode::ArgsError => "ERR_ARGS",
            ExitCode::ConfigError => "ERR_CONFIG",
            ExitCode::InternalError => "ERR_INTERNAL",
            ExitCode::IoError => "ERR_IO",
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Clean.as_i32(), 0);
        assert_eq!(ExitCode::ItemsRedacted.as_i32(), 1);
        assert_eq!(ExitCode::ArgsError.as_i32(), 10);
        assert_eq!(ExitCode::ConfigError.as_i32(), 11);
        assert_eq!(ExitCode::InternalError.as_i32(), 20);
        assert_eq!(ExitCode::IoError.as_i32(), 21);
    }

    #[test]
    fn test_ranges() {
        assert!(ExitCode::ItemsRedacted.is_operational());
        assert!(!ExitCode::ItemsRedacted.is_error());
        assert!(ExitCode::ConfigError.is_user_error());
        assert!(ExitCode::IoError.is_internal_error());
        assert!(ExitCode::ArgsError.is_error());
    }

    #[test]
    fn test_for_item_count() {
        assert_eq!(ExitCode::for_item_count(0), ExitCode::Clean);
        assert_eq!(ExitCode::for_item_count(3), ExitCode::ItemsRedacted);
    }

    #[test]
    fn test_from_error() {
        assert_eq!(
            ExitCode::from_error(&Error::InvalidLexicon("x".into())),
            ExitCode::ConfigError
        );
        assert_eq!(
            ExitCode::from_error(&Error::Pattern("x".into())),
            ExitCode::InternalError
        );
        assert_eq!(ExitCode::from_error(&Error::InvalidInput), ExitCode::ArgsError);
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(ExitCode::from_error(&Error::Io(io)), ExitCode::IoError);
    }

    #[test]
    fn test_display() {
        assert_eq!(ExitCode::ConfigError.to_string(), "ERR_CONFIG (11)");
        assert_eq!(i32::from(ExitCode::Clean), 0);
    }
}
