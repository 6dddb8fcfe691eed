//! Triage urgency levels.

use serde::{Deserialize, Serialize};

/// Triage urgency assigned to a case narrative.
///
/// Variants are declared in increasing severity so the derived ordering
/// gives `High > Medium > Low`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum UrgencyLevel {
    /// No triage keyword found.
    #[default]
    Low,
    /// At least one medium keyword and no urgent keyword.
    Medium,
    /// At least one urgent keyword.
    High,
}

impl UrgencyLevel {
    /// All levels in increasing severity.
    pub const ALL: [UrgencyLevel; 3] = [UrgencyLevel::Low, UrgencyLevel::Medium, UrgencyLevel::High];

    /// Stable upper-case label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "LOW",
            UrgencyLevel::Medium => "MEDIUM",
            UrgencyLevel::High => "HIGH",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(UrgencyLevel::Low),
            "medium" => Some(UrgencyLevel::Medium),
            "high" => Some(UrgencyLevel::High),
            _ => None,
        }
    }
}

impl std::str::FromStr for UrgencyLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UrgencyLevel::parse_str(s).ok_or_else(|| format!("unknown urgency level: {}", s))
    }
}

impl std::fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
