//! Pattern stages for structured entities.
//!
//! Each stage finds every non-overlapping match of its rules in the working
//! text, records the matched substrings, and replaces them with the stage's
//! placeholder. Stages run in the order of [`STAGE_SPECS`]; the name stages
//! that follow live in [`crate::names`].

use crate::error::{RedactionError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Category of an extracted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityCategory {
    Email,
    /// Romanian personal numeric code (CNP).
    NationalId,
    Phone,
    Age,
    Amount,
    Date,
    Organization,
    FullName,
    SingleName,
}

impl EntityCategory {
    /// All categories in pipeline order.
    pub const ALL: [EntityCategory; 9] = [
        EntityCategory::Email,
        EntityCategory::NationalId,
        EntityCategory::Phone,
        EntityCategory::Age,
        EntityCategory::Amount,
        EntityCategory::Date,
        EntityCategory::Organization,
        EntityCategory::FullName,
        EntityCategory::SingleName,
    ];

    /// Token substituted for spans of this category.
    pub fn placeholder(&self) -> &'static str {
        match self {
            EntityCategory::Email => "[EMAIL]",
            EntityCategory::NationalId => "[CNP]",
            EntityCategory::Phone => "[TELEFON]",
            EntityCategory::Age => "[VÂRSTĂ]",
            EntityCategory::Amount => "[SUMĂ]",
            EntityCategory::Date => "[DATĂ]",
            EntityCategory::Organization => "[ORGANIZAȚIE]",
            EntityCategory::FullName | EntityCategory::SingleName => "[NUME]",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityCategory::Email => "email",
            EntityCategory::NationalId => "national_id",
            EntityCategory::Phone => "phone",
            EntityCategory::Age => "age",
            EntityCategory::Amount => "amount",
            EntityCategory::Date => "date",
            EntityCategory::Organization => "organization",
            EntityCategory::FullName => "full_name",
            EntityCategory::SingleName => "single_name",
        }
    }

    /// Whether this is one of the heuristic name categories.
    pub fn is_name(&self) -> bool {
        matches!(self, EntityCategory::FullName | EntityCategory::SingleName)
    }
}

impl std::fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One pattern and its replacement template.
///
/// The template may reference capture groups with `${n}`.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

/// Static description of a stage.
#[derive(Debug, Clone, Copy)]
pub struct StageSpec {
    pub category: EntityCategory,
    pub rules: &'static [RuleSpec],
}

const DATE_PATTERN: &str = concat!(
    r"(?i)",
    r"\b(0?[1-9]|[12][0-9]|3[01])[/\-.](0?[1-9]|1[0-2])[/\-.](19|20)?\d{2}\b",
    r"|\b(0?[1-9]|1[0-2])[/\-.](0?[1-9]|[12][0-9]|3[01])[/\-.](19|20)?\d{2}\b",
    r"|\b(ianuarie|februarie|martie|aprilie|mai|iunie|iulie|august|septembrie|octombrie|noiembrie|decembrie)\s+\d{1,2},?\s+\d{4}\b",
    r"|\b(January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}\b",
);

/// Structured-entity stages, in the order they run.
pub static STAGE_SPECS: &[StageSpec] = &[
    StageSpec {
        category: EntityCategory::Email,
        // TLDs are letters only.
        rules: &[RuleSpec {
            pattern: r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
            replacement: "[EMAIL]",
        }],
    },
    StageSpec {
        category: EntityCategory::NationalId,
        rules: &[RuleSpec {
            pattern: r"\b[1256]\d{12}\b",
            replacement: "[CNP]",
        }],
    },
    StageSpec {
        category: EntityCategory::Phone,
        rules: &[RuleSpec {
            pattern: r"(?:\+?40|0040|0)\s?7\d{2}\s?\d{3}\s?\d{3}\b",
            replacement: "[TELEFON]",
        }],
    },
    StageSpec {
        category: EntityCategory::Age,
        // Both forms are matched against the same input; the unit word is kept.
        rules: &[
            RuleSpec {
                pattern: r"(?i)\b(\d+)\s+(ani|an)\b",
                replacement: "[VÂRSTĂ] ${2}",
            },
            RuleSpec {
                pattern: r"(?i)\b(\d+)\s+de\s+(ani|an)\b",
                replacement: "[VÂRSTĂ] de ${2}",
            },
        ],
    },
    StageSpec {
        category: EntityCategory::Amount,
        rules: &[RuleSpec {
            pattern: r"(?i)\d+(?:[.,]\d{1,2})?\s?(?:RON|lei|euro|EUR|€|\$|USD|£)",
            replacement: "[SUMĂ]",
        }],
    },
    StageSpec {
        category: EntityCategory::Date,
        rules: &[RuleSpec {
            pattern: DATE_PATTERN,
            replacement: "[DATĂ]",
        }],
    },
    StageSpec {
        category: EntityCategory::Organization,
        rules: &[RuleSpec {
            pattern: r"\b[A-Z][A-Za-z0-9\s&]*\b(SRL|SA|Inc|LLC|Ltd|Corp|Corporation|Company|Co)\b",
            replacement: "[ORGANIZAȚIE]",
        }],
    },
];

/// A compiled stage.
#[derive(Debug)]
pub struct Stage {
    category: EntityCategory,
    rules: Vec<(Regex, &'static str)>,
}

/// Matches found by one stage and the rewritten text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageOutput {
    pub category: EntityCategory,
    pub matches: Vec<String>,
    pub text: String,
}

impl Stage {
    /// Compile a stage from its description.
    pub fn compile(spec: &StageSpec) -> Result<Self> {
        let rules = spec
            .rules
            .iter()
            .map(|rule| {
                Regex::new(rule.pattern)
                    .map(|re| (re, rule.replacement))
                    .map_err(|e| {
                        RedactionError::PatternError(format!("{} stage: {}", spec.category, e))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Stage {
            category: spec.category,
            rules,
        })
    }

    pub fn category(&self) -> EntityCategory {
        self.category
    }

    /// Run the stage over `text`.
    ///
    /// Every rule collects its matches from the stage input before any
    /// replacement happens; replacements then apply rule by rule.
    pub fn apply(&self, text: &str) -> StageOutput {
        let matches: Vec<String> = self
            .rules
            .iter()
            .flat_map(|(re, _)| re.find_iter(text).map(|m| m.as_str().to_string()))
            .collect();

        if matches.is_empty() {
            return StageOutput {
                category: self.category,
                matches,
                text: text.to_string(),
            };
        }

        let mut working = text.to_string();
        for (re, replacement) in &self.rules {
            working = re.replace_all(&working, *replacement).into_owned();
        }

        StageOutput {
            category: self.category,
            matches,
            text: working,
        }
    }
}

static STAGES: Lazy<Vec<Stage>> =
    Lazy::new(|| compile_stages().expect("built-in stage patterns must compile"));

/// Compile every stage in [`STAGE_SPECS`].
pub fn compile_stages() -> Result<Vec<Stage>> {
    STAGE_SPECS.iter().map(Stage::compile).collect()
}

/// The compiled stages, in pipeline order.
pub fn stages() -> &'static [Stage] {
    &STAGES
}

/// Look up a compiled stage by category.
///
/// Returns `None` for the name categories, which are not table-driven.
pub fn stage(category: EntityCategory) -> Option<&'static Stage> {
    stages().iter().find(|s| s.category == category)
}
