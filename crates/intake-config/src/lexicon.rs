//! Lexicon file format and built-in word lists.
//!
//! A lexicon file is JSON:
//!
//! ```json
//! {
//!   "schema_version": "1.0.0",
//!   "common_terms": ["domnul", "contract"],
//!   "legal_terms": ["divorț", "custodie"],
//!   "urgent_keywords": ["urgent"],
//!   "medium_keywords": ["termen"]
//! }
//! ```
//!
//! Any list left out of the file falls back to the built-in defaults below.
//! Entries are stored lower-case; `legal_terms` and both keyword lists keep
//! their order, which determines the order of reported legal concepts.

use crate::validate::{ValidationError, ValidationResult};
use crate::CONFIG_SCHEMA_VERSION;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Capitalized words that are never personal names.
///
/// Greetings, honorifics, institutions, calendar words, place names and
/// common sentence openers in Romanian and English.
pub const DEFAULT_COMMON_TERMS: &[&str] = &[
    // Greetings and courtesy
    "bună", "buna", "ziua", "seara", "salut", "stimate", "stimată", "vă", "va", "rog",
    "mulțumesc", "multumesc", "hello", "dear", "please", "thanks", "regards",
    // Honorifics and roles
    "domnul", "doamna", "domnului", "doamnei", "dl", "dna", "mr", "mrs", "ms", "dr",
    "avocat", "avocatul", "avocata", "notar", "notarul", "executorul", "judecătorul",
    "judecatorul", "procurorul", "angajatorul", "proprietarul", "chiriașul", "chiriasul",
    "vecinul", "vecina", "soțul", "sotul", "soția", "sotia", "fiul", "fiica", "mama",
    "tata", "fratele", "sora", "lawyer", "attorney", "judge", "landlord", "tenant",
    "employer",
    // Institutions and legal references
    "instanța", "instanta", "tribunalul", "judecătoria", "judecatoria", "curtea", "apel",
    "parchetul", "poliția", "politia", "primăria", "primaria", "anaf", "contract",
    "contractul", "contractului", "legea", "codul", "civil", "penal", "muncii",
    "articolul", "art", "conform", "potrivit", "court", "police", "law", "section",
    // Calendar
    "luni", "marți", "marti", "miercuri", "joi", "vineri", "sâmbătă", "sambata",
    "duminică", "duminica", "ianuarie", "februarie", "martie", "aprilie", "mai", "iunie",
    "iulie", "august", "septembrie", "octombrie", "noiembrie", "decembrie", "monday",
    "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "january",
    "february", "march", "april", "may", "june", "july", "september", "october",
    "november", "december", "ieri", "azi", "astăzi", "astazi", "mâine", "maine",
    "today", "yesterday", "tomorrow",
    // Places
    "românia", "romania", "bucurești", "bucuresti", "cluj", "iași", "iasi", "timișoara",
    "timisoara", "constanța", "constanta", "brașov", "brasov", "sibiu", "oradea",
    "craiova", "europa", "europe",
    // Sentence openers and units that survive other stages
    "am", "avem", "este", "sunt", "sau", "dar", "iar", "după", "dupa", "pentru", "acest",
    "această", "aceasta", "acum", "când", "cand", "deoarece", "suma", "ani", "an", "lei",
    "euro", "ron", "the", "this", "that", "there", "contact", "regarding", "after",
    "before", "when", "because",
];

/// Legal-domain vocabulary reported by concept extraction.
pub const DEFAULT_LEGAL_TERMS: &[&str] = &[
    "divorț",
    "divort",
    "custodie",
    "pensie alimentară",
    "partaj",
    "moștenire",
    "mostenire",
    "testament",
    "succesiune",
    "concediere",
    "contract de muncă",
    "salariu",
    "chirie",
    "închiriere",
    "proprietate",
    "uzucapiune",
    "cadastru",
    "accident",
    "despăgubiri",
    "despagubiri",
    "daune",
    "asigurare",
    "fraudă",
    "înșelăciune",
    "furt",
    "plângere",
    "litigiu",
    "recurs",
    "hotărâre",
    "executare silită",
    "insolvență",
    "faliment",
    "malpraxis",
    "discriminare",
    "hărțuire",
    "divorce",
    "custody",
    "alimony",
    "inheritance",
    "employment",
    "dismissal",
    "fraud",
    "damages",
    "insurance",
    "bankruptcy",
    "harassment",
];

/// Substrings that mark a narrative as HIGH urgency.
pub const DEFAULT_URGENT_KEYWORDS: &[&str] = &[
    "urgent",
    "urgență",
    "imediat",
    "de îndată",
    "pericol",
    "amenințare",
    "amenintare",
    "violență",
    "violenta",
    "agresiune",
    "arest",
    "reținut",
    "retinut",
    "evacuare",
    "emergency",
    "immediately",
    "danger",
    "threat",
    "violence",
    "eviction",
];

/// Substrings that mark a narrative as MEDIUM urgency.
pub const DEFAULT_MEDIUM_KEYWORDS: &[&str] = &[
    "termen",
    "somație",
    "somatie",
    "notificare",
    "citație",
    "citatie",
    "proces",
    "datorie",
    "datorii",
    "executor",
    "poprire",
    "întârziere",
    "intarziere",
    "amendă",
    "deadline",
    "summons",
    "debt",
    "hearing",
];

fn default_schema_version() -> String {
    CONFIG_SCHEMA_VERSION.to_string()
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_common_terms() -> Vec<String> {
    to_owned_list(DEFAULT_COMMON_TERMS)
}

fn default_legal_terms() -> Vec<String> {
    to_owned_list(DEFAULT_LEGAL_TERMS)
}

fn default_urgent_keywords() -> Vec<String> {
    to_owned_list(DEFAULT_URGENT_KEYWORDS)
}

fn default_medium_keywords() -> Vec<String> {
    to_owned_list(DEFAULT_MEDIUM_KEYWORDS)
}

/// Lexicon configuration as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Schema version.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Words excluded from name detection.
    #[serde(default = "default_common_terms")]
    pub common_terms: Vec<String>,

    /// Legal-domain terms for concept extraction.
    #[serde(default = "default_legal_terms")]
    pub legal_terms: Vec<String>,

    /// Keywords that force HIGH urgency.
    #[serde(default = "default_urgent_keywords")]
    pub urgent_keywords: Vec<String>,

    /// Keywords that raise urgency to MEDIUM.
    #[serde(default = "default_medium_keywords")]
    pub medium_keywords: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            common_terms: default_common_terms(),
            legal_terms: default_legal_terms(),
            urgent_keywords: default_urgent_keywords(),
            medium_keywords: default_medium_keywords(),
        }
    }
}

impl LexiconConfig {
    /// Parse a lexicon from a JSON string.
    pub fn from_json_str(content: &str) -> ValidationResult<Self> {
        serde_json::from_str(content).map_err(|e| ValidationError::ParseError(e.to_string()))
    }

    /// Load a lexicon from a JSON file.
    pub fn from_file(path: &Path) -> ValidationResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ValidationError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&content)
    }

    /// Save the lexicon to a file as pretty JSON.
    pub fn save(&self, path: &Path) -> ValidationResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ValidationError::ParseError(e.to_string()))?;
        std::fs::write(path, content)
            .map_err(|e| ValidationError::IoError(format!("{}: {}", path.display(), e)))
    }

    /// Total number of entries across all lists.
    pub fn entry_count(&self) -> usize {
        self.common_terms.len()
            + self.legal_terms.len()
            + self.urgent_keywords.len()
            + self.medium_keywords.len()
    }
}
