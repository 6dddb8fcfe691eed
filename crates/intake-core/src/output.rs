//! Rendering of command payloads for stdout.
//!
//! Every renderer returns the full payload as a string; `main` prints it.
//! JSON payloads are pretty-printed, `md` targets people reading a terminal
//! or a ticket, `summary` is a single line.

use intake_common::{OutputFormat, RedactionResult, UrgencyLevel, SCHEMA_VERSION};
use intake_config::LexiconSnapshot;
use serde_json::json;

/// Render the result of `redact`.
pub fn render_redaction(result: &RedactionResult, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(result),
        OutputFormat::Summary => Ok(summary_line(result)),
        OutputFormat::Md => {
            let mut out = String::from("# Redaction\n\n");
            out.push_str(&format!("**Urgency:** {}\n", result.urgency));
            out.push_str(&format!("**Items redacted:** {}\n\n", result.item_count()));
            out.push_str("## Sanitized text\n\n");
            out.push_str(&result.sanitized_text);
            out.push('\n');
            if !result.is_clean() {
                out.push_str("\n## Extracted items\n\n");
                for item in &result.extracted_items {
                    out.push_str(&format!("- `{}`\n", item));
                }
            }
            Ok(out.trim_end().to_string())
        }
    }
}

fn summary_line(result: &RedactionResult) -> String {
    format!(
        "urgency={} items={} chars={}",
        result.urgency,
        result.item_count(),
        result.sanitized_text.chars().count()
    )
}

/// Render the result of `urgency`.
pub fn render_urgency(urgency: UrgencyLevel, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({ "urgency": urgency })),
        OutputFormat::Md | OutputFormat::Summary => Ok(urgency.to_string()),
    }
}

/// Render the result of `concepts`.
pub fn render_concepts(concepts: &[String], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({ "concepts": concepts })),
        OutputFormat::Summary => Ok(if concepts.is_empty() {
            "(none)".to_string()
        } else {
            concepts.join(", ")
        }),
        OutputFormat::Md => {
            let mut out = String::from("# Legal concepts\n");
            if concepts.is_empty() {
                out.push_str("\nNo legal concepts found.");
            } else {
                out.push('\n');
                for concept in concepts {
                    out.push_str(&format!("- {}\n", concept));
                }
            }
            Ok(out.trim_end().to_string())
        }
    }
}

/// Render a successful `check`.
pub fn render_check(snapshot: &LexiconSnapshot, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "schema_version": SCHEMA_VERSION,
            "status": "ok",
            "lexicon": snapshot,
        })),
        OutputFormat::Summary => Ok(format!(
            "[ok] lexicon {} ({})",
            snapshot.short_id(),
            snapshot.source
        )),
        OutputFormat::Md => {
            let counts = &snapshot.counts;
            let mut out = String::from("# intake check\n\n");
            out.push_str(&format!("✓ lexicon: ok ({})\n", snapshot.source));
            if let Some(path) = &snapshot.path {
                out.push_str(&format!("  Path: {}\n", path));
            }
            out.push_str(&format!("  Schema version: {}\n", snapshot.schema_version));
            out.push_str(&format!("  Hash: {}\n", snapshot.hash));
            out.push_str(&format!(
                "  Entries: {} common, {} legal, {} urgent, {} medium",
                counts.common_terms, counts.legal_terms, counts.urgent_keywords, counts.medium_keywords
            ));
            Ok(out)
        }
    }
}

/// Render a failed `check`.
pub fn render_check_failure(err: &intake_common::Error, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "schema_version": SCHEMA_VERSION,
            "status": "error",
            "error": intake_common::StructuredError::from(err),
        })),
        OutputFormat::Summary => Ok(format!("[error] lexicon: {}", err)),
        OutputFormat::Md => Ok(format!("# intake check\n\n✗ lexicon: error\n  Error: {}", err)),
    }
}

/// Render `version`.
pub fn render_version(format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&json!({
            "schema_version": SCHEMA_VERSION,
            "lexicon_schema_version": intake_config::CONFIG_SCHEMA_VERSION,
            "intake_version": env!("CARGO_PKG_VERSION"),
            "rust_version": env!("CARGO_PKG_RUST_VERSION"),
        })),
        OutputFormat::Md | OutputFormat::Summary => Ok(format!(
            "intake {}\nschema version: {}",
            env!("CARGO_PKG_VERSION"),
            SCHEMA_VERSION
        )),
    }
}
