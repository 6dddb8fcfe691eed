//! Optional categorization of sanitized narratives.
//!
//! Only the sanitized text leaves the process. A failed request never
//! affects the redaction result; the caller gets `None` and a warning is
//! logged.

use intake_common::{Error, RedactionResult, Result};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Category reported when the response carries none.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct CategorizeRequest<'a> {
    text: &'a str,
}

/// Redaction result with the category assigned downstream, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorizedResult {
    #[serde(flatten)]
    pub result: RedactionResult,
    pub category: Option<String>,
}

/// Pick the category out of a categorization response.
///
/// `categorie` wins over `category`; anything else is uncategorized.
pub fn category_from_response(value: &Value) -> String {
    value
        .get("categorie")
        .and_then(Value::as_str)
        .or_else(|| value.get("category").and_then(Value::as_str))
        .unwrap_or(UNCATEGORIZED)
        .to_string()
}

/// Blocking client for a categorization endpoint.
pub struct CategorizeClient {
    agent: ureq::Agent,
    endpoint: String,
}

impl CategorizeClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        CategorizeClient {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
            endpoint: endpoint.into(),
        }
    }

    /// Post the sanitized text and return the assigned category.
    pub fn request(&self, sanitized_text: &str) -> Result<String> {
        let response = self
            .agent
            .post(&self.endpoint)
            .send_json(CategorizeRequest {
                text: sanitized_text,
            })
            .map_err(|e| Error::Transport(e.to_string()))?;

        let value: Value = response
            .into_json()
            .map_err(|e| Error::MalformedResponse(e.to_string()))?;
        if !value.is_object() {
            return Err(Error::MalformedResponse("expected a JSON object".to_string()));
        }
        Ok(category_from_response(&value))
    }

    /// Like [`request`](Self::request), but logs and swallows failures.
    pub fn categorize(&self, sanitized_text: &str) -> Option<String> {
        match self.request(sanitized_text) {
            Ok(category) => {
                tracing::debug!(category = %category, "narrative categorized");
                Some(category)
            }
            Err(e) => {
                tracing::warn!(
                    code = e.code(),
                    error = %e,
                    "categorization failed; continuing without a category"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use intake_common::UrgencyLevel;
    use serde_json::json;

    #[test]
    fn test_category_field_precedence() {
        assert_eq!(
            category_from_response(&json!({"categorie": "Dreptul familiei", "category": "Family"})),
            "Dreptul familiei"
        );
        assert_eq!(category_from_response(&json!({"category": "Family"})), "Family");
        assert_eq!(category_from_response(&json!({"label": "x"})), UNCATEGORIZED);
        assert_eq!(category_from_response(&json!({"categorie": 7})), UNCATEGORIZED);
    }

    #[test]
    fn test_categorized_result_shape() {
        let out = CategorizedResult {
            result: RedactionResult::new(vec![], "text".into(), UrgencyLevel::Low),
            category: None,
        };
        let value = serde_json::to_value(&out).unwrap();
        assert_eq!(value["sanitizedText"], "text");
        assert!(value["category"].is_null());
    }

    #[test]
    fn test_unreachable_endpoint_yields_none() {
        let client = CategorizeClient::new("http://127.0.0.1:9/categorize", Duration::from_secs(2));
        assert_eq!(client.categorize("[NUME] a semnat."), None);
    }
}
