use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a scrape request as it arrives on the wire.
///
/// Fields are kept as raw JSON so that any falsy value (absent, `null`,
/// `false`, `0`, `""`) is reported as a missing parameter instead of a
/// malformed body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub source: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
}

impl ScrapeRequest {
    /// Returns `(source, category)` when both are present and truthy.
    ///
    /// Strings are taken as-is; non-zero numbers and `true` are rendered
    /// with their JSON text. Arrays and objects count as missing.
    #[must_use]
    pub fn params(&self) -> Option<(String, String)> {
        let source = param_text(self.source.as_ref())?;
        let category = param_text(self.category.as_ref())?;
        Some((source, category))
    }
}

fn param_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_owned()),
        _ => None,
    }
}

/// A synthetic product listing standing in for one scraped record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockProduct {
    /// 1-based position in the generated batch.
    pub id: u32,
    /// `"{source}_{category}_{id}"`.
    pub external_id: String,
    /// `"{category} Product {id}"`.
    pub title: String,
    /// Two-decimal price string without currency symbol, e.g. `"42.17"`.
    pub price: String,
    pub category: String,
    pub source: String,
}

/// Envelope returned to the caller after a (simulated) scraping job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResult {
    pub success: bool,
    pub job_id: String,
    /// Size of the full generated batch, not of `products`.
    pub total_products: usize,
    /// Preview slice of the batch.
    pub products: Vec<MockProduct>,
    pub message: String,
}
