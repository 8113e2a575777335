/// Best-effort extraction of a JSON object from free-form model output,
/// plus normalization of the list-typed summary fields

use anyhow::{anyhow, Result};
use regex::Regex;
use serde_json::Value;

/// Summary fields that must always be lists of strings after normalization
pub const LIST_FIELDS: [&str; 4] = [
    "Alternative Medicines",
    "Side Effects",
    "Home Remedies",
    "Lifestyle Tips",
];

lazy_static::lazy_static! {
    // Models often wrap the payload in a Markdown code fence despite being
    // told not to; unwrap it before looking for braces
    static ref CODE_FENCE_RE: Regex = Regex::new(r"```(?:json)?\s*([\s\S]*?)\s*```").unwrap();
    // Greedy match: first '{' through last '}'
    static ref JSON_OBJECT_RE: Regex = Regex::new(r"(?s)\{.*\}").unwrap();
}

/// Locate and parse the first top-level brace-delimited JSON object in the text
///
/// Prefers a greedy full-text match, falling back to slicing from the first
/// `{` to the last `}`. Returns an error if no parseable object is found.
pub fn extract_json(response_text: &str) -> Result<Value> {
    let text = CODE_FENCE_RE
        .captures(response_text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(response_text);

    if let Some(m) = JSON_OBJECT_RE.find(text) {
        if let Ok(parsed) = serde_json::from_str::<Value>(m.as_str()) {
            return Ok(parsed);
        }
    }

    // Fall back to basic extraction
    let start = text.find('{');
    let end = text.rfind('}');
    match (start, end) {
        (Some(start), Some(end)) if end > start => {
            serde_json::from_str::<Value>(&text[start..=end])
                .map_err(|e| anyhow!("invalid JSON in model reply: {e}"))
        }
        _ => Err(anyhow!("no JSON object found in model reply")),
    }
}

/// Whether a value would be treated as empty when coerced to a list
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.trim().is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn coerce_element(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Coerce the known list-typed fields to a list-of-strings shape
///
/// Present scalar values become single-element lists, empty values become
/// empty lists, and existing arrays have their elements stringified. Absent
/// fields are left absent.
pub fn normalize_list_fields(record: &mut Value) {
    let Some(obj) = record.as_object_mut() else {
        return;
    };

    for field in LIST_FIELDS {
        let Some(value) = obj.get_mut(field) else {
            continue;
        };

        let normalized = match &*value {
            Value::Array(items) => items.iter().map(coerce_element).collect(),
            v if is_empty_value(v) => Vec::new(),
            v => vec![coerce_element(v)],
        };

        *value = Value::Array(normalized.into_iter().map(Value::String).collect());
    }
}
