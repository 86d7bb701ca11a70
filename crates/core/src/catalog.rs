//! Parsing of remote top-100 catalog documents.
//!
//! A catalog document is a JSON array of game objects. Some exports wrap
//! entries in nested arrays, so one level of nesting is flattened. Field
//! names differ between platforms, so each target field has an ordered list
//! of candidate keys; the first usable candidate wins and an empty string is
//! used when none is present.

use serde_json::Value;

use crate::error::CoreError;

/// Candidate keys for the publisher identifier.
const PUBLISHER_ID_KEYS: &[&str] = &["publisher_id", "publisherId"];

/// Candidate keys for the display name.
const NAME_KEYS: &[&str] = &["name"];

/// Candidate keys for the store identifier.
const STORE_ID_KEYS: &[&str] = &["id"];

/// Candidate keys for the bundle / package identifier.
const BUNDLE_ID_KEYS: &[&str] = &["bundle_id"];

/// Candidate keys for the version label.
const APP_VERSION_KEYS: &[&str] = &["app_version", "version"];

/// One game read from a remote catalog, before it is tagged with a platform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogEntry {
    pub publisher_id: String,
    pub name: String,
    pub store_id: String,
    pub bundle_id: String,
    pub app_version: String,
}

impl CatalogEntry {
    /// Build an entry from a single catalog object.
    pub fn from_object(obj: &serde_json::Map<String, Value>) -> Self {
        Self {
            publisher_id: first_text(obj, PUBLISHER_ID_KEYS),
            name: first_text(obj, NAME_KEYS),
            store_id: first_text(obj, STORE_ID_KEYS),
            bundle_id: first_text(obj, BUNDLE_ID_KEYS),
            app_version: first_text(obj, APP_VERSION_KEYS),
        }
    }
}

/// Parse a whole catalog document into entries, preserving document order.
///
/// Non-object entries are skipped. Returns [`CoreError::Validation`] if the
/// document itself is not an array.
pub fn parse_catalog(doc: &Value) -> Result<Vec<CatalogEntry>, CoreError> {
    let items = doc.as_array().ok_or_else(|| {
        CoreError::Validation(format!(
            "Catalog document must be a JSON array, got {}",
            kind_of(doc)
        ))
    })?;

    let entries = items
        .iter()
        .flat_map(|item| match item {
            Value::Array(nested) => nested.iter().collect::<Vec<_>>(),
            other => vec![other],
        })
        .filter_map(Value::as_object)
        .map(CatalogEntry::from_object)
        .collect();

    Ok(entries)
}

/// Return the first candidate value that carries text.
///
/// Non-empty strings are used as-is and non-zero numbers are rendered in
/// decimal. Anything else (null, `""`, `0`, booleans, objects) falls through
/// to the next candidate.
fn first_text(obj: &serde_json::Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find_map(|value| match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_default()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
