//! Field extraction from loosely structured measurement documents.
//!
//! Documents arrive in two layouts: the measurement fields either sit at the
//! top level or inside a nested `content` object. The temperature key also
//! appears under two spellings, ASCII and accented.

use serde_json::Value;
use thiserror::Error;

use super::Measurement;

// Accepted source keys per logical field, tried in order.
const LOCATION_KEYS: &[&str] = &["paikkakunta"];
const DATE_KEYS: &[&str] = &["pvm"];
const TEMPERATURE_KEYS: &[&str] = &["lampotila", "lämpötila"];

/// Placeholder reported for documents that carry no id at all.
pub const UNKNOWN_ID: &str = "?";

/// Outcome of extracting a single document.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Row(Measurement),
    Skip(Skip),
}

/// A document excluded from the migration, and why.
#[derive(Debug, Clone, PartialEq)]
pub struct Skip {
    pub id: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SkipReason {
    #[error("missing field `{0}`")]
    MissingField(&'static str),
    #[error("temperature is not a number: {0}")]
    BadTemperature(String),
}

/// Maps one document to a measurement, or to a skip when a required field is
/// missing or unreadable. Never fails the whole batch for one bad document.
pub fn extract(document: &Value) -> Extraction {
    let id = match scalar_string(document.get("id")) {
        Some(id) => id,
        None => return skip(UNKNOWN_ID.to_string(), SkipReason::MissingField("id")),
    };

    let source = match field_source(document) {
        Some(source) => source,
        None => return skip(id, SkipReason::MissingField("paikkakunta")),
    };

    let location = match scalar_string(lookup(source, LOCATION_KEYS)) {
        Some(location) => location,
        None => return skip(id, SkipReason::MissingField("paikkakunta")),
    };

    let date = match scalar_string(lookup(source, DATE_KEYS)) {
        Some(date) => date,
        None => return skip(id, SkipReason::MissingField("pvm")),
    };

    let temperature = match lookup(source, TEMPERATURE_KEYS) {
        Some(value) => match coerce_f64(value) {
            Some(temperature) => temperature,
            None => return skip(id, SkipReason::BadTemperature(value.to_string())),
        },
        None => return skip(id, SkipReason::MissingField("lampotila")),
    };

    Extraction::Row(Measurement {
        id,
        location,
        date,
        temperature,
    })
}

fn skip(id: String, reason: SkipReason) -> Extraction {
    Extraction::Skip(Skip { id, reason })
}

/// Picks the mapping the fields are read from. Candidates are tried in
/// order, and the first one carrying a non-null location wins.
fn field_source(document: &Value) -> Option<&Value> {
    let candidates = [
        Some(document),
        document.get("content").filter(|content| content.is_object()),
    ];

    candidates
        .into_iter()
        .flatten()
        .find(|source| lookup(source, LOCATION_KEYS).is_some())
}

/// First non-null value under any of the accepted keys.
fn lookup<'a>(source: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| source.get(key))
        .find(|value| !value.is_null())
}

// Strings and numbers stringify; anything else counts as missing.
fn scalar_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

// -- Tests -------------------------------------------------------------------
