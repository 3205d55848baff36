//! Response payload parsing
//!
//! The service wraps every answer in an object: `{"results": [...]}` for
//! predictions, `{"result": {...}}` for a full record and
//! `{"result": {"zipcode": ...}}` for the location. Anything else is an error.

use serde_json::Value;

use super::LookupError;
use crate::suggestion::Suggestion;

/// Extract suggestions from a prediction payload
///
/// Individual records that fail to parse are skipped rather than failing the
/// whole result set.
pub fn parse_predictions(payload: &Value) -> Result<Vec<Suggestion>, LookupError> {
    let results = non_empty_object(payload)?
        .get("results")
        .and_then(Value::as_array)
        .ok_or(LookupError::MissingPayload("results"))?;

    Ok(results
        .iter()
        .filter_map(|item| match serde_json::from_value::<Suggestion>(item.clone()) {
            Ok(suggestion) => Some(suggestion),
            Err(e) => {
                log::debug!("Skipping malformed suggestion: {}", e);
                None
            }
        })
        .collect())
}

/// Extract the full record from a detail payload
pub fn parse_record(payload: &Value) -> Result<Value, LookupError> {
    match non_empty_object(payload)?.get("result") {
        Some(Value::Null) | None => Err(LookupError::MissingPayload("result")),
        Some(record) => Ok(record.clone()),
    }
}

/// Extract the zip code from a location payload
///
/// Accepts `result.zipcode` and, for older deployments, a top-level `zipcode`.
pub fn parse_location(payload: &Value) -> Result<String, LookupError> {
    let object = non_empty_object(payload)?;
    let zipcode = object
        .get("result")
        .and_then(|result| result.get("zipcode"))
        .or_else(|| object.get("zipcode"))
        .ok_or(LookupError::MissingPayload("zipcode"))?;

    let zipcode = match zipcode {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    };

    if zipcode.is_empty() {
        return Err(LookupError::MissingPayload("zipcode"));
    }
    Ok(zipcode)
}

fn non_empty_object(payload: &Value) -> Result<&serde_json::Map<String, Value>, LookupError> {
    match payload.as_object() {
        Some(object) if !object.is_empty() => Ok(object),
        Some(_) => Err(LookupError::Parse("empty payload".to_string())),
        None => Err(LookupError::Parse("payload is not an object".to_string())),
    }
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod payload_tests;
