use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recommendation::entities::{Recommendation, Suggestion},
};

fn string_field(entry: &Value, key: &str) -> Option<String> {
    entry
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn suggestion_from_value(entry: &Value) -> Option<Suggestion> {
    Some(Suggestion {
        restaurant: string_field(entry, "restaurant")?,
        menu_item: string_field(entry, "menuItem")?,
        description: string_field(entry, "description")?,
    })
}

/// Turn raw completion text into a recommendation.
///
/// Text that is missing or blank is an empty response. Text that is not a
/// JSON object with a `suggestions` array is malformed and carries the raw
/// text back. Individual entries missing a non-empty `restaurant`,
/// `menuItem` or `description` string are dropped; the rest keep their
/// order.
pub fn parse_recommendation(content: Option<&str>) -> Result<Recommendation, CoreError> {
    let raw = content.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(CoreError::EmptyResponse);
    }

    let parsed: Value = serde_json::from_str(raw).map_err(|e| {
        tracing::error!("Failed to parse LLM response: {}", e);
        CoreError::MalformedResponse(raw.to_string())
    })?;

    let entries = parsed
        .get("suggestions")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            tracing::error!("No suggestions array in LLM response");
            CoreError::MalformedResponse(raw.to_string())
        })?;

    let suggestions: Vec<Suggestion> = entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let suggestion = suggestion_from_value(entry);
            if suggestion.is_none() {
                tracing::warn!(index, "Dropping malformed suggestion: {}", entry);
            }
            suggestion
        })
        .collect();

    Ok(Recommendation { suggestions })
}
