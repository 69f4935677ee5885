//! Boundary validation of provider output.

use reqwest::Url;
use serde_json::{Map, Value};

use crate::error::SchemaViolation;
use crate::types::EventRecord;

/// Validate a candidate `{"events": [...]}` object and build records from it.
///
/// - `title` and `description` must be present, strings, and not blank.
/// - Optional fields may be absent or `null`; present values must be strings.
///   Blank strings are normalised to absent so no empty placeholders survive.
/// - `link`, when present, must parse as an absolute URL of any scheme.
/// - Values are trimmed. Unknown keys are ignored.
///
/// # Errors
///
/// Returns the first [`SchemaViolation`] found. A single bad event rejects
/// the whole candidate.
pub fn validate_candidate(candidate: &Value) -> Result<Vec<EventRecord>, SchemaViolation> {
    let events = candidate
        .get("events")
        .and_then(Value::as_array)
        .ok_or(SchemaViolation::MissingEvents)?;

    events
        .iter()
        .enumerate()
        .map(|(index, event)| validate_event(index, event))
        .collect()
}

fn validate_event(index: usize, event: &Value) -> Result<EventRecord, SchemaViolation> {
    let fields = event
        .as_object()
        .ok_or(SchemaViolation::NotAnObject { index })?;

    let title = required_string(fields, index, "title")?;
    let description = required_string(fields, index, "description")?;

    let link = optional_string(fields, index, "link")?;
    if let Some(link) = &link {
        if Url::parse(link).is_err() {
            return Err(SchemaViolation::InvalidUrl {
                index,
                value: link.clone(),
            });
        }
    }

    Ok(EventRecord {
        title,
        description,
        start_date: optional_string(fields, index, "startDate")?,
        start_time: optional_string(fields, index, "startTime")?,
        end_date: optional_string(fields, index, "endDate")?,
        end_time: optional_string(fields, index, "endTime")?,
        link,
        address: optional_string(fields, index, "address")?,
        cost: optional_string(fields, index, "cost")?,
    })
}

fn required_string(
    fields: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String, SchemaViolation> {
    optional_string(fields, index, field)?.ok_or(SchemaViolation::MissingField { index, field })
}

fn optional_string(
    fields: &Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<Option<String>, SchemaViolation> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
        }
        Some(_) => Err(SchemaViolation::WrongType { index, field }),
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
