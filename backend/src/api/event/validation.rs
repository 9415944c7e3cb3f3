//! Explicit validation of event creation payloads.
//!
//! A payload is checked in two passes: first every required field must be
//! present with the right JSON type, then the typed `NewEvent` is run through
//! its `validator` rules. Either pass yields one `FieldError` per problem,
//! named the way the client spelled the field and listed in `EVENT_FIELDS`
//! order.

use crate::api::common::{FieldError, validation_errors_to_field_errors};
use crate::database::models::NewEvent;
use serde_json::{Map, Value};
use validator::Validate;

/// Older clients send the image under this key.
const IMAGE_URL_ALIAS: &str = "imagePublicId";

/// `NewEvent` field name and payload key, in declaration order.
const EVENT_FIELDS: [(&str, &str); 7] = [
    ("title", "title"),
    ("image_url", "imageUrl"),
    ("description", "description"),
    ("date", "date"),
    ("hot", "hot"),
    ("start_time", "startTime"),
    ("end_time", "endTime"),
];

/// Maps an arbitrary JSON object to a `NewEvent`, or lists what is wrong with it.
///
/// Keys other than the seven event fields are ignored and never persisted.
pub fn validate_new_event(fields: &Map<String, Value>) -> Result<NewEvent, Vec<FieldError>> {
    let mut errors = Vec::new();

    let title = string_field(fields, "title", None, &mut errors);
    let image_url = string_field(fields, "imageUrl", Some(IMAGE_URL_ALIAS), &mut errors);
    let description = string_field(fields, "description", None, &mut errors);
    let date = day_field(fields, "date", &mut errors);
    let hot = bool_field(fields, "hot", &mut errors);
    let start_time = string_field(fields, "startTime", None, &mut errors);
    let end_time = string_field(fields, "endTime", None, &mut errors);

    let (
        Some(title),
        Some(image_url),
        Some(description),
        Some(date),
        Some(hot),
        Some(start_time),
        Some(end_time),
    ) = (title, image_url, description, date, hot, start_time, end_time)
    else {
        return Err(errors);
    };

    let event = NewEvent {
        title,
        image_url,
        description,
        date,
        hot,
        start_time,
        end_time,
    };

    event.validate().map_err(|e| {
        let mut errors = validation_errors_to_field_errors(&e, payload_key);
        errors.sort_by_key(|error| field_position(&error.field));
        errors
    })?;

    Ok(event)
}

fn lookup<'v>(fields: &'v Map<String, Value>, name: &str, alias: Option<&str>) -> Option<&'v Value> {
    fields
        .get(name)
        .or_else(|| alias.and_then(|alias| fields.get(alias)))
        .filter(|value| !value.is_null())
}

fn string_field(
    fields: &Map<String, Value>,
    name: &str,
    alias: Option<&str>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match lookup(fields, name, alias) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(_) => {
            errors.push(FieldError::new(name, format!("{} must be a string", name)));
            None
        }
        None => {
            errors.push(FieldError::new(name, format!("{} is required", name)));
            None
        }
    }
}

fn day_field(fields: &Map<String, Value>, name: &str, errors: &mut Vec<FieldError>) -> Option<i64> {
    match lookup(fields, name, None) {
        Some(Value::Number(number)) => match number.as_i64() {
            Some(day) => Some(day),
            None => {
                errors.push(FieldError::new(name, format!("{} must be a whole number", name)));
                None
            }
        },
        Some(_) => {
            errors.push(FieldError::new(name, format!("{} must be a number", name)));
            None
        }
        None => {
            errors.push(FieldError::new(name, format!("{} is required", name)));
            None
        }
    }
}

fn bool_field(fields: &Map<String, Value>, name: &str, errors: &mut Vec<FieldError>) -> Option<bool> {
    match lookup(fields, name, None) {
        Some(Value::Bool(flag)) => Some(*flag),
        Some(_) => {
            errors.push(FieldError::new(name, format!("{} must be true or false", name)));
            None
        }
        None => {
            errors.push(FieldError::new(name, format!("{} is required", name)));
            None
        }
    }
}

fn payload_key(field: &str) -> String {
    EVENT_FIELDS
        .iter()
        .find(|(name, _)| *name == field)
        .map_or(field, |&(_, key)| key)
        .to_string()
}

fn field_position(key: &str) -> usize {
    EVENT_FIELDS
        .iter()
        .position(|(_, k)| *k == key)
        .unwrap_or(EVENT_FIELDS.len())
}
