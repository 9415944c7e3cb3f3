//! Shared response shapes for API handlers.
//!
//! Every error body carries a human-readable `message` and a machine-readable
//! `error_type`. Validation failures add a `details` list with one entry per
//! rejected field.
//!
//! # Error Handling Flow
//! 1. Validation and service code return `ServiceError`
//! 2. `ServiceError`'s `IntoResponse` impl picks the status and builds an `ErrorResponse`
//! 3. Validator errors are flattened into `FieldError`s by `validation_errors_to_field_errors`

use crate::errors::{ServiceError, ServiceResult};
use axum::{Json, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};

/// Body returned for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message
    pub message: String,
    /// Machine-readable error type identifier
    pub error_type: String,
    /// Field-specific validation errors when applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-specific validation error details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the field with validation error
    pub field: String,
    /// Description of the validation failure
    pub message: String,
}

/// Body for endpoints that only report an outcome
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, error_type: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error_type: error_type.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Formats validator::ValidationErrors into field-specific error details.
///
/// `rename` maps struct field names to the names clients used in the payload.
/// Output is sorted by field so responses are stable.
pub fn validation_errors_to_field_errors(
    errors: &validator::ValidationErrors,
    rename: impl Fn(&str) -> String,
) -> Vec<FieldError> {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            let name = rename(&field);
            errors.iter().map(move |error| FieldError {
                field: name.clone(),
                message: error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string()),
            })
        })
        .collect();

    field_errors.sort_by(|a, b| a.field.cmp(&b.field));
    field_errors
}

/// Unwraps a JSON body, turning extractor rejections into `InvalidPayload`.
pub fn json_payload<T>(payload: Result<Json<T>, JsonRejection>) -> ServiceResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ServiceError::invalid_payload(rejection.body_text()))
}
