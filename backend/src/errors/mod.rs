//! Global application error types and handlers.
//!
//! This module defines the error type shared by the service, repository and
//! handler layers, and how each variant is rendered as an HTTP response.

use crate::api::common::{ErrorResponse, FieldError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Generic service error that can be used across all entities
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {} field(s) rejected", .details.len())]
    Validation { details: Vec<FieldError> },

    #[error("Invalid payload: {message}")]
    InvalidPayload { message: String },

    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    #[error("{entity} not found: {identifier}")]
    NotFound { entity: String, identifier: String },

    #[error("{entity} already exists: {identifier}")]
    AlreadyExists { entity: String, identifier: String },

    #[error("Database error: {source}")]
    Database {
        #[from]
        source: anyhow::Error,
    },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn validation(details: Vec<FieldError>) -> Self {
        Self::Validation { details }
    }

    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::InvalidPayload {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    pub fn already_exists(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation { .. } | ServiceError::InvalidPayload { .. } => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::AlreadyExists { .. } => StatusCode::CONFLICT,
            ServiceError::Database { .. } | ServiceError::InternalError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(error: sqlx::Error) -> Self {
        ServiceError::Database {
            source: error.into(),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ServiceError::Validation { details } => {
                ErrorResponse::new("Validation failed", "validation_error").with_details(details)
            }
            ServiceError::InvalidPayload { message } => {
                ErrorResponse::new(message, "invalid_payload")
            }
            ServiceError::Unauthorized { message } => ErrorResponse::new(message, "unauthorized"),
            ServiceError::NotFound { entity, identifier } => ErrorResponse::new(
                format!("{} '{}' not found", entity, identifier),
                "not_found",
            ),
            ServiceError::AlreadyExists { entity, identifier } => ErrorResponse::new(
                format!("{} '{}' already exists", entity, identifier),
                "already_exists",
            ),
            ServiceError::Database { source } => {
                tracing::error!("Database error: {:#}", source);
                ErrorResponse::new("Internal Server Error", "database_error")
            }
            ServiceError::InternalError { message } => {
                tracing::error!("Internal error: {}", message);
                ErrorResponse::new("Internal Server Error", "internal_error")
            }
        };

        (status, Json(body)).into_response()
    }
}
