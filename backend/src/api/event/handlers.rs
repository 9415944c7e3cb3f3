//! Handler functions for event API endpoints.

use super::validation::validate_new_event;
use crate::api::common::{MessageResponse, json_payload};
use crate::app::AppState;
use crate::database::models::Event;
use crate::errors::ServiceError;
use crate::services::event_service::EventService;
use crate::utils::jwt::Claims;
use axum::{
    Json,
    extract::{Extension, State, rejection::JsonRejection},
    response::Json as ResponseJson,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `GET /events`
#[derive(Debug, Serialize, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
}

/// Retrieves every event.
#[axum::debug_handler(state = AppState)]
pub async fn list_events(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<ResponseJson<EventsResponse>, ServiceError> {
    tracing::debug!(user_id = %claims.user_id(), "Listing events");

    let events = EventService::new(&state.pool).list_events().await?;

    Ok(ResponseJson(EventsResponse { events }))
}

/// Validates the payload and stores one new event.
#[axum::debug_handler(state = AppState)]
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<ResponseJson<MessageResponse>, ServiceError> {
    let Value::Object(fields) = json_payload(payload)? else {
        return Err(ServiceError::invalid_payload(
            "Request body must be a JSON object",
        ));
    };

    let new_event = validate_new_event(&fields).map_err(ServiceError::validation)?;

    EventService::new(&state.pool).create_event(new_event).await?;

    Ok(ResponseJson(MessageResponse::new("Event Added Successfully")))
}
