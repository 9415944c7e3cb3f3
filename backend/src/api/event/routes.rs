//! Defines the HTTP routes for events.

use super::handlers::{create_event, list_events};
use crate::app::AppState;
use crate::auth::middleware::jwt_auth;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// Listing always requires a bearer token; creation only when configured to.
pub fn event_router(state: AppState) -> Router<AppState> {
    let guard = middleware::from_fn_with_state(state.clone(), jwt_auth);

    let create = if state.config.events_create_requires_auth {
        post(create_event).layer(guard.clone())
    } else {
        post(create_event)
    };

    Router::new().route("/events", get(list_events).layer(guard).merge(create))
}
