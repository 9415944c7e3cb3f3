//! Middleware for protecting authenticated routes.
//!
//! Validates the bearer JWT and hands the decoded claims to handlers through
//! the request extensions.

use crate::app::AppState;
use crate::errors::ServiceError;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

/// JWT authentication middleware
pub async fn jwt_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServiceError> {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| ServiceError::unauthorized("Unauthorized"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ServiceError::unauthorized("Unauthorized"))?;

    match state.jwt.validate_token(token) {
        Ok(claims) => {
            // Add claims to request extensions for use in handlers
            request.extensions_mut().insert(claims);
            Ok(next.run(request).await)
        }
        Err(error) => {
            tracing::debug!("Rejected bearer token: {}", error);
            Err(ServiceError::unauthorized("Unauthorized"))
        }
    }
}
