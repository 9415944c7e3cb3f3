//! Handler functions for authentication-related API endpoints.

use crate::api::common::json_payload;
use crate::app::AppState;
use crate::auth::models::*;
use crate::auth::service::AuthService;
use crate::database::models::UserResponse;
use crate::errors::ServiceError;
use crate::services::user_service::UserService;
use crate::utils::jwt::Claims;
use axum::{
    Json,
    extract::{Extension, State, rejection::JsonRejection},
    response::Json as ResponseJson,
};

/// Handle user registration request
#[axum::debug_handler(state = AppState)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<ResponseJson<RegisterResponse>, ServiceError> {
    let request = json_payload(payload)?;
    let auth_service = AuthService::new(&state.pool, &state.jwt, state.config.bcrypt_cost);
    auth_service.register(request).await.map(ResponseJson)
}

/// Handle user login request
#[axum::debug_handler(state = AppState)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ResponseJson<LoginResponse>, ServiceError> {
    let request = json_payload(payload)?;
    let auth_service = AuthService::new(&state.pool, &state.jwt, state.config.bcrypt_cost);
    auth_service.login(request).await.map(ResponseJson)
}

/// Get current user information from token
#[axum::debug_handler(state = AppState)]
pub async fn me(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<ResponseJson<UserResponse>, ServiceError> {
    let user = UserService::new(&state.pool, state.config.bcrypt_cost)
        .get_user_required(claims.user_id())
        .await?;
    Ok(ResponseJson(user.into()))
}
