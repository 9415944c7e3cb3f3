//! Core business logic for the authentication system.

use crate::api::common::validation_errors_to_field_errors;
use crate::auth::models::*;
use crate::errors::{ServiceError, ServiceResult};
use crate::services::user_service::UserService;
use crate::utils::jwt::JwtUtils;
use sqlx::SqlitePool;
use validator::Validate;

/// Authentication service for registration and token issuance
pub struct AuthService<'a> {
    jwt_utils: &'a JwtUtils,
    user_service: UserService<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService instance
    pub fn new(pool: &'a SqlitePool, jwt_utils: &'a JwtUtils, bcrypt_cost: u32) -> Self {
        AuthService {
            jwt_utils,
            user_service: UserService::new(pool, bcrypt_cost),
        }
    }

    /// Register a new user account
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        validate_request(&request)?;

        let user = self
            .user_service
            .create_user(request.name, request.email.to_lowercase(), request.password)
            .await?;

        Ok(RegisterResponse {
            message: "User Registered Successfully".to_string(),
            user: user.into(),
        })
    }

    /// Authenticate user and generate a JWT access token
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        validate_request(&request)?;

        let user = self
            .user_service
            .authenticate_user(&request.email.to_lowercase(), &request.password)
            .await?;

        let access_token = self
            .jwt_utils
            .generate_token(user.id.clone(), user.email.clone())?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginResponse {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.jwt_utils.expires_in_seconds(),
            user: user.into(),
        })
    }
}

fn validate_request(request: &impl Validate) -> ServiceResult<()> {
    request
        .validate()
        .map_err(|e| ServiceError::validation(validation_errors_to_field_errors(&e, str::to_string)))
}
