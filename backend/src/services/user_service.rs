//! User business logic service.
//!
//! Handles registration, credential checks and profile lookups.

use crate::database::models::{CreateUser, User};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use bcrypt::{hash, verify};
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Same message for unknown email and wrong password.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct UserService<'a> {
    /// Shared database connection pool
    pool: &'a SqlitePool,
    /// bcrypt work factor for new password hashes
    bcrypt_cost: u32,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(pool: &'a SqlitePool, bcrypt_cost: u32) -> Self {
        Self { pool, bcrypt_cost }
    }

    /// Creates a new user with a hashed password.
    ///
    /// # Errors
    /// Returns `ServiceError::AlreadyExists` when the email is taken.
    pub async fn create_user(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> ServiceResult<User> {
        let repo = UserRepository::new(self.pool);

        if repo.get_user_by_email(&email).await?.is_some() {
            return Err(ServiceError::already_exists("User", email));
        }

        let password_hash = Self::hash_password(password, self.bcrypt_cost).await?;

        let user = repo
            .create_user(CreateUser {
                id: Uuid::now_v7().to_string(),
                name,
                email,
                password_hash,
                created_at: Utc::now(),
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Checks an email/password pair and returns the matching user.
    pub async fn authenticate_user(&self, email: &str, password: &str) -> ServiceResult<User> {
        let user = UserRepository::new(self.pool)
            .get_user_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::unauthorized(INVALID_CREDENTIALS))?;

        if !Self::verify_password(password.to_string(), user.password_hash.clone()).await? {
            tracing::warn!(user_id = %user.id, "Rejected login with wrong password");
            return Err(ServiceError::unauthorized(INVALID_CREDENTIALS));
        }

        Ok(user)
    }

    /// Retrieves a user or fails with `NotFound`.
    pub async fn get_user_required(&self, id: &str) -> ServiceResult<User> {
        UserRepository::new(self.pool)
            .get_user_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id))
    }

    /// Hashes a password off the async worker threads.
    async fn hash_password(password: String, cost: u32) -> ServiceResult<String> {
        tokio::task::spawn_blocking(move || hash(password, cost))
            .await
            .map_err(|e| ServiceError::internal_error(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| ServiceError::internal_error(format!("Password hashing failed: {}", e)))
    }

    async fn verify_password(password: String, password_hash: String) -> ServiceResult<bool> {
        tokio::task::spawn_blocking(move || verify(password, &password_hash))
            .await
            .map_err(|e| ServiceError::internal_error(format!("Password check task failed: {}", e)))?
            .map_err(|e| ServiceError::internal_error(format!("Password check failed: {}", e)))
    }
}
