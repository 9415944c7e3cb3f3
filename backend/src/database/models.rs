//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. API-facing shapes live next to them where they differ.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A persisted festival event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub description: String,
    /// Day of the month the event takes place on.
    pub date: i64,
    pub hot: bool,
    pub start_time: String,
    pub end_time: String,
    pub created_at: DateTime<Utc>,
}

/// Event fields accepted at creation time, after the payload shape check.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewEvent {
    #[validate(length(
        min = 1,
        max = 255,
        message = "title must be between 1-255 characters"
    ))]
    pub title: String,
    #[validate(url(message = "imageUrl must be a valid URL"))]
    pub image_url: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(range(min = 1, max = 31, message = "date must be a day of the month (1-31)"))]
    pub date: i64,
    pub hot: bool,
    #[validate(custom(function = "validate_clock_time"))]
    pub start_time: String,
    #[validate(custom(function = "validate_clock_time"))]
    pub end_time: String,
}

/// Insert DTO for the events table.
#[derive(Debug, Clone)]
pub struct CreateEvent {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub date: i64,
    pub hot: bool,
    pub start_time: String,
    pub end_time: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Insert DTO for the users table.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Public view of a user, without the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Accepts 24-hour `HH:MM` times such as `20:00`.
fn validate_clock_time(value: &str) -> Result<(), ValidationError> {
    let valid = match value.split_once(':') {
        Some((hours, minutes)) if hours.len() == 2 && minutes.len() == 2 => {
            matches!(hours.parse::<u8>(), Ok(h) if h < 24)
                && matches!(minutes.parse::<u8>(), Ok(m) if m < 60)
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("clock_time").with_message("must be a time in HH:MM format".into()))
    }
}
