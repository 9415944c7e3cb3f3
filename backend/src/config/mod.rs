//! Central module for application-wide configuration settings.
//!
//! This module handles loading configuration parameters such as the database
//! URL, server port, token signing settings and route protection flags.

use anyhow::{Context, Result, bail};
use std::env;

/// Upper bound for `JWT_EXPIRES_IN_SECONDS` (ten years).
pub const MAX_JWT_EXPIRES_IN_SECONDS: u64 = 10 * 365 * 24 * 60 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub jwt_secret: String,
    pub jwt_expires_in_seconds: u64,
    pub server_port: u16,
    /// Puts the auth guard in front of `POST /events` as well.
    pub events_create_requires_auth: bool,
    pub bcrypt_cost: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL not set")?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid number")?;

        let acquire_timeout_seconds = env::var("DB_ACQUIRE_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "3".to_string())
            .parse::<u64>()
            .context("DB_ACQUIRE_TIMEOUT_SECONDS must be a valid number")?;

        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET not set")?;

        let jwt_expires_in_seconds = parse_jwt_expires_in(
            &env::var("JWT_EXPIRES_IN_SECONDS").unwrap_or_else(|_| "86400".to_string()),
        )?;

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        let events_create_requires_auth = env::var("EVENTS_CREATE_REQUIRES_AUTH")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .context("EVENTS_CREATE_REQUIRES_AUTH must be true or false")?;

        let bcrypt_cost = match env::var("BCRYPT_COST") {
            Ok(value) => value
                .parse::<u32>()
                .context("BCRYPT_COST must be a valid number")?,
            Err(_) => bcrypt::DEFAULT_COST,
        };

        Ok(Config {
            database_url,
            max_connections,
            acquire_timeout_seconds,
            jwt_secret,
            jwt_expires_in_seconds,
            server_port,
            events_create_requires_auth,
            bcrypt_cost,
        })
    }
}

/// Parses a token lifetime, rejecting values past `MAX_JWT_EXPIRES_IN_SECONDS`.
fn parse_jwt_expires_in(raw: &str) -> Result<u64> {
    let seconds = raw
        .parse::<u64>()
        .context("JWT_EXPIRES_IN_SECONDS must be a valid number")?;
    if seconds > MAX_JWT_EXPIRES_IN_SECONDS {
        bail!(
            "JWT_EXPIRES_IN_SECONDS must not exceed {} seconds",
            MAX_JWT_EXPIRES_IN_SECONDS
        );
    }
    Ok(seconds)
}
