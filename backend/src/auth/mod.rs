//! Authentication module for user accounts and bearer-token access control.
//!
//! This module provides registration, login (token issuance) and the
//! middleware that guards protected routes.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod service;
