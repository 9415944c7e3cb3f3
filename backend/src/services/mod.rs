//! Business logic layer sitting between the HTTP handlers and the repositories.

pub mod event_service;
pub mod user_service;
