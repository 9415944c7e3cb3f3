//! Persistence layer: one repository per table.

pub mod event_repository;
pub mod user_repository;
