//! Shared helpers used across the API and auth layers.

pub mod jwt;
