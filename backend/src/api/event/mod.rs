//! Module for festival event API endpoints.
//!
//! Listing and creation of events, plus the payload validation that runs
//! before anything reaches the store.

pub mod handlers;
pub mod routes;
pub mod validation;
