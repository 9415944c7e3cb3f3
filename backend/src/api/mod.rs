//! Central module for organizing the application's main API endpoints.
//!
//! Authentication routes live in `crate::auth`; everything else is grouped
//! here by domain.

pub mod common;
pub mod event;
