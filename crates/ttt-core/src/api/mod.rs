//! REST API client module for the community backend.
//!
//! This module provides the `ApiClient` for fetching members, member
//! statistics, reference data, live streams and upcoming events.
//!
//! The API is public and unauthenticated; every request goes through the
//! interceptor headers and transport check in `crate::security`.

pub mod client;
pub mod error;

pub use client::{ApiClient, Endpoint};
pub use error::ApiError;
