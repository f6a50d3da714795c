//! REST client for the Admin API.
//!
//! This module provides the [`RestClient`] type and its error types for
//! making REST API requests with automatic path normalization, rate-limit
//! gating, and retry handling.

mod client;
mod errors;

pub use client::RestClient;
pub use errors::RestError;
