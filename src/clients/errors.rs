//! HTTP-specific error types.
//!
//! This module contains the error types surfaced by the HTTP layer. The
//! taxonomy distinguishes the three things a caller can do about a failure:
//!
//! - [`HttpResponseError`]: a permanent 4xx - fix the request, retrying
//!   cannot help.
//! - [`RetriesExhaustedError`]: transient failures (5xx, network errors)
//!   persisted past the retry ceiling - the remote side is saturated, try
//!   later.
//! - [`DeadlineExceededError`]: the caller-supplied deadline elapsed while
//!   the client was still retrying - the deadline was too short for the
//!   observed conditions.
//! - [`InvalidHttpRequestError`]: the request failed validation before
//!   anything was sent.
//!
//! Rate-limited and transient responses are retried internally and never
//! surface unless the retry budget or deadline runs out.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_admin::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => {
//!         println!("API rejected the request ({}): {}", e.code, e.message);
//!     }
//!     Err(HttpError::RetriesExhausted(e)) => {
//!         println!("Still failing after {} tries", e.tries);
//!     }
//!     Err(HttpError::DeadlineExceeded(e)) => {
//!         println!("Gave up after {:?}", e.elapsed);
//!     }
//!     Err(HttpError::InvalidRequest(e)) => {
//!         println!("Invalid request: {}", e);
//!     }
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

/// Error returned when the API answers with a non-retryable 4xx status.
///
/// The message field carries the remote error payload serialized to JSON,
/// including the request-id reference when the response provided one.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from the X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when transient failures persisted past the retry ceiling.
#[derive(Debug, Error)]
#[error("Exhausted {tries} attempts. Last failure: {message}")]
pub struct RetriesExhaustedError {
    /// The HTTP status code of the last response, if one was received.
    pub code: Option<u16>,
    /// The number of attempts that were made.
    pub tries: u32,
    /// Description of the last failure.
    pub message: String,
    /// Reference ID for error reporting (from the X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when the caller-supplied deadline elapsed during retries.
///
/// The pending retry is abandoned; the in-flight attempt that observed the
/// deadline was allowed to complete and its outcome is summarized in
/// `message`.
#[derive(Debug, Error)]
#[error("Deadline exceeded after {attempts} attempt(s) ({elapsed:?} elapsed). Last failure: {message}")]
pub struct DeadlineExceededError {
    /// The number of attempts completed before giving up.
    pub attempts: u32,
    /// Wall time spent across all attempts and waits.
    pub elapsed: Duration,
    /// Description of the last observed failure.
    pub message: String,
}

/// Error returned when an HTTP request fails validation before sending.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related failures.
///
/// Every variant carries enough detail to distinguish "fix your request"
/// (`Response`, `InvalidRequest`) from "the remote is saturated, try later"
/// (`RetriesExhausted`) from "your own deadline was too short"
/// (`DeadlineExceeded`).
#[derive(Debug, Error)]
pub enum HttpError {
    /// A permanent HTTP response error (non-retryable 4xx).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Transient failures persisted past the retry ceiling.
    #[error(transparent)]
    RetriesExhausted(#[from] RetriesExhaustedError),

    /// The caller-supplied deadline elapsed mid-retry.
    #[error(transparent)]
    DeadlineExceeded(#[from] DeadlineExceededError),

    /// Request validation failed before anything was sent.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),
}
