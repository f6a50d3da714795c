//! HTTP client types for Admin API communication.
//!
//! This module provides the foundational HTTP layer: request/response types,
//! the executor with its rate-limit gating and retry loop, and the REST
//! client built on top of it.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async request executor
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`rest::RestClient`]: Higher-level REST API client
//! - [`rest::RestError`]: REST-specific error types
//!
//! # Retry Behavior
//!
//! Every request is admitted through the shared rate limiter, executed, and
//! classified. Rate-limited responses are retried after the server's
//! `Retry-After` hint (uncapped; the remote signal is authoritative).
//! Transient failures (5xx, network errors) are retried with exponential
//! backoff and jitter up to the policy's attempt ceiling. Permanent 4xx
//! failures surface immediately. An optional per-request deadline bounds the
//! whole loop.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    DeadlineExceededError, HttpError, HttpResponseError, InvalidHttpRequestError,
    RetriesExhaustedError,
};
pub use http_client::{HttpClient, CLIENT_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{ApiCallLimit, HttpResponse, PaginationInfo};

// Re-export REST client types at the clients module level
pub use rest::{RestClient, RestError};
