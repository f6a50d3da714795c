//! # Shopify Admin API Client
//!
//! A typed Rust client for the Shopify Admin REST API, providing generic
//! CRUD resource services with built-in rate limiting, retries, and
//! cursor-based pagination.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`Credentials`] and [`AdminConfig`]
//! - A shared leaky-bucket [`RateLimiter`] tracking the remote call budget
//!   from response metadata
//! - A [`RetryPolicy`] retrying throttled and transient failures with
//!   backoff and jitter, under an optional per-request deadline
//! - A generic [`rest::RestResource`] service: `find`, `all`, `pages`,
//!   `count`, `save`, `delete`, with nested sub-resource variants
//! - Lazy, restartable page sequences over cursor- or since-id-paginated
//!   listings
//! - Typed resource shapes (price rules, discount codes, orders, pages,
//!   themes, assets, collections) under [`rest::resources`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shopify_admin::{Credentials, RestClient};
//! use shopify_admin::rest::RestResource;
//! use shopify_admin::rest::resources::v2025_10::{DiscountCode, PriceRule};
//!
//! let credentials = Credentials::from_parts("my-store", "shpat_token")?;
//! let client = RestClient::new(&credentials, None);
//!
//! // Create a price rule
//! let rule = PriceRule {
//!     title: Some("Base".to_string()),
//!     value: Some("-10.0".to_string()),
//!     ..Default::default()
//! };
//! let rule = rule.save(&client).await?;
//!
//! // Create a discount code under it (nested resource)
//! let code = DiscountCode {
//!     price_rule_id: rule.id,
//!     code: Some("ABC123".to_string()),
//!     ..Default::default()
//! };
//! let code = code.save(&client).await?;
//!
//! // Walk a listing page by page; every fetch is rate-limit gated
//! let mut pages = PriceRule::pages(&client, None)?;
//! while let Some(page) = pages.next_page().await {
//!     for rule in page?.iter() {
//!         println!("{:?}", rule.title);
//!     }
//! }
//! ```
//!
//! ## Rate Limiting
//!
//! The Admin API enforces a leaky-bucket budget per shop/token pair and
//! reports it on every response. The client tracks that budget in a
//! [`RateLimiter`] and queues outgoing calls (FIFO) when the bucket is
//! drained. All clients built for one set of credentials must share one
//! limiter - cloning a [`RestClient`] preserves the sharing, and
//! [`RestClient::with_limiter`] wires it up explicitly.
//!
//! ## Failure Handling
//!
//! Throttled responses are retried after the server's `Retry-After` hint;
//! transient failures (5xx, network errors) are retried with exponential
//! backoff and jitter up to an attempt ceiling; permanent 4xx failures
//! surface immediately as typed errors ([`rest::ResourceError::NotFound`],
//! [`rest::ResourceError::ValidationFailed`], ...). A per-request deadline
//! bounds the whole retry loop.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime
//! - **Permissive payloads**: Required fields are enforced by the remote,
//!   not locally; typed options are advisory

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;
pub mod throttle;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, AdminConfig, AdminConfigBuilder, ApiVersion, Credentials, HostUrl, ShopDomain};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    ApiCallLimit, DeadlineExceededError, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, InvalidHttpRequestError, PaginationInfo,
    RestClient, RestError, RetriesExhaustedError,
};

// Re-export throttling types
pub use throttle::{Outcome, RateBudget, RateLimiter, RatePermit, RetryDecision, RetryPolicy};
