//! Call-budget throttling and retry policy.
//!
//! The Admin API enforces a leaky-bucket rate limit per shop/token pair:
//! every response reports the bucket state in the
//! `X-Shopify-Shop-Api-Call-Limit` header ("used/allowed"), and throttled
//! responses carry a `Retry-After` hint. This module keeps the client inside
//! that budget and decides when failed calls are reissued.
//!
//! # Overview
//!
//! - [`RateLimiter`]: gates outgoing calls against the tracked [`RateBudget`].
//!   [`RateLimiter::admit`] suspends (without busy-spinning) until a unit of
//!   budget is available and reserves it; the returned [`RatePermit`] feeds
//!   response metadata back via [`RatePermit::record`].
//! - [`RetryPolicy`]: pure decision function from an attempt's [`Outcome`]
//!   and the attempt counter to [`RetryDecision`] - either stop and surface
//!   the outcome, or sleep and reissue.
//!
//! One `RateLimiter` must be shared by every client using the same
//! credentials; see [`HttpClient::with_limiter`](crate::clients::HttpClient::with_limiter).

mod limiter;
mod retry;

pub use limiter::{RateBudget, RateLimiter, RatePermit, DEFAULT_BUCKET_SIZE};
pub use retry::{Outcome, RetryDecision, RetryPolicy, TransientCause};
