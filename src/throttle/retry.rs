//! Retry decisions for failed API calls.
//!
//! This module classifies the result of a single request attempt into an
//! [`Outcome`] and provides the [`RetryPolicy`] that decides whether the
//! attempt is reissued and after what delay.

use std::time::Duration;

use rand::Rng;

use crate::clients::{ApiCallLimit, HttpResponse};

/// The classified result of a single request attempt.
///
/// Produced by the request executor once per attempt and consumed by
/// [`RetryPolicy::decide`]. Each variant maps to a different handling
/// strategy:
///
/// - `Success`: surface the response.
/// - `RateLimited`: the bucket is drained; retry after the server's hint.
/// - `Transient`: 5xx or a network-level failure; retry with backoff.
/// - `Permanent`: a 4xx the caller must fix; never retried.
#[derive(Debug)]
pub enum Outcome {
    /// A 2xx response.
    Success(HttpResponse),
    /// A throttled response (429, or an exhausted call-limit header).
    RateLimited(HttpResponse),
    /// A 5xx response or a network/timeout error.
    Transient(TransientCause),
    /// Any other 4xx response.
    Permanent(HttpResponse),
}

/// The cause of a transient failure.
#[derive(Debug)]
pub enum TransientCause {
    /// The server answered with a 5xx status.
    Status(HttpResponse),
    /// The request never completed (connection error, timeout, etc.).
    Network(reqwest::Error),
}

impl Outcome {
    /// Classifies a raw transport result into an `Outcome`.
    ///
    /// Status mapping: 2xx is success; 429 is rate-limited, as is any other
    /// non-5xx error status whose call-limit header reports a drained bucket;
    /// 5xx and transport errors are transient; the remaining 4xx are
    /// permanent.
    #[must_use]
    pub fn classify(result: Result<HttpResponse, reqwest::Error>) -> Self {
        let response = match result {
            Ok(response) => response,
            Err(error) => return Self::Transient(TransientCause::Network(error)),
        };

        if response.is_ok() {
            return Self::Success(response);
        }

        if response.code >= 500 {
            return Self::Transient(TransientCause::Status(response));
        }

        let bucket_drained = response
            .api_call_limit
            .is_some_and(|limit| limit.remaining() == 0);
        if response.code == 429 || bucket_drained {
            return Self::RateLimited(response);
        }

        Self::Permanent(response)
    }

    /// Returns the call-limit metadata observed in this attempt, if any.
    #[must_use]
    pub fn call_limit(&self) -> Option<ApiCallLimit> {
        self.response().and_then(|r| r.api_call_limit)
    }

    /// Returns the `Retry-After` value observed in this attempt, if any.
    #[must_use]
    pub fn retry_after(&self) -> Option<f64> {
        self.response().and_then(|r| r.retry_request_after)
    }

    /// Returns the underlying response for variants that carry one.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        match self {
            Self::Success(response)
            | Self::RateLimited(response)
            | Self::Permanent(response)
            | Self::Transient(TransientCause::Status(response)) => Some(response),
            Self::Transient(TransientCause::Network(_)) => None,
        }
    }
}

/// The policy's verdict for one completed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Surface the outcome to the caller as-is.
    Stop,
    /// Sleep for the given duration, then reissue the request.
    RetryAfter(Duration),
}

/// Decides whether a failed call is retried, and the delay before retry.
///
/// The policy is pure: given an [`Outcome`] and the 1-based attempt counter
/// it returns a [`RetryDecision`]. Deadlines spanning all attempts are
/// enforced by the caller (the executor's retry loop), which knows the
/// elapsed wall time.
///
/// # Rules
///
/// - Rate-limited: always retried, after the server-reported `Retry-After`
///   (clamped at zero) or [`base_delay`](Self::base_delay) when the header
///   is absent. The attempt counter is not capped; the remote signal is
///   authoritative.
/// - Transient: retried with exponential backoff (`base_delay` doubling per
///   attempt, capped at `max_delay`) plus a small random jitter, up to
///   `max_attempts` total attempts.
/// - Success and permanent failures: never retried.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use shopify_admin::RetryPolicy;
///
/// let policy = RetryPolicy::default()
///     .max_attempts(5)
///     .base_delay(Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
    max_delay: Duration,
    jitter: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(8),
            jitter: Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    /// Sets the total attempt ceiling for transient failures (minimum 1).
    #[must_use]
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Sets the first-retry delay, which doubles on each further attempt.
    #[must_use]
    pub const fn base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Sets the backoff cap.
    #[must_use]
    pub const fn max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Sets the upper bound of the random jitter added to each backoff.
    #[must_use]
    pub const fn jitter(mut self, jitter: Duration) -> Self {
        self.jitter = jitter;
        self
    }

    /// Decides what to do after the given attempt produced `outcome`.
    ///
    /// `attempt` is 1-based and counts the attempt that just completed.
    #[must_use]
    pub fn decide(&self, outcome: &Outcome, attempt: u32) -> RetryDecision {
        match outcome {
            Outcome::Success(_) | Outcome::Permanent(_) => RetryDecision::Stop,
            Outcome::RateLimited(response) => {
                let delay = response
                    .retry_request_after
                    .map_or(self.base_delay, |secs| Duration::from_secs_f64(secs.max(0.0)));
                RetryDecision::RetryAfter(delay)
            }
            Outcome::Transient(_) => {
                if attempt >= self.max_attempts {
                    RetryDecision::Stop
                } else {
                    RetryDecision::RetryAfter(self.backoff_delay(attempt))
                }
            }
        }
    }

    /// Exponential backoff with jitter for the given 1-based attempt.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        // Shift capped so the multiplier cannot overflow u32
        let exponent = attempt.saturating_sub(1).min(16);
        let scaled = self
            .base_delay
            .saturating_mul(1_u32 << exponent)
            .min(self.max_delay);

        let jitter_ms = u64::try_from(self.jitter.as_millis()).unwrap_or(u64::MAX);
        if jitter_ms == 0 {
            return scaled;
        }
        scaled + Duration::from_millis(rand::thread_rng().gen_range(0..=jitter_ms))
    }
}
