//! Leaky-bucket call budget tracking and admission gating.

use std::sync::{Mutex as StdMutex, PoisonError};
use std::time::Duration;

use tokio::sync::Mutex as AsyncMutex;

use crate::clients::ApiCallLimit;

/// The remote's standard bucket capacity, assumed until a response reports
/// the real value.
pub const DEFAULT_BUCKET_SIZE: u32 = 40;

/// Conservative wait used when the bucket is drained and the server gave no
/// reset hint.
const EXHAUSTED_FALLBACK_WAIT: Duration = Duration::from_millis(500);

/// A snapshot of the tracked call budget.
///
/// The budget is only ever overwritten from response metadata (the
/// "used/allowed" call-limit header), or pessimistically decremented by one
/// when a completed call carried no metadata. It is never guessed down
/// locally beyond that.
#[derive(Debug, Clone, Copy)]
pub struct RateBudget {
    remaining: u32,
    capacity: u32,
    reset_after: Option<f64>,
    reserved: u32,
}

impl RateBudget {
    const fn full(capacity: u32) -> Self {
        Self {
            remaining: capacity,
            capacity,
            reset_after: None,
            reserved: 0,
        }
    }

    /// Calls left in the current window, as last reported by the server.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// The bucket size, as last reported by the server.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Units not yet spendable: already reserved by admitted in-flight calls.
    const fn available(&self) -> u32 {
        self.remaining.saturating_sub(self.reserved)
    }

    fn wait_hint(&self) -> Duration {
        self.reset_after
            .filter(|secs| *secs > 0.0)
            .map_or(EXHAUSTED_FALLBACK_WAIT, Duration::from_secs_f64)
    }

    fn assume_refilled(&mut self) {
        self.remaining = self.capacity;
        self.reset_after = None;
    }
}

/// Gates outgoing calls against the shared [`RateBudget`].
///
/// One limiter must exist per (shop domain, access token) pair: every client
/// sharing those credentials draws from the same remote bucket, so they must
/// also share the local bookkeeping. Clients hold the limiter behind an
/// `Arc`; see [`HttpClient::with_limiter`](crate::clients::HttpClient::with_limiter).
///
/// # Behavior
///
/// [`admit`](Self::admit) suspends cooperatively until at least one unit of
/// budget is available, then reserves it and returns a [`RatePermit`].
/// Admission is FIFO: concurrent callers queue in arrival order on a fair
/// async mutex. When the bucket is drained, the next admitter sleeps for the
/// server's reset hint (or a 500 ms fallback) while everyone behind it waits
/// in the queue.
///
/// Admission never fails; at worst it delays.
#[derive(Debug)]
pub struct RateLimiter {
    /// Fair queue serializing admitters; held across the throttle sleep so
    /// arrival order is preserved.
    admission: AsyncMutex<()>,
    budget: StdMutex<RateBudget>,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new()
    }
}

impl RateLimiter {
    /// Creates a limiter with the default bucket capacity, optimistically
    /// assumed full until the first response reports otherwise.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUCKET_SIZE)
    }

    /// Creates a limiter with a specific initial bucket capacity.
    #[must_use]
    pub fn with_capacity(capacity: u32) -> Self {
        let capacity = capacity.max(1);
        Self {
            admission: AsyncMutex::new(()),
            budget: StdMutex::new(RateBudget::full(capacity)),
        }
    }

    /// Waits until a unit of budget is available and reserves it.
    ///
    /// The returned permit must be fed the response's rate-limit metadata via
    /// [`RatePermit::record`]; if the call never completes (or the caller
    /// drops the permit early), dropping it applies the defensive
    /// single-unit decrement instead. Either way the reservation is released.
    pub async fn admit(&self) -> RatePermit<'_> {
        let _first_in_line = self.admission.lock().await;
        loop {
            let wait = {
                let mut budget = self.lock_budget();
                if budget.available() > 0 {
                    budget.reserved += 1;
                    return RatePermit {
                        limiter: self,
                        recorded: false,
                    };
                }
                budget.wait_hint()
            };

            tracing::warn!(
                wait_ms = u64::try_from(wait.as_millis()).unwrap_or(u64::MAX),
                "call budget exhausted; delaying admission"
            );
            tokio::time::sleep(wait).await;

            // The wait covered the reset hint, so treat the window as fresh.
            self.lock_budget().assume_refilled();
        }
    }

    /// Returns a copy of the current budget state.
    #[must_use]
    pub fn budget(&self) -> RateBudget {
        *self.lock_budget()
    }

    fn lock_budget(&self) -> std::sync::MutexGuard<'_, RateBudget> {
        self.budget.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply(&self, limit: Option<ApiCallLimit>, retry_after: Option<f64>) {
        let mut budget = self.lock_budget();
        budget.reserved = budget.reserved.saturating_sub(1);

        match limit {
            Some(limit) => {
                budget.capacity = limit.bucket_size.max(1);
                budget.remaining = limit.remaining();
                budget.reset_after = retry_after;
            }
            None => {
                // No metadata observed: assume the call consumed one unit.
                budget.remaining = budget.remaining.saturating_sub(1);
                if retry_after.is_some() {
                    budget.reset_after = retry_after;
                }
            }
        }
    }
}

/// A reserved unit of call budget, scoped to one request attempt.
///
/// Obtained from [`RateLimiter::admit`]. Call [`record`](Self::record) with
/// the response's metadata once the attempt completes; dropping the permit
/// without recording applies the defensive decrement so the budget stays
/// conservative on error paths.
#[derive(Debug)]
pub struct RatePermit<'a> {
    limiter: &'a RateLimiter,
    recorded: bool,
}

impl RatePermit<'_> {
    /// Records the attempt's observed rate-limit metadata, overwriting the
    /// budget with the server-reported values when present.
    pub fn record(mut self, limit: Option<ApiCallLimit>, retry_after: Option<f64>) {
        self.recorded = true;
        self.limiter.apply(limit, retry_after);
    }
}

impl Drop for RatePermit<'_> {
    fn drop(&mut self) {
        if !self.recorded {
            self.limiter.apply(None, None);
        }
    }
}

// Verify limiter types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RateLimiter>();
    assert_send_sync::<RateBudget>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    fn call_limit(request_count: u32, bucket_size: u32) -> ApiCallLimit {
        ApiCallLimit {
            request_count,
            bucket_size,
        }
    }

    #[tokio::test]
    async fn test_admit_reserves_and_record_overwrites() {
        let limiter = RateLimiter::with_capacity(40);

        let permit = limiter.admit().await;
        permit.record(Some(call_limit(5, 40)), None);

        let budget = limiter.budget();
        assert_eq!(budget.remaining(), 35);
        assert_eq!(budget.capacity(), 40);
    }

    #[tokio::test]
    async fn test_dropped_permit_decrements_defensively() {
        let limiter = RateLimiter::with_capacity(10);

        {
            let _permit = limiter.admit().await;
            // Dropped without recording: the call is assumed to have cost one unit
        }

        assert_eq!(limiter.budget().remaining(), 9);
    }

    #[tokio::test]
    async fn test_admissions_never_exceed_reported_remaining() {
        let limiter = Arc::new(RateLimiter::with_capacity(40));

        // Server says three calls are left in this window
        limiter
            .admit()
            .await
            .record(Some(call_limit(37, 40)), None);

        // Exactly three more admissions fit without touching the clock
        for _ in 0..3 {
            let permit = tokio::time::timeout(Duration::from_millis(10), limiter.admit())
                .await
                .expect("admission should not block while budget remains");
            // Keep the reservation alive past the loop by recording no metadata
            permit.record(None, None);
        }

        // The fourth must block until the window resets
        let blocked = tokio::time::timeout(Duration::from_millis(50), limiter.admit()).await;
        assert!(blocked.is_err(), "admission must block on a drained budget");
    }

    #[tokio::test(start_paused = true)]
    async fn test_drained_budget_waits_for_reset_hint() {
        let limiter = Arc::new(RateLimiter::with_capacity(40));
        limiter
            .admit()
            .await
            .record(Some(call_limit(40, 40)), Some(2.0));

        let started = tokio::time::Instant::now();
        let permit = limiter.admit().await;
        drop(permit);

        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drained_budget_uses_fallback_wait_without_hint() {
        let limiter = RateLimiter::with_capacity(1);
        limiter.admit().await.record(Some(call_limit(1, 1)), None);

        let started = tokio::time::Instant::now();
        let permit = limiter.admit().await;
        drop(permit);

        assert!(started.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_admissions_are_fifo() {
        let limiter = Arc::new(RateLimiter::with_capacity(40));
        // Drain the budget so every admitter has to queue
        limiter
            .admit()
            .await
            .record(Some(call_limit(40, 40)), Some(1.0));

        let order = Arc::new(StdMutex::new(Vec::new()));
        let mut handles = Vec::new();
        for i in 0..4 {
            let limiter = Arc::clone(&limiter);
            let order = Arc::clone(&order);
            handles.push(tokio::spawn(async move {
                let permit = limiter.admit().await;
                order.lock().unwrap().push(i);
                permit.record(None, None);
            }));
            // Let the task reach the admission queue before spawning the next
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2, 3]);
    }
}
