//! Retry with exponential backoff for forecast requests.
//!
//! Timeouts, connection failures and the usual transient statuses (429 and
//! 500/502/503/504) are retried. Everything else is returned to the caller on
//! the first attempt.

use log::{info, warn};
use reqwest::{Response, StatusCode};
use std::future::Future;
use std::time::Duration;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
pub const DEFAULT_BACKOFF_FACTOR: Duration = Duration::from_millis(200);
pub const DEFAULT_MAX_BACKOFF: Duration = Duration::from_secs(120);

/// How often, and how patiently, a request is retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff_factor: Duration,
    max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            max_backoff: DEFAULT_MAX_BACKOFF,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy making at most `max_attempts` requests (at least one).
    pub fn new(max_attempts: u32, backoff_factor: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_factor,
            max_backoff: DEFAULT_MAX_BACKOFF,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay before the `retry`-th retry (1-based): `factor * 2^(retry - 1)`, capped.
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(20);
        self.backoff_factor
            .saturating_mul(1u32 << exponent)
            .min(self.max_backoff)
    }

    /// Runs `operation` until it succeeds, fails permanently, or attempts run out.
    ///
    /// When the final attempt still yields a retryable status, that response is
    /// returned as-is so the caller can turn it into a descriptive error.
    pub async fn execute<F, Fut>(&self, operation: F) -> Result<Response, reqwest::Error>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<Response, reqwest::Error>>,
    {
        let mut attempt = 1;
        loop {
            match operation().await {
                Ok(response)
                    if is_retryable_status(response.status()) && attempt < self.max_attempts =>
                {
                    warn!(
                        "Request returned retryable status {}, attempt {} of {}",
                        response.status(),
                        attempt,
                        self.max_attempts
                    );
                }
                Ok(response) => {
                    if attempt > 1 {
                        info!("Request completed after {} attempts", attempt);
                    }
                    return Ok(response);
                }
                Err(e) if is_retryable_error(&e) && attempt < self.max_attempts => {
                    warn!(
                        "Retryable error on attempt {} of {}: {}",
                        attempt, self.max_attempts, e
                    );
                }
                Err(e) => return Err(e),
            }

            tokio::time::sleep(self.delay_for_retry(attempt)).await;
            attempt += 1;
        }
    }
}

pub fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    )
}

pub fn is_retryable_error(error: &reqwest::Error) -> bool {
    error.is_timeout() || error.is_connect()
}
