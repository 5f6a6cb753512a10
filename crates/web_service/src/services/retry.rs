//! Bounded retry
//!
//! Runs an async operation up to `max_attempts` times. A predicate decides
//! which errors are worth another attempt; anything else is returned at once.
//! Only the last error is surfaced.

use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Never less than 1.
    pub max_attempts: u32,
    /// Pause between attempts; zero means retry immediately
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Run `operation` under `policy`.
///
/// `operation` receives the 1-based attempt number.
pub async fn retry<T, E, F, Fut, P>(
    policy: RetryPolicy,
    is_retryable: P,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
    E: std::fmt::Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(err) if !is_retryable(&err) => {
                tracing::debug!(attempt, error = %err, "Non-retryable error, giving up");
                return Err(err);
            }
            Err(err) if attempt >= max_attempts => {
                tracing::warn!(attempt, max_attempts, error = %err, "Retries exhausted");
                return Err(err);
            }
            Err(err) => {
                tracing::warn!(attempt, max_attempts, error = %err, "Attempt failed, retrying");
                if !policy.delay.is_zero() {
                    tokio::time::sleep(policy.delay).await;
                }
                attempt += 1;
            }
        }
    }
}
