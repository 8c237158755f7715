//! RetryPolicy: bounded retries with exponential backoff.
//!
//! Retryable failures are HTTP 429 / 503 and network timeouts, resets, and
//! refusals, as reported by `IRetryable`. Anything else is returned on the
//! first attempt. Once retries run out the last error is returned unchanged;
//! its own `is_retryable()` tells the caller whether it was given up on.

use std::fmt::Display;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use skuscout_core::config::RetryConfig;
use skuscout_core::traits::IRetryable;
use tracing::{debug, error, warn};

use crate::backoff;

/// Serializable retry settings. Cheap to copy into worker threads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay_ms: u64,
    pub max_jitter_ratio: f64,
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from(&RetryConfig::default())
    }
}

impl From<&RetryConfig> for RetryPolicy {
    fn from(config: &RetryConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            base_delay_ms: config.base_delay_ms,
            max_jitter_ratio: config.max_jitter_ratio,
            max_delay_ms: config.max_delay_ms,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self {
            max_retries,
            ..Self::default()
        }
    }

    /// Wait before retry number `attempt` (1-based), before jitter.
    ///
    /// A server-provided `Retry-After` replaces the exponential value. Either
    /// is capped at `max_delay_ms`.
    pub fn delay_for_attempt(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        let wait = retry_after.unwrap_or_else(|| {
            backoff::exponential_delay(Duration::from_millis(self.base_delay_ms), attempt)
        });
        wait.min(Duration::from_millis(self.max_delay_ms))
    }

    /// Run `action`, sleeping the current thread between attempts.
    pub fn execute<T, E, F>(&self, operation: &str, action: F) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        E: IRetryable + Display,
    {
        self.execute_with_sleeper(operation, action, std::thread::sleep)
    }

    /// Like [`execute`](Self::execute) but waits through `sleep`.
    pub fn execute_with_sleeper<T, E, F, S>(
        &self,
        operation: &str,
        mut action: F,
        mut sleep: S,
    ) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
        E: IRetryable + Display,
        S: FnMut(Duration),
    {
        let mut rng = rand::thread_rng();
        let mut retries = 0u32;

        loop {
            match action() {
                Ok(value) => {
                    if retries > 0 {
                        debug!(operation, retries, "succeeded after retrying");
                    }
                    return Ok(value);
                }
                Err(e) if !e.is_retryable() => {
                    debug!(operation, error = %e, "non-retryable failure");
                    return Err(e);
                }
                Err(e) if retries >= self.max_retries => {
                    error!(
                        operation,
                        attempts = retries + 1,
                        error = %e,
                        "retries exhausted"
                    );
                    return Err(e);
                }
                Err(e) => {
                    retries += 1;
                    let wait = backoff::with_jitter(
                        self.delay_for_attempt(retries, e.retry_after()),
                        self.max_jitter_ratio,
                        &mut rng,
                    );
                    warn!(
                        operation,
                        attempt = retries,
                        max_retries = self.max_retries,
                        wait_ms = wait.as_millis() as u64,
                        error = %e,
                        "transient failure, retrying"
                    );
                    sleep(wait);
                }
            }
        }
    }
}
