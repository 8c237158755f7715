use serde::{Deserialize, Serialize};

use super::defaults;

/// Retry behaviour for every remote call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Base of the exponential schedule; retry `n` waits `base * 2^n`.
    pub base_delay_ms: u64,
    /// Upper bound of the random jitter, as a fraction of the wait.
    pub max_jitter_ratio: f64,
    /// Ceiling on any single wait, `Retry-After` included, before jitter.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: defaults::DEFAULT_MAX_RETRIES,
            base_delay_ms: defaults::DEFAULT_BASE_DELAY_MS,
            max_jitter_ratio: defaults::DEFAULT_MAX_JITTER_RATIO,
            max_delay_ms: defaults::DEFAULT_MAX_DELAY_MS,
        }
    }
}
