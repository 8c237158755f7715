//! Exponential schedule and jitter.

use std::time::Duration;

use rand::Rng;

/// `base * 2^attempt`, saturating instead of overflowing.
pub fn exponential_delay(base: Duration, attempt: u32) -> Duration {
    base.saturating_mul(2u32.saturating_pow(attempt))
}

/// Add a uniformly drawn extra wait of up to `max_ratio * wait`.
/// Saturates at `Duration::MAX`.
pub fn with_jitter<R: Rng + ?Sized>(wait: Duration, max_ratio: f64, rng: &mut R) -> Duration {
    if wait.is_zero() || max_ratio.is_nan() || max_ratio <= 0.0 {
        return wait;
    }
    let fraction = rng.gen_range(0.0..=max_ratio);
    let extra = Duration::try_from_secs_f64(wait.as_secs_f64() * fraction).unwrap_or(Duration::MAX);
    wait.saturating_add(extra)
}
