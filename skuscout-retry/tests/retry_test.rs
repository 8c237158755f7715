use std::cell::Cell;
use std::time::Duration;

use proptest::prelude::*;
use skuscout_core::errors::{ApiError, NetworkFailure};
use skuscout_core::traits::IRetryable;
use skuscout_retry::RetryPolicy;

/// Fails with `error` for the first `failures` calls, then returns `value`.
fn flaky<'a>(
    calls: &'a Cell<u32>,
    failures: u32,
    error: ApiError,
    value: u32,
) -> impl FnMut() -> Result<u32, ApiError> + 'a {
    move || {
        calls.set(calls.get() + 1);
        if calls.get() <= failures {
            Err(error.clone())
        } else {
            Ok(value)
        }
    }
}

#[test]
fn throttled_k_times_then_succeeds() {
    let calls = Cell::new(0);
    let mut waits = Vec::new();
    let policy = RetryPolicy::new(3);

    let result = policy.execute_with_sleeper(
        "list_skus",
        flaky(&calls, 2, ApiError::throttled(None), 42),
        |d| waits.push(d),
    );

    assert_eq!(result, Ok(42));
    assert_eq!(calls.get(), 3);
    assert_eq!(waits.len(), 2);
    // 2s and 4s plus at most 25% jitter each.
    assert!(waits[0] >= Duration::from_secs(2) && waits[0] <= Duration::from_millis(2_500));
    assert!(waits[1] >= Duration::from_secs(4) && waits[1] <= Duration::from_secs(5));
}

#[test]
fn non_retryable_is_invoked_once() {
    let calls = Cell::new(0);
    let policy = RetryPolicy::new(10);

    let result = policy.execute_with_sleeper(
        "get_prices",
        flaky(&calls, 5, ApiError::http(403, "forbidden"), 1),
        |_| panic!("must not sleep"),
    );

    assert_eq!(result, Err(ApiError::http(403, "forbidden")));
    assert_eq!(calls.get(), 1);
}

#[test]
fn exhaustion_returns_original_error() {
    let calls = Cell::new(0);
    let policy = RetryPolicy::new(2);
    let reset = ApiError::network(NetworkFailure::ConnectionReset, "peer reset");

    let result = policy.execute_with_sleeper(
        "list_skus",
        flaky(&calls, 10, reset.clone(), 1),
        |_| {},
    );

    let err = result.unwrap_err();
    assert_eq!(err, reset);
    assert!(err.is_retryable(), "caller can tell it gave up on a transient error");
    assert_eq!(calls.get(), 3);
}

#[test]
fn retry_after_drives_the_wait() {
    let calls = Cell::new(0);
    let mut waits = Vec::new();
    let policy = RetryPolicy {
        max_retries: 1,
        base_delay_ms: 1_000,
        max_jitter_ratio: 0.0,
        max_delay_ms: 60_000,
    };

    let result = policy.execute_with_sleeper(
        "list_skus",
        flaky(&calls, 1, ApiError::throttled(Some(30)), 7),
        |d| waits.push(d),
    );

    assert_eq!(result, Ok(7));
    assert_eq!(waits, vec![Duration::from_secs(30)]);
}

#[test]
fn enormous_retry_after_is_capped_not_a_panic() {
    let calls = Cell::new(0);
    let mut waits = Vec::new();
    let policy = RetryPolicy {
        max_retries: 1,
        base_delay_ms: 1_000,
        max_jitter_ratio: 0.25,
        max_delay_ms: 30_000,
    };

    let result = policy.execute_with_sleeper(
        "list_skus",
        flaky(&calls, 1, ApiError::throttled(Some(u64::MAX)), 1),
        |d| waits.push(d),
    );

    assert_eq!(result, Ok(1));
    assert_eq!(waits.len(), 1);
    assert!(waits[0] >= Duration::from_secs(30));
    assert!(waits[0] <= Duration::from_millis(37_500));
}

proptest! {
    #[test]
    fn invocations_are_failures_plus_one(k in 0u32..6, extra in 0u32..4) {
        let calls = Cell::new(0);
        let policy = RetryPolicy { max_retries: k + extra, base_delay_ms: 0, max_jitter_ratio: 0.25, max_delay_ms: 0 };

        let result = policy.execute_with_sleeper(
            "prop",
            flaky(&calls, k, ApiError::throttled(None), 9),
            |_| {},
        );

        prop_assert_eq!(result, Ok(9));
        prop_assert_eq!(calls.get(), k + 1);
    }

    #[test]
    fn non_retryable_never_repeats(max_retries in 0u32..10, status in prop_oneof![Just(400u16), Just(401), Just(404), Just(500)]) {
        let calls = Cell::new(0);
        let policy = RetryPolicy { max_retries, base_delay_ms: 0, max_jitter_ratio: 0.0, max_delay_ms: 0 };

        let result = policy.execute_with_sleeper(
            "prop",
            flaky(&calls, u32::MAX, ApiError::http(status, "no"), 0),
            |_| {},
        );

        prop_assert!(result.is_err());
        prop_assert_eq!(calls.get(), 1);
    }
}
