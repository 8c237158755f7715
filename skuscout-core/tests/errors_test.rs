use skuscout_core::errors::*;
use skuscout_core::traits::IRetryable;

#[test]
fn region_fetch_error_carries_region() {
    let err = ScanError::RegionFetch {
        region: "eastus".into(),
        reason: "boom".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("eastus"));
    assert!(msg.contains("boom"));
}

#[test]
fn malformed_input_carries_reason() {
    let err = ScoutError::MalformedInput {
        reason: "unknown SKU Standard_X1".into(),
    };
    assert!(err.to_string().contains("Standard_X1"));
}

#[test]
fn http_error_display_carries_status() {
    let err = ApiError::http(503, "service unavailable");
    assert!(err.to_string().contains("503"));
}

// --- From impls ---

#[test]
fn api_error_converts_to_scout_error() {
    let err: ScoutError = ApiError::http(500, "x").into();
    assert!(matches!(err, ScoutError::Api(_)));
}

#[test]
fn config_error_converts_to_scout_error() {
    let err: ScoutError = ConfigError::ValidationFailed {
        field: "scan.parallelism".into(),
        message: "must be at least 1".into(),
    }
    .into();
    assert!(err.to_string().contains("scan.parallelism"));
}

#[test]
fn scout_error_delegates_retryability_to_api_error() {
    let transient: ScoutError = ApiError::throttled(Some(3)).into();
    assert!(transient.is_retryable());
    assert_eq!(transient.retry_after(), Some(std::time::Duration::from_secs(3)));

    let fatal = ScoutError::ContextUnresolved {
        reason: "no subscription".into(),
    };
    assert!(!fatal.is_retryable());
    assert_eq!(fatal.retry_after(), None);
}
