mod api_error;
mod config_error;
mod pricing_error;
mod scan_error;

pub use api_error::{ApiError, ApiErrorKind, NetworkFailure};
pub use config_error::ConfigError;
pub use pricing_error::PricingError;
pub use scan_error::ScanError;

/// Convenience alias used across the workspace.
pub type ScoutResult<T> = Result<T, ScoutError>;

/// Top-level error type. Subsystem errors fold into it via `From`.
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    #[error("api error: {0}")]
    Api(#[from] ApiError),

    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("malformed input: {reason}")]
    MalformedInput { reason: String },

    #[error("context unresolved: {reason}")]
    ContextUnresolved { reason: String },
}

impl crate::traits::IRetryable for ScoutError {
    fn is_retryable(&self) -> bool {
        match self {
            Self::Api(e) => e.is_retryable(),
            _ => false,
        }
    }

    fn retry_after(&self) -> Option<std::time::Duration> {
        match self {
            Self::Api(e) => e.retry_after(),
            _ => None,
        }
    }
}
