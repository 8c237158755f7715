use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::traits::IRetryable;

/// Network-level failure observed before any HTTP status was received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkFailure {
    Timeout,
    ConnectionReset,
    ConnectionRefused,
    Other,
}

impl fmt::Display for NetworkFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Timeout => "timeout",
            Self::ConnectionReset => "connection reset",
            Self::ConnectionRefused => "connection refused",
            Self::Other => "network failure",
        };
        f.write_str(s)
    }
}

/// Coarse classification used by callers that react differently per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 429, 503, timeout, reset, refused. Retried.
    Transient,
    /// 401 / 403.
    PermissionDenied,
    /// 404.
    NotFound,
    Other,
}

/// Error returned by a remote provider call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("http {status}: {message}")]
    Http {
        status: u16,
        message: String,
        /// Server-provided `Retry-After`, in seconds.
        retry_after_secs: Option<u64>,
    },

    #[error("{failure}: {message}")]
    Network {
        failure: NetworkFailure,
        message: String,
    },

    #[error("{message}")]
    Other { message: String },
}

impl ApiError {
    /// Shorthand for an HTTP failure without `Retry-After`.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: message.into(),
            retry_after_secs: None,
        }
    }

    /// Shorthand for a 429 carrying a `Retry-After` value.
    pub fn throttled(retry_after_secs: Option<u64>) -> Self {
        Self::Http {
            status: 429,
            message: "too many requests".to_string(),
            retry_after_secs,
        }
    }

    pub fn network(failure: NetworkFailure, message: impl Into<String>) -> Self {
        Self::Network {
            failure,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self {
            Self::Http { status, .. } => match status {
                429 | 503 => ApiErrorKind::Transient,
                401 | 403 => ApiErrorKind::PermissionDenied,
                404 => ApiErrorKind::NotFound,
                _ => ApiErrorKind::Other,
            },
            Self::Network { failure, .. } => match failure {
                NetworkFailure::Timeout
                | NetworkFailure::ConnectionReset
                | NetworkFailure::ConnectionRefused => ApiErrorKind::Transient,
                NetworkFailure::Other => ApiErrorKind::Other,
            },
            Self::Other { .. } => ApiErrorKind::Other,
        }
    }
}

impl IRetryable for ApiError {
    fn is_retryable(&self) -> bool {
        self.kind() == ApiErrorKind::Transient
    }

    /// Only a throttling response's `Retry-After` is honoured.
    fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::Http {
                status: 429,
                retry_after_secs: Some(secs),
                ..
            } => Some(Duration::from_secs(*secs)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_statuses() {
        assert!(ApiError::http(429, "slow down").is_retryable());
        assert!(ApiError::http(503, "busy").is_retryable());
        assert!(!ApiError::http(500, "boom").is_retryable());
        assert!(!ApiError::http(403, "nope").is_retryable());
    }

    #[test]
    fn network_failures() {
        assert!(ApiError::network(NetworkFailure::Timeout, "t").is_retryable());
        assert!(ApiError::network(NetworkFailure::ConnectionReset, "r").is_retryable());
        assert!(ApiError::network(NetworkFailure::ConnectionRefused, "r").is_retryable());
        assert!(!ApiError::network(NetworkFailure::Other, "dns").is_retryable());
    }

    #[test]
    fn retry_after_only_for_throttling() {
        assert_eq!(
            ApiError::throttled(Some(7)).retry_after(),
            Some(Duration::from_secs(7))
        );
        let busy = ApiError::Http {
            status: 503,
            message: "busy".into(),
            retry_after_secs: Some(7),
        };
        assert_eq!(busy.retry_after(), None);
    }

    #[test]
    fn permission_and_not_found_kinds() {
        assert_eq!(ApiError::http(401, "").kind(), ApiErrorKind::PermissionDenied);
        assert_eq!(ApiError::http(403, "").kind(), ApiErrorKind::PermissionDenied);
        assert_eq!(ApiError::http(404, "").kind(), ApiErrorKind::NotFound);
    }
}
