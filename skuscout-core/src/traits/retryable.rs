use std::time::Duration;

/// Errors that know whether repeating the failed call can help.
pub trait IRetryable {
    /// Whether the failure is transient (throttling, service busy, network blip).
    fn is_retryable(&self) -> bool;

    /// Server-mandated wait before the next attempt, if any.
    fn retry_after(&self) -> Option<Duration> {
        None
    }
}
