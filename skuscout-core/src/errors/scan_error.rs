use serde::{Deserialize, Serialize};

/// Region scan errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScanError {
    #[error("region {region} fetch failed: {reason}")]
    RegionFetch { region: String, reason: String },

    #[error("worker pool failed to start: {reason}")]
    PoolUnavailable { reason: String },
}
