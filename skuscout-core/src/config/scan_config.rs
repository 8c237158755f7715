use serde::{Deserialize, Serialize};

use super::defaults;

/// Region scan configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Subscription the scan runs against.
    pub subscription_id: Option<String>,
    /// Regions to scan, e.g. `["eastus", "westeurope"]`.
    pub regions: Vec<String>,
    /// Concurrent region fetches.
    pub parallelism: usize,
    /// Fetch prices after the availability scan.
    pub fetch_pricing: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            subscription_id: None,
            regions: Vec::new(),
            parallelism: defaults::DEFAULT_PARALLELISM,
            fetch_pricing: defaults::DEFAULT_FETCH_PRICING,
        }
    }
}
