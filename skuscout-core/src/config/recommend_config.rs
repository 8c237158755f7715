use serde::{Deserialize, Serialize};

use super::defaults;

/// Substitute recommendation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendConfig {
    /// Number of ranked substitutes to return.
    pub top_n: usize,
    /// Candidates with fewer vCPUs are set aside as below-spec.
    pub min_vcpu: Option<u32>,
    /// Candidates with less memory are set aside as below-spec.
    pub min_memory_gb: Option<f64>,
    /// Cap on the smaller-alternative callout.
    pub max_smaller_alternatives: usize,
}

impl Default for RecommendConfig {
    fn default() -> Self {
        Self {
            top_n: defaults::DEFAULT_TOP_N,
            min_vcpu: None,
            min_memory_gb: None,
            max_smaller_alternatives: defaults::DEFAULT_MAX_SMALLER_ALTERNATIVES,
        }
    }
}
