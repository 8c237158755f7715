use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PriceSource;

/// Recorded whenever negotiated pricing could not be used for a region.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingFallback {
    pub region: String,
    pub failure: String,
    pub fallback_used: PriceSource,
    pub timestamp: DateTime<Utc>,
}
