use serde::{Deserialize, Serialize};

/// Quota usage for one family in one region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaUsage {
    pub limit: u64,
    pub used: u64,
}

impl QuotaUsage {
    pub fn new(limit: u64, used: u64) -> Self {
        Self { limit, used }
    }

    /// Remaining headroom. Never negative even when usage overshoots the limit.
    pub fn available(&self) -> u64 {
        self.limit.saturating_sub(self.used)
    }
}
