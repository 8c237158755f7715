use crate::errors::ApiError;
use crate::models::{PriceSource, QuotaUsage, RegionPrices, ResourceSpec};

/// Raw resource + restriction listing for one region.
pub trait IResourceProvider: Send + Sync {
    fn fetch(&self, region: &str) -> Result<Vec<ResourceSpec>, ApiError>;
}

/// Subscription quota per family.
pub trait IQuotaProvider: Send + Sync {
    /// Quota for a single family in a region.
    fn fetch(&self, region: &str, family: &str) -> Result<QuotaUsage, ApiError>;
}

/// A pricing backend (negotiated-rate or public retail).
pub trait IPricingProvider: Send + Sync {
    fn fetch(&self, region: &str) -> Result<RegionPrices, ApiError>;

    /// Which kind of rates this backend returns.
    fn source(&self) -> PriceSource;
}
