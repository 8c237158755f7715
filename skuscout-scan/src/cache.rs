//! Per-run price cache using moka.
//!
//! Owned by the caller for the duration of one run and passed by reference
//! into pricing resolution. Nothing survives across runs.

use moka::sync::Cache;

use crate::pricing::PricedRegion;

/// Enough for every public region with room to spare.
const DEFAULT_MAX_REGIONS: u64 = 256;

/// Resolved prices keyed by lowercased region.
pub struct PriceCache {
    cache: Cache<String, PricedRegion>,
}

impl PriceCache {
    pub fn new(max_regions: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_regions).build(),
        }
    }

    pub fn get(&self, region: &str) -> Option<PricedRegion> {
        self.cache.get(&region.to_ascii_lowercase())
    }

    pub fn insert(&self, priced: PricedRegion) {
        self.cache.insert(priced.region.to_ascii_lowercase(), priced);
    }

    pub fn contains(&self, region: &str) -> bool {
        self.cache.contains_key(&region.to_ascii_lowercase())
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl Default for PriceCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_REGIONS)
    }
}
