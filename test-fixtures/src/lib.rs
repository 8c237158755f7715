//! Test fixture loader for skuscout golden region listings, plus in-memory
//! provider implementations for scan and pricing tests.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use skuscout_core::errors::ApiError;
use skuscout_core::models::{Price, PriceSource, QuotaUsage, RegionPrices, ResourceSpec};
use skuscout_core::traits::{IPricingProvider, IQuotaProvider, IResourceProvider};

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as raw JSON Value.
pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// A recorded region listing with its expected classification.
#[derive(Debug, Clone, Deserialize)]
pub struct RegionFixture {
    pub region: String,
    pub skus: Vec<ResourceSpec>,
    #[serde(default)]
    pub quotas: HashMap<String, QuotaUsage>,
    #[serde(default)]
    pub retail_prices: HashMap<String, f64>,
    pub expected: serde_json::Value,
}

impl RegionFixture {
    /// Retail prices as a `RegionPrices` table.
    pub fn retail(&self) -> RegionPrices {
        self.retail_prices
            .iter()
            .map(|(sku, hourly)| {
                (
                    sku.clone(),
                    Price {
                        hourly: *hourly,
                        currency: "USD".to_string(),
                        source: PriceSource::Retail,
                    },
                )
            })
            .collect()
    }

    /// Expected status label for a SKU, e.g. `"zone_constrained"`.
    pub fn expected_status(&self, sku: &str) -> Option<&str> {
        self.expected["statuses"][sku].as_str()
    }
}

/// Load `regions/<region>.json`.
pub fn region_fixture(region: &str) -> RegionFixture {
    load_fixture(&format!("regions/{region}.json"))
}

/// Every recorded region listing.
pub fn all_region_fixtures() -> Vec<RegionFixture> {
    ["eastus", "westus2"].iter().map(|r| region_fixture(r)).collect()
}

// ---------------------------------------------------------------------------
// In-memory providers
// ---------------------------------------------------------------------------

/// Serves fixed listings; regions it doesn't know return 404.
#[derive(Default)]
pub struct StaticResourceProvider {
    listings: HashMap<String, Result<Vec<ResourceSpec>, ApiError>>,
    calls: AtomicUsize,
}

impl StaticResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixtures(fixtures: &[RegionFixture]) -> Self {
        fixtures.iter().fold(Self::new(), |p, f| {
            p.with_region(&f.region, f.skus.clone())
        })
    }

    pub fn with_region(mut self, region: &str, skus: Vec<ResourceSpec>) -> Self {
        self.listings.insert(region.to_string(), Ok(skus));
        self
    }

    pub fn with_failure(mut self, region: &str, error: ApiError) -> Self {
        self.listings.insert(region.to_string(), Err(error));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IResourceProvider for StaticResourceProvider {
    fn fetch(&self, region: &str) -> Result<Vec<ResourceSpec>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.listings
            .get(region)
            .cloned()
            .unwrap_or_else(|| Err(ApiError::http(404, format!("unknown region {region}"))))
    }
}

/// Fails the first `failures` calls for each region, then delegates.
pub struct FlakyResourceProvider {
    inner: StaticResourceProvider,
    failures: u32,
    error: ApiError,
    seen: Mutex<HashMap<String, u32>>,
}

impl FlakyResourceProvider {
    pub fn new(inner: StaticResourceProvider, failures: u32, error: ApiError) -> Self {
        Self {
            inner,
            failures,
            error,
            seen: Mutex::new(HashMap::new()),
        }
    }

    /// Calls made for `region` so far.
    pub fn calls_for(&self, region: &str) -> u32 {
        self.seen
            .lock()
            .map(|s| s.get(region).copied().unwrap_or(0))
            .unwrap_or(0)
    }
}

impl IResourceProvider for FlakyResourceProvider {
    fn fetch(&self, region: &str) -> Result<Vec<ResourceSpec>, ApiError> {
        let attempt = {
            let mut seen = self.seen.lock().expect("flaky provider lock poisoned");
            let count = seen.entry(region.to_string()).or_insert(0);
            *count += 1;
            *count
        };
        if attempt <= self.failures {
            return Err(self.error.clone());
        }
        self.inner.fetch(region)
    }
}

/// Records how many `fetch` calls overlap. Each call holds for `hold`
/// so concurrent workers have a chance to meet.
pub struct ConcurrencyTrackingProvider {
    inner: StaticResourceProvider,
    hold: Duration,
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

impl ConcurrencyTrackingProvider {
    pub fn new(inner: StaticResourceProvider, hold: Duration) -> Self {
        Self {
            inner,
            hold,
            in_flight: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    /// Most calls ever in flight at once.
    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

impl IResourceProvider for ConcurrencyTrackingProvider {
    fn fetch(&self, region: &str) -> Result<Vec<ResourceSpec>, ApiError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        std::thread::sleep(self.hold);
        let result = self.inner.fetch(region);
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

/// Serves fixed quotas; unknown families return 404.
#[derive(Default)]
pub struct StaticQuotaProvider {
    quotas: HashMap<String, HashMap<String, QuotaUsage>>,
    failures: HashMap<(String, String), ApiError>,
    calls: AtomicUsize,
}

impl StaticQuotaProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixtures(fixtures: &[RegionFixture]) -> Self {
        fixtures.iter().fold(Self::new(), |p, f| {
            p.with_region(&f.region, f.quotas.clone())
        })
    }

    pub fn with_region(mut self, region: &str, quotas: HashMap<String, QuotaUsage>) -> Self {
        self.quotas.insert(region.to_string(), quotas);
        self
    }

    /// Make every lookup of `family` in `region` fail with `error`.
    pub fn with_failure(mut self, region: &str, family: &str, error: ApiError) -> Self {
        self.failures
            .insert((region.to_string(), family.to_string()), error);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IQuotaProvider for StaticQuotaProvider {
    fn fetch(&self, region: &str, family: &str) -> Result<QuotaUsage, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.failures.get(&(region.to_string(), family.to_string())) {
            return Err(err.clone());
        }
        self.quotas
            .get(region)
            .and_then(|q| q.get(family))
            .copied()
            .ok_or_else(|| ApiError::http(404, format!("no quota for {family} in {region}")))
    }
}

/// A pricing backend that serves fixed tables or always fails.
pub struct StaticPricingProvider {
    source: PriceSource,
    prices: HashMap<String, RegionPrices>,
    failure: Option<ApiError>,
    calls: AtomicUsize,
}

impl StaticPricingProvider {
    pub fn new(source: PriceSource) -> Self {
        Self {
            source,
            prices: HashMap::new(),
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_region(mut self, region: &str, prices: RegionPrices) -> Self {
        self.prices.insert(region.to_string(), prices);
        self
    }

    pub fn failing(mut self, error: ApiError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IPricingProvider for StaticPricingProvider {
    fn fetch(&self, region: &str) -> Result<RegionPrices, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(self.prices.get(region).cloned().unwrap_or_default())
    }

    fn source(&self) -> PriceSource {
        self.source
    }
}
