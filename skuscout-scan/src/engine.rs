//! ScanEngine: context resolution, parallel region fetches, merge, pricing.

use std::collections::{BTreeSet, HashMap};
use std::time::Instant;

use chrono::Utc;
use rayon::prelude::*;
use skuscout_availability::classify_region;
use skuscout_core::config::ScoutConfig;
use skuscout_core::errors::ScanError;
use skuscout_core::models::{QuotaUsage, ResourceSpec};
use skuscout_core::traits::{IPricingProvider, IQuotaProvider, IResourceProvider};
use skuscout_core::ScoutResult;
use skuscout_retry::RetryPolicy;
use tracing::{info, warn};
use uuid::Uuid;

use crate::cache::PriceCache;
use crate::context::ScanContext;
use crate::pricing::PricingResolver;
use crate::report::{RegionScan, ScanReport};

/// What one worker brings back for one region.
#[derive(Debug, Clone)]
pub struct RegionFetch {
    pub region: String,
    pub resources: Vec<ResourceSpec>,
    pub quotas: HashMap<String, QuotaUsage>,
    pub error: Option<ScanError>,
}

/// Runs a scan against injected providers.
pub struct ScanEngine<'a> {
    config: ScoutConfig,
    resources: &'a dyn IResourceProvider,
    quotas: &'a dyn IQuotaProvider,
    negotiated: Option<&'a dyn IPricingProvider>,
    retail: Option<&'a dyn IPricingProvider>,
}

impl<'a> ScanEngine<'a> {
    pub fn new(
        config: ScoutConfig,
        resources: &'a dyn IResourceProvider,
        quotas: &'a dyn IQuotaProvider,
    ) -> Self {
        Self {
            config,
            resources,
            quotas,
            negotiated: None,
            retail: None,
        }
    }

    /// Attach pricing backends. Prices are only fetched when
    /// `scan.fetch_pricing` is set.
    pub fn with_pricing(
        mut self,
        negotiated: Option<&'a dyn IPricingProvider>,
        retail: &'a dyn IPricingProvider,
    ) -> Self {
        self.negotiated = negotiated;
        self.retail = Some(retail);
        self
    }

    /// Resolve the context from configuration and run.
    pub fn run(&self, cache: &PriceCache) -> ScoutResult<ScanReport> {
        let context = ScanContext::resolve(&self.config.scan)?;
        self.run_in(&context, cache)
    }

    /// Scan every region in `context`. A failing region is recorded in the
    /// report and does not stop the others.
    pub fn run_in(&self, context: &ScanContext, cache: &PriceCache) -> ScoutResult<ScanReport> {
        let run_id = Uuid::new_v4();
        let _span = crate::scan_span!(run_id, context.regions.len()).entered();
        let start = Instant::now();

        let fetches = self.fetch_regions(&context.regions)?;
        let regions: Vec<RegionScan> = fetches.into_iter().map(merge).collect();

        let mut report = ScanReport {
            run_id,
            scanned_at: Utc::now(),
            subscription_id: context.subscription_id.clone(),
            regions,
            pricing: Default::default(),
            pricing_fallbacks: Vec::new(),
        };

        if self.config.scan.fetch_pricing {
            match self.retail {
                Some(retail) => {
                    let mut resolver = PricingResolver::new(self.negotiated, retail, self.policy());
                    report.pricing = resolver.resolve_all(&context.regions, cache);
                    report.pricing_fallbacks = resolver.drain_events();
                }
                None => warn!("pricing requested but no pricing backend attached"),
            }
        }

        info!(
            regions = report.regions.len(),
            failed = report.failed_regions().len(),
            resources = report.resources().count(),
            duration_ms = start.elapsed().as_millis() as u64,
            "scan complete"
        );
        Ok(report)
    }

    /// Fetch all regions on a pool bounded by `scan.parallelism`.
    /// Results come back in region order.
    pub fn fetch_regions(&self, regions: &[String]) -> ScoutResult<Vec<RegionFetch>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.scan.parallelism.max(1))
            .thread_name(|i| format!("skuscout-region-{i}"))
            .build()
            .map_err(|e| ScanError::PoolUnavailable {
                reason: e.to_string(),
            })?;

        let policy = self.policy();
        Ok(pool.install(|| {
            regions
                .par_iter()
                .map(|region| self.fetch_region(region, policy))
                .collect()
        }))
    }

    fn fetch_region(&self, region: &str, policy: RetryPolicy) -> RegionFetch {
        let _span = crate::region_span!(region).entered();

        let resources = match policy.execute("resource listing", || self.resources.fetch(region)) {
            Ok(resources) => resources,
            Err(e) => {
                warn!(region, error = %e, "region fetch failed");
                return RegionFetch {
                    region: region.to_string(),
                    resources: Vec::new(),
                    quotas: HashMap::new(),
                    error: Some(ScanError::RegionFetch {
                        region: region.to_string(),
                        reason: e.to_string(),
                    }),
                };
            }
        };

        let families: Vec<String> = resources
            .iter()
            .map(|r| r.family.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let quotas = self.fetch_quotas(region, &families, policy);

        info!(region, resources = resources.len(), families = families.len(), "region fetched");
        RegionFetch {
            region: region.to_string(),
            resources,
            quotas,
            error: None,
        }
    }

    /// One retried call per family. A family whose quota cannot be read is
    /// left out and shows as unknown; the others are unaffected.
    fn fetch_quotas(
        &self,
        region: &str,
        families: &[String],
        policy: RetryPolicy,
    ) -> HashMap<String, QuotaUsage> {
        let mut quotas = HashMap::with_capacity(families.len());
        for family in families {
            match policy.execute("quota lookup", || self.quotas.fetch(region, family)) {
                Ok(usage) => {
                    quotas.insert(family.clone(), usage);
                }
                Err(e) => warn!(region, family = %family, error = %e, "quota unknown for family"),
            }
        }
        quotas
    }

    fn policy(&self) -> RetryPolicy {
        RetryPolicy::from(&self.config.retry)
    }
}

/// Single-threaded merge step: classify a worker's raw listing.
fn merge(fetch: RegionFetch) -> RegionScan {
    let resources = classify_region(&fetch.region, fetch.resources);
    RegionScan {
        region: fetch.region,
        resources,
        quotas: fetch.quotas,
        error: fetch.error,
    }
}
