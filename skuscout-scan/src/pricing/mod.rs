//! Pricing resolution with negotiated → retail fallback.
//!
//! Negotiated rates are tried first. Any error (permission denied, not found,
//! anything else) or an empty table falls back to public retail prices, and
//! the fallback is recorded as a `PricingFallback` event.

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use skuscout_core::errors::PricingError;
use skuscout_core::models::{PriceSource, PricingFallback, RegionPrices};
use skuscout_core::traits::IPricingProvider;
use skuscout_retry::RetryPolicy;
use tracing::{debug, info, warn};

use crate::cache::PriceCache;

/// Prices for one region and the backend that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedRegion {
    pub region: String,
    pub prices: RegionPrices,
    pub source: PriceSource,
}

/// Resolves region prices through the fallback chain.
pub struct PricingResolver<'a> {
    negotiated: Option<&'a dyn IPricingProvider>,
    retail: &'a dyn IPricingProvider,
    policy: RetryPolicy,
    /// Fallbacks taken during this run.
    events: Vec<PricingFallback>,
}

impl<'a> PricingResolver<'a> {
    /// `negotiated` is optional; without it every region is priced at retail
    /// and no fallback is recorded.
    pub fn new(
        negotiated: Option<&'a dyn IPricingProvider>,
        retail: &'a dyn IPricingProvider,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            negotiated,
            retail,
            policy,
            events: Vec::new(),
        }
    }

    /// Resolve prices for one region, consulting `cache` first.
    pub fn resolve(
        &mut self,
        region: &str,
        cache: &PriceCache,
    ) -> Result<PricedRegion, PricingError> {
        if let Some(hit) = cache.get(region) {
            debug!(region, source = %hit.source, "price cache hit");
            return Ok(hit);
        }

        let _span = crate::pricing_span!(region).entered();

        let negotiated_failure = match self.negotiated {
            Some(provider) => match self.fetch_from(provider, region) {
                Ok(prices) => {
                    return Ok(self.store(cache, region, prices, provider.source()));
                }
                Err(reason) => {
                    warn!(region, reason = %reason, "negotiated pricing unavailable, falling back to retail");
                    Some(reason)
                }
            },
            None => None,
        };

        match self.fetch_from(self.retail, region) {
            Ok(prices) => {
                if let Some(failure) = negotiated_failure {
                    self.events.push(PricingFallback {
                        region: region.to_string(),
                        failure,
                        fallback_used: self.retail.source(),
                        timestamp: Utc::now(),
                    });
                }
                Ok(self.store(cache, region, prices, self.retail.source()))
            }
            Err(retail_failure) => {
                let reason = match negotiated_failure {
                    Some(first) => format!("{first}; {retail_failure}"),
                    None => retail_failure,
                };
                Err(PricingError::AllSourcesFailed {
                    region: region.to_string(),
                    reason,
                })
            }
        }
    }

    /// Resolve every region in order. Regions no backend could price are
    /// warned about and left out.
    pub fn resolve_all(
        &mut self,
        regions: &[String],
        cache: &PriceCache,
    ) -> BTreeMap<String, PricedRegion> {
        let mut priced = BTreeMap::new();
        for region in regions {
            match self.resolve(region, cache) {
                Ok(p) => {
                    priced.insert(region.clone(), p);
                }
                Err(e) => warn!(region = %region, error = %e, "region left unpriced"),
            }
        }
        info!(
            regions = regions.len(),
            priced = priced.len(),
            fallbacks = self.events.len(),
            "pricing resolved"
        );
        priced
    }

    /// Fallback events recorded so far.
    pub fn events(&self) -> &[PricingFallback] {
        &self.events
    }

    /// Drain accumulated fallback events.
    pub fn drain_events(&mut self) -> Vec<PricingFallback> {
        std::mem::take(&mut self.events)
    }

    fn fetch_from(&self, provider: &dyn IPricingProvider, region: &str) -> Result<RegionPrices, String> {
        let source = provider.source();
        let operation = format!("{source} pricing");
        let prices = self
            .policy
            .execute(&operation, || provider.fetch(region))
            .map_err(|e| format!("{source}: {e}"))?;
        if prices.is_empty() {
            return Err(PricingError::EmptyResult {
                source_name: source.to_string(),
                region: region.to_string(),
            }
            .to_string());
        }
        Ok(prices)
    }

    fn store(
        &self,
        cache: &PriceCache,
        region: &str,
        prices: RegionPrices,
        source: PriceSource,
    ) -> PricedRegion {
        let priced = PricedRegion {
            region: region.to_string(),
            prices,
            source,
        };
        cache.insert(priced.clone());
        priced
    }
}
