//! Subscription and region context for a run.

use serde::{Deserialize, Serialize};
use skuscout_core::config::ScanConfig;
use skuscout_core::{ScoutError, ScoutResult};

/// What a scan runs against. Resolved once, before any fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanContext {
    pub subscription_id: String,
    /// Lowercased, de-duplicated, in configured order.
    pub regions: Vec<String>,
}

impl ScanContext {
    pub fn new(subscription_id: impl Into<String>, regions: &[&str]) -> ScoutResult<Self> {
        let regions: Vec<String> = regions.iter().map(|r| r.to_string()).collect();
        Self::build(Some(subscription_id.into()), &regions)
    }

    /// Resolve from the scan section of the configuration.
    pub fn resolve(config: &ScanConfig) -> ScoutResult<Self> {
        Self::build(config.subscription_id.clone(), &config.regions)
    }

    fn build(subscription_id: Option<String>, regions: &[String]) -> ScoutResult<Self> {
        let subscription_id = subscription_id
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ScoutError::ContextUnresolved {
                reason: "no subscription id configured".to_string(),
            })?;

        let mut resolved: Vec<String> = Vec::with_capacity(regions.len());
        for region in regions {
            let region = region.trim().to_ascii_lowercase();
            if !region.is_empty() && !resolved.contains(&region) {
                resolved.push(region);
            }
        }
        if resolved.is_empty() {
            return Err(ScoutError::ContextUnresolved {
                reason: "no regions configured".to_string(),
            });
        }

        Ok(Self {
            subscription_id,
            regions: resolved,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_are_normalized_and_deduplicated() {
        let ctx = ScanContext::new("sub-1", &["EastUS", " westus2 ", "eastus", ""]).unwrap();
        assert_eq!(ctx.regions, vec!["eastus", "westus2"]);
    }

    #[test]
    fn blank_subscription_is_unresolved() {
        let err = ScanContext::new("  ", &["eastus"]).unwrap_err();
        assert!(matches!(err, ScoutError::ContextUnresolved { .. }));
    }

    #[test]
    fn empty_region_list_is_unresolved() {
        let config = ScanConfig {
            subscription_id: Some("sub-1".to_string()),
            ..ScanConfig::default()
        };
        let err = ScanContext::resolve(&config).unwrap_err();
        assert!(err.to_string().contains("no regions"));
    }
}
