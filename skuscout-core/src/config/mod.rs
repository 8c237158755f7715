//! Top-level configuration with layered resolution.

pub mod defaults;
mod observability_config;
mod recommend_config;
mod retry_config;
mod scan_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use recommend_config::RecommendConfig;
pub use retry_config::RetryConfig;
pub use scan_config::ScanConfig;

use crate::constants::{ENV_PARALLELISM, ENV_REGIONS, ENV_SUBSCRIPTION_ID};
use crate::errors::ConfigError;

/// Configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SKUSCOUT_*`)
/// 2. Config file (TOML)
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoutConfig {
    pub retry: RetryConfig,
    pub scan: ScanConfig,
    pub recommend: RecommendConfig,
    pub observability: ObservabilityConfig,
}

impl ScoutConfig {
    /// Load from an optional TOML file, then apply process environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Parse a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `SKUSCOUT_*` overrides read through `lookup`.
    ///
    /// Unparseable numeric values are ignored and the existing value kept.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(sub) = lookup(ENV_SUBSCRIPTION_ID).filter(|s| !s.trim().is_empty()) {
            self.scan.subscription_id = Some(sub.trim().to_string());
        }
        if let Some(regions) = lookup(ENV_REGIONS) {
            let parsed: Vec<String> = regions
                .split(',')
                .map(|r| r.trim().to_ascii_lowercase())
                .filter(|r| !r.is_empty())
                .collect();
            if !parsed.is_empty() {
                self.scan.regions = parsed;
            }
        }
        if let Some(n) = lookup(ENV_PARALLELISM).and_then(|v| v.trim().parse().ok()) {
            self.scan.parallelism = n;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.parallelism == 0 {
            return Err(invalid("scan.parallelism", "must be at least 1"));
        }
        if self.recommend.top_n == 0 {
            return Err(invalid("recommend.top_n", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.retry.max_jitter_ratio) {
            return Err(invalid(
                "retry.max_jitter_ratio",
                "must be between 0.0 and 1.0",
            ));
        }
        if self.retry.max_delay_ms < self.retry.base_delay_ms {
            return Err(invalid(
                "retry.max_delay_ms",
                "must not be less than retry.base_delay_ms",
            ));
        }
        if self.recommend.min_vcpu == Some(0) {
            return Err(invalid("recommend.min_vcpu", "must be greater than 0"));
        }
        if let Some(mem) = self.recommend.min_memory_gb {
            if mem.is_nan() || mem <= 0.0 {
                return Err(invalid("recommend.min_memory_gb", "must be greater than 0"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
