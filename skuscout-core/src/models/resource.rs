use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Hypervisor generation a SKU can boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Generation {
    V1,
    V2,
}

/// CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Architecture {
    #[serde(rename = "x64", alias = "X64", alias = "amd64")]
    X64,
    #[serde(rename = "Arm64", alias = "ARM64", alias = "arm64")]
    Arm64,
}

impl Architecture {
    /// Case-insensitive parse of the provider's architecture label.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x64" | "amd64" | "x86_64" => Some(Self::X64),
            "arm64" | "aarch64" => Some(Self::Arm64),
            _ => None,
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X64 => f.write_str("x64"),
            Self::Arm64 => f.write_str("Arm64"),
        }
    }
}

/// What a restriction record applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionScope {
    Zone,
    Location,
    #[serde(other)]
    Other,
}

/// Why a restriction exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestrictionReason {
    /// The subscription is not enabled for the SKU in these zones.
    SubscriptionLimited,
    /// The provider is out of capacity in these zones.
    CapacityRestricted,
    #[serde(other)]
    Other,
}

impl RestrictionReason {
    pub fn is_subscription_level(self) -> bool {
        matches!(self, Self::SubscriptionLimited)
    }
}

/// A single restriction record as returned by the resource listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionRecord {
    pub scope: RestrictionScope,
    pub reason: RestrictionReason,
    /// Affected zones. Only meaningful when `scope` is `Zone`.
    #[serde(default)]
    pub zones: BTreeSet<String>,
}

impl RestrictionRecord {
    pub fn zone(reason: RestrictionReason, zones: &[&str]) -> Self {
        Self {
            scope: RestrictionScope::Zone,
            reason,
            zones: zones.iter().map(|z| z.to_string()).collect(),
        }
    }

    pub fn location(reason: RestrictionReason) -> Self {
        Self {
            scope: RestrictionScope::Location,
            reason,
            zones: BTreeSet::new(),
        }
    }
}

/// A compute SKU as listed for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceSpec {
    pub name: String,
    /// Family code, e.g. `"D"`, `"E"`, `"NC"`.
    pub family: String,
    pub vcpus: u32,
    pub memory_gb: f64,
    #[serde(default)]
    pub generations: BTreeSet<Generation>,
    pub architecture: Architecture,
    #[serde(default)]
    pub premium_io: bool,
    /// Zones the SKU is declared in for this region. Empty for non-zonal SKUs.
    #[serde(default)]
    pub zones: BTreeSet<String>,
    #[serde(default)]
    pub restrictions: Vec<RestrictionRecord>,
    /// Image compatibility, filled in by an outside collaborator and passed
    /// through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_compatible: Option<bool>,
}

impl ResourceSpec {
    pub fn is_unrestricted(&self) -> bool {
        self.restrictions.is_empty()
    }
}
