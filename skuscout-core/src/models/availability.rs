use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Definitive availability of a SKU in one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    /// No zone restrictions.
    Available,
    /// Some zones OK, others subscription-limited.
    ZoneConstrained,
    /// No OK zones, only subscription-limited ones.
    SubscriptionLimited,
    /// Some zones OK, others capacity-restricted.
    PartialZone,
    /// No OK zones, at least one capacity-restricted.
    Unavailable,
}

impl AvailabilityStatus {
    /// Ordering used when ranking: lower is better.
    pub fn rank(self) -> u8 {
        match self {
            Self::Available => 0,
            Self::ZoneConstrained | Self::SubscriptionLimited | Self::PartialZone => 1,
            Self::Unavailable => 2,
        }
    }

    pub fn is_available(self) -> bool {
        self == Self::Available
    }
}

impl fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Available => "available",
            Self::ZoneConstrained => "zone_constrained",
            Self::SubscriptionLimited => "subscription_limited",
            Self::PartialZone => "partial_zone",
            Self::Unavailable => "unavailable",
        };
        f.write_str(s)
    }
}

/// Status plus the zone partition it was derived from.
///
/// `ok`, `limited`, and `restricted` are pairwise disjoint and together equal
/// the declared zone set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneAvailability {
    pub status: AvailabilityStatus,
    pub ok: BTreeSet<String>,
    pub limited: BTreeSet<String>,
    pub restricted: BTreeSet<String>,
    /// The SKU declares no zones in the region (regional-only deployment).
    pub non_zonal: bool,
}

impl ZoneAvailability {
    pub fn ok_count(&self) -> usize {
        self.ok.len()
    }

    pub fn limited_count(&self) -> usize {
        self.limited.len()
    }

    pub fn restricted_count(&self) -> usize {
        self.restricted.len()
    }

    /// All zones covered by the partition.
    pub fn declared(&self) -> BTreeSet<String> {
        self.ok
            .iter()
            .chain(&self.limited)
            .chain(&self.restricted)
            .cloned()
            .collect()
    }
}
