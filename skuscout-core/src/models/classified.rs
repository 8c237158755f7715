use serde::{Deserialize, Serialize};

use super::{ResourceSpec, ZoneAvailability};

/// A resource together with its classified availability in one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedResource {
    pub region: String,
    pub spec: ResourceSpec,
    pub availability: ZoneAvailability,
}
