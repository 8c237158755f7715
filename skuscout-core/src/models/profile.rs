use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Architecture, Generation, ResourceSpec};

/// The attributes the similarity scorer looks at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuProfile {
    pub vcpus: u32,
    pub memory_gb: f64,
    pub family: String,
    pub generations: BTreeSet<Generation>,
    pub architecture: Architecture,
    pub premium_io: bool,
}

/// The SKU the operator asked for.
pub type TargetProfile = SkuProfile;

/// A potential substitute.
pub type CandidateProfile = SkuProfile;

impl From<&ResourceSpec> for SkuProfile {
    fn from(spec: &ResourceSpec) -> Self {
        Self {
            vcpus: spec.vcpus,
            memory_gb: spec.memory_gb,
            family: spec.family.clone(),
            generations: spec.generations.clone(),
            architecture: spec.architecture,
            premium_io: spec.premium_io,
        }
    }
}
