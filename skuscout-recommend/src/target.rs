use skuscout_core::models::{ClassifiedResource, TargetProfile};
use skuscout_core::{ScoutError, ScoutResult};

/// Find the target's profile among scanned resources. Names compare
/// case-insensitively; the first match wins.
pub fn resolve_target(name: &str, resources: &[ClassifiedResource]) -> ScoutResult<TargetProfile> {
    resources
        .iter()
        .find(|r| r.spec.name.eq_ignore_ascii_case(name))
        .map(|r| TargetProfile::from(&r.spec))
        .ok_or_else(|| ScoutError::MalformedInput {
            reason: format!("target resource '{name}' not found in any scanned region"),
        })
}
