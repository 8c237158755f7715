/// Pricing subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    #[error("no pricing source succeeded for {region}: {reason}")]
    AllSourcesFailed { region: String, reason: String },

    #[error("pricing source {source_name} returned no prices for {region}")]
    EmptyResult { source_name: String, region: String },
}
