/// Environment variable holding the subscription the scan runs against.
pub const ENV_SUBSCRIPTION_ID: &str = "SKUSCOUT_SUBSCRIPTION_ID";

/// Environment variable holding a comma-separated region list.
pub const ENV_REGIONS: &str = "SKUSCOUT_REGIONS";

/// Environment variable overriding the region worker count.
pub const ENV_PARALLELISM: &str = "SKUSCOUT_PARALLELISM";

/// Environment variable holding the tracing filter directive.
pub const ENV_LOG: &str = "SKUSCOUT_LOG";

/// Highest possible similarity score.
pub const MAX_SCORE: u8 = 100;
