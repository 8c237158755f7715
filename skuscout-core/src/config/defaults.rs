// Single source of truth for all default values.

// --- Retry ---
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_BASE_DELAY_MS: u64 = 1_000; // 2^attempt seconds
pub const DEFAULT_MAX_JITTER_RATIO: f64 = 0.25;
pub const DEFAULT_MAX_DELAY_MS: u64 = 60_000;

// --- Scan ---
pub const DEFAULT_PARALLELISM: usize = 4;
pub const DEFAULT_FETCH_PRICING: bool = false;

// --- Recommend ---
pub const DEFAULT_TOP_N: usize = 5;
pub const DEFAULT_MAX_SMALLER_ALTERNATIVES: usize = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
