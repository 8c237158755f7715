mod providers;
mod retryable;

pub use providers::{IPricingProvider, IQuotaProvider, IResourceProvider};
pub use retryable::IRetryable;
