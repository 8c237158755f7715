//! # skuscout-retry
//!
//! One retry loop for every remote call. The policy is a plain serializable
//! value so each region worker can carry its own copy.

pub mod backoff;
pub mod policy;

pub use policy::RetryPolicy;
