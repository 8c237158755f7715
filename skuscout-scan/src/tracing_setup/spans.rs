//! Span definitions per operation: scan, region fetch, pricing.

/// Create a scan-run span.
#[macro_export]
macro_rules! scan_span {
    ($run_id:expr, $regions:expr) => {
        tracing::info_span!("skuscout.scan", run_id = %$run_id, regions = $regions)
    };
}

/// Create a region-fetch span.
#[macro_export]
macro_rules! region_span {
    ($region:expr) => {
        tracing::info_span!("skuscout.region", region = %$region)
    };
}

/// Create a pricing span.
#[macro_export]
macro_rules! pricing_span {
    ($region:expr) => {
        tracing::info_span!("skuscout.pricing", region = %$region)
    };
}
