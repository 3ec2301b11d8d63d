//! Rate limiting middleware using a token bucket.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates the rate limiter for `/api` endpoints.
///
/// The configured window and request cap translate into a token bucket that
/// replenishes one permit every `window_ms / max_requests` milliseconds with
/// a burst capacity of `max_requests`. Requests exceeding the limit receive
/// `429 Too Many Requests`.
///
/// Limits are applied per client IP extracted from the socket peer address.
///
/// # Example
///
/// ```rust,ignore
/// let api = api_routes().layer(rate_limit::layer(900_000, 100));
/// ```
pub fn layer(
    window_ms: u64,
    max_requests: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let replenish_ms = (window_ms / u64::from(max_requests)).max(1);

    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_ms)
            .burst_size(max_requests)
            .finish()
            .expect("invalid rate limit configuration"),
    );

    GovernorLayer::new(governor_conf)
}
