//! Rate limiting for the link creation endpoint.

use axum::http::Method;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Milliseconds between two replenished tokens.
const REPLENISH_INTERVAL_MS: u64 = 900;

/// Requests a client may send back to back.
const BURST_SIZE: u32 = 100;

/// Creates the per-client rate limiter for `POST /url`.
///
/// Only `POST` is counted, so `GET /url` (the slug `url`) passes through.
///
/// # Limits
///
/// - **Burst**: 100 requests
/// - **Refill**: one request every 900 ms, i.e. 100 requests per 90 seconds
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Keys on the socket peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(REPLENISH_INTERVAL_MS)
            .burst_size(BURST_SIZE)
            .methods(vec![Method::POST])
            .finish()
            .expect("rate limit settings are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
