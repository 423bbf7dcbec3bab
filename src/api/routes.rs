//! API route configuration.

use crate::api::handlers::{
    create_link_handler, health_handler, redirect_handler, url_slug_redirect_handler,
};
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Prefix for service endpoints that must stay clear of the slug namespace.
///
/// Every single-segment path is a slug, so operational routes live one
/// level down.
pub const SERVICE_PREFIX: &str = "/_";

/// Read-only routes.
///
/// # Endpoints
///
/// - `GET /{slug}`    - Redirect to the stored URL
/// - `GET /_/health`  - Database health check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route(&format!("{SERVICE_PREFIX}/health"), get(health_handler))
        .route("/{slug}", get(redirect_handler))
}

/// The write route, sharing its path with the slug `url`.
///
/// # Endpoints
///
/// - `POST /url` - Create a short link (rate limited)
/// - `GET  /url` - Redirect for the slug `url`
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/url",
            post(create_link_handler).get(url_slug_redirect_handler),
        )
        .layer(rate_limit::layer())
}
