//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`           - Link creation form (`PUBLIC_DIR/index.html`)
//! - `GET  /{slug}`     - Short link redirect (`/url` included)
//! - `POST /url`        - Link creation (rate limited)
//! - `GET  /_/health`   - Health check
//! - `/_/static/*`      - Static assets from `PUBLIC_DIR`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Error stacks** - Redacted in production
//! - **Rate limiting** - Per-IP token bucket on `POST /url`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{error_stack, tracing};
use crate::api::routes::SERVICE_PREFIX;
use crate::state::AppState;
use crate::web::not_found::not_found_handler;
use axum::{Router, middleware};
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `public_dir` - directory holding `index.html` and static assets
pub fn app_router(state: AppState, public_dir: &Path) -> NormalizePath<Router> {
    let router = Router::new()
        .route_service("/", ServeFile::new(public_dir.join("index.html")))
        .merge(api::routes::public_routes())
        .merge(api::routes::create_routes())
        .nest_service(&format!("{SERVICE_PREFIX}/static"), ServeDir::new(public_dir))
        .fallback(not_found_handler)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            error_stack::layer,
        ))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
