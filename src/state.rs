//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkService;

/// State shared by all requests.
///
/// Immutable after startup; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Hides error stacks in responses when `true`.
    pub production: bool,
}

impl AppState {
    /// Creates the state from its services.
    pub fn new(link_service: Arc<LinkService>, production: bool) -> Self {
        Self {
            link_service,
            production,
        }
    }
}
