#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use serde_json::json;
use slug_shortener::application::services::LinkService;
use slug_shortener::domain::entities::{Link, NewLink};
use slug_shortener::domain::repositories::LinkRepository;
use slug_shortener::error::AppError;
use slug_shortener::infrastructure::persistence::MemoryLinkRepository;
use slug_shortener::routes::app_router;
use slug_shortener::state::AppState;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub const SERVICE_DOMAIN: &str = "sho.rt";

/// Repository whose every call fails, standing in for an unreachable database.
pub struct FailingLinkRepository;

#[async_trait]
impl LinkRepository for FailingLinkRepository {
    async fn create(&self, _new_link: NewLink) -> Result<Link, AppError> {
        Err(AppError::internal("Database error", json!({ "cause": "connection refused" })))
    }

    async fn find_by_slug(&self, _slug: &str) -> Result<Option<Link>, AppError> {
        Err(AppError::internal("Database error", json!({ "cause": "connection refused" })))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::internal("Database error", json!({ "cause": "connection refused" })))
    }
}

pub fn create_test_state(production: bool) -> (AppState, Arc<MemoryLinkRepository>) {
    let repo = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(repo.clone(), SERVICE_DOMAIN));

    (AppState::new(link_service, production), repo)
}

pub fn create_failing_state() -> AppState {
    let link_service = Arc::new(LinkService::new(
        Arc::new(FailingLinkRepository),
        SERVICE_DOMAIN,
    ));

    AppState::new(link_service, false)
}

pub fn public_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
}

/// Serves the full application router over a local socket, with peer
/// addresses attached as in production.
pub fn test_server(state: AppState) -> TestServer {
    let app = app_router(state, &public_dir());

    TestServer::new(ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app))
        .unwrap()
}

pub async fn create_test_link(repo: &MemoryLinkRepository, slug: &str, url: &str) -> Link {
    repo.create(NewLink {
        slug: slug.to_string(),
        url: url.to_string(),
    })
    .await
    .unwrap()
}
