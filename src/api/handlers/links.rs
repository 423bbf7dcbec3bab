//! Handler for link creation endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "slug": "my-link" }
/// ```
///
/// `slug` is optional; a random 6-character slug is generated when it is
/// missing or blank.
///
/// # Response
///
/// ```json
/// {
///   "id": 1,
///   "slug": "my-link",
///   "url": "https://example.com",
///   "created_at": "2024-01-01T00:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request: malformed JSON, invalid URL or slug
/// - 409 Conflict: slug already in use, or the URL is already a short link
/// - 500 Internal Server Error: storage failure
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<Json<LinkResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let url = payload.url.unwrap_or_default();
    let link = state
        .link_service
        .create(&url, payload.slug.as_deref())
        .await?;

    Ok(Json(link.into()))
}
