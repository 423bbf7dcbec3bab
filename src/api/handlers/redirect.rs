//! Handler for short link redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::state::AppState;
use crate::web::not_found::not_found_page;

/// Redirects a slug to its destination URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Behaviour
///
/// - **Found**: `302 Found` with `Location` set to the stored URL
/// - **Unknown slug or storage failure**: `404 Not Found` with the HTML
///   not-found page
///
/// The slug is looked up exactly as it appears in the path.
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Response {
    redirect(&state, slug).await
}

/// `GET /url`: the creation route's path is also an ordinary slug.
pub async fn url_slug_redirect_handler(State(state): State<AppState>) -> Response {
    redirect(&state, "url".to_string()).await
}

async fn redirect(state: &AppState, slug: String) -> Response {
    let Some(link) = state.link_service.resolve(&slug).await else {
        debug!(slug, "Slug not found");
        return not_found_page(slug);
    };

    match HeaderValue::try_from(link.url.as_str()) {
        Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        Err(e) => {
            warn!(slug, error = %e, "Stored URL is not a valid Location header");
            not_found_page(slug)
        }
    }
}
