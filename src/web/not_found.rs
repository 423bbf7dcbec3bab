//! Not-found page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

/// Template for the not-found page.
///
/// Renders `templates/not_found.html`.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub slug: String,
}

/// Renders the not-found page with a 404 status.
pub fn not_found_page(slug: impl Into<String>) -> Response {
    let page = NotFoundTemplate { slug: slug.into() };
    (StatusCode::NOT_FOUND, page).into_response()
}

/// Router fallback for paths no route matches.
pub async fn not_found_handler(uri: Uri) -> Response {
    not_found_page(uri.path().trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_escapes_slug() {
        let html = NotFoundTemplate {
            slug: "<script>".to_string(),
        }
        .render()
        .unwrap();

        assert!(html.contains("&#60;script&#62;") || html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_not_found_page_status() {
        let response = not_found_page("missing");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
