mod common;

use axum::http::StatusCode;
use serde_json::json;
use slug_shortener::domain::repositories::LinkRepository;
use slug_shortener::error::STACK_PLACEHOLDER;

#[tokio::test]
async fn test_create_without_slug() {
    let (state, repo) = common::create_test_state(false);
    let server = common::test_server(state);

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let slug = json["slug"].as_str().unwrap();
    assert_eq!(slug.len(), 6);
    assert!(
        slug.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    );
    assert_eq!(slug, slug.to_lowercase());
    assert_eq!(json["url"], "https://example.com");
    assert!(json["id"].is_i64());
    assert!(json["created_at"].is_string());

    assert!(repo.find_by_slug(slug).await.unwrap().is_some());
}

#[tokio::test]
async fn test_create_with_custom_slug_lowercases() {
    let (state, _repo) = common::create_test_state(false);
    let server = common::test_server(state);

    let response = server
        .post("/url")
        .json(&json!({ "slug": "AbC1-2", "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["slug"], "abc1-2");
}

#[tokio::test]
async fn test_create_invalid_url() {
    let (state, _repo) = common::create_test_state(false);
    let server = common::test_server(state);

    let response = server
        .post("/url")
        .json(&json!({ "slug": "x", "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "url must be a valid URL");
    assert!(json["stack"].as_str().unwrap().contains("validation_error"));
}

#[tokio::test]
async fn test_create_missing_url() {
    let (state, _repo) = common::create_test_state(false);
    let server = common::test_server(state);

    let response = server.post("/url").json(&json!({ "slug": "abc" })).await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "url is a required field"
    );
}

#[tokio::test]
async fn test_create_invalid_slug() {
    let (state, _repo) = common::create_test_state(false);
    let server = common::test_server(state);

    let response = server
        .post("/url")
        .json(&json!({ "slug": "bad!", "url": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_create_url_with_newline_is_rejected() {
    let (state, repo) = common::create_test_state(false);
    let server = common::test_server(state);

    for url in ["https://example.com/a\nb", "https://example.com/a\tb"] {
        let response = server.post("/url").json(&json!({ "url": url })).await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<serde_json::Value>()["message"],
            "url must not contain whitespace or control characters"
        );
    }

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_slug_checked_only_at_its_end() {
    let (state, _repo) = common::create_test_state(false);
    let server = common::test_server(state);

    let response = server
        .post("/url")
        .json(&json!({ "slug": "My Link", "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["slug"], "my link");
}

#[tokio::test]
async fn test_create_route_names_as_slugs() {
    let (state, _repo) = common::create_test_state(false);
    let server = common::test_server(state);

    for slug in ["url", "health", "static"] {
        let response = server
            .post("/url")
            .json(&json!({ "slug": slug, "url": "https://example.com" }))
            .await;

        response.assert_status_ok();
        assert_eq!(response.json::<serde_json::Value>()["slug"], slug);
    }
}

#[tokio::test]
async fn test_create_overlong_slug_after_trim() {
    let (state, _repo) = common::create_test_state(false);
    let server = common::test_server(state);

    let padded = format!("  {}  ", "a".repeat(64));
    server
        .post("/url")
        .json(&json!({ "slug": padded, "url": "https://example.com" }))
        .await
        .assert_status_ok();

    server
        .post("/url")
        .json(&json!({ "slug": "b".repeat(65), "url": "https://example.com" }))
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn test_create_malformed_json() {
    let (state, _repo) = common::create_test_state(false);
    let server = common::test_server(state);

    let response = server
        .post("/url")
        .text("{ not json")
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<serde_json::Value>()["message"].is_string());
}

#[tokio::test]
async fn test_create_self_reference_conflict() {
    let (state, _repo) = common::create_test_state(false);
    let server = common::test_server(state);

    for body in [
        json!({ "url": format!("https://{}/abc123", common::SERVICE_DOMAIN) }),
        json!({ "slug": "chain", "url": format!("https://{}/abc123", common::SERVICE_DOMAIN) }),
    ] {
        let response = server.post("/url").json(&body).await;

        response.assert_status(StatusCode::CONFLICT);
        assert_eq!(
            response.json::<serde_json::Value>()["message"],
            "Already a short link"
        );
    }
}

#[tokio::test]
async fn test_create_slug_conflict_keeps_first_link() {
    let (state, repo) = common::create_test_state(false);
    let server = common::test_server(state);

    server
        .post("/url")
        .json(&json!({ "slug": "taken", "url": "https://a.com" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/url")
        .json(&json!({ "slug": "taken", "url": "https://b.com" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "Slug is already in use"
    );

    let kept = repo.find_by_slug("taken").await.unwrap().unwrap();
    assert_eq!(kept.url, "https://a.com");
}

#[tokio::test]
async fn test_production_hides_stack() {
    let (state, _repo) = common::create_test_state(true);
    let server = common::test_server(state);

    let response = server
        .post("/url")
        .json(&json!({ "url": "not-a-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["message"], "url must be a valid URL");
    assert_eq!(json["stack"], STACK_PLACEHOLDER);
}

#[tokio::test]
async fn test_create_storage_failure_is_internal() {
    let server = common::test_server(common::create_failing_state());

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<serde_json::Value>()["message"],
        "Database error"
    );
}
