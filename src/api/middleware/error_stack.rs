//! Hides error stacks in production.
//!
//! [`crate::error::AppError`] responses always carry a diagnostic `stack`.
//! When the service runs in production this middleware rebuilds such
//! responses with the stack replaced by [`crate::error::STACK_PLACEHOLDER`].

use axum::{
    Json,
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::{ErrorBody, ErrorMessage};
use crate::state::AppState;

/// Middleware function, used with `axum::middleware::from_fn_with_state`.
pub async fn layer(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    if !state.production {
        return response;
    }

    match response.extensions().get::<ErrorMessage>().cloned() {
        Some(ErrorMessage(message)) => {
            (response.status(), Json(ErrorBody::redacted(message))).into_response()
        }
        None => response,
    }
}
