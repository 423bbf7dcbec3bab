//! Application error type and its HTTP representation.
//!
//! Every failure in the link creation pipeline is an [`AppError`]. Handlers
//! return `Result<_, AppError>` and axum renders the error as
//!
//! ```json
//! { "message": "Slug is already in use", "stack": "conflict: Slug is already in use ..." }
//! ```
//!
//! The `stack` field is replaced with [`STACK_PLACEHOLDER`] in production by
//! [`crate::api::middleware::error_stack`].

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Unique constraint guarding slug uniqueness in the `links` table.
pub const SLUG_CONSTRAINT: &str = "links_slug_key";

/// Message used for every slug collision, whether caught by lookup or by the constraint.
pub const SLUG_IN_USE: &str = "Slug is already in use";

/// Replacement for the `stack` field in production responses.
pub const STACK_PLACEHOLDER: &str = "⚡";

/// JSON body of an error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub stack: String,
}

impl ErrorBody {
    /// Builds a body with the stack hidden.
    pub fn redacted(message: String) -> Self {
        Self {
            message,
            stack: STACK_PLACEHOLDER.to_string(),
        }
    }
}

/// Marker attached to error responses as an extension.
///
/// Carries the client-facing message so middleware can rebuild the body
/// without parsing it.
#[derive(Debug, Clone)]
pub struct ErrorMessage(pub String);

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Conflict { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn details(&self) -> &Value {
        match self {
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Conflict { details, .. }
            | AppError::Internal { details, .. } => details,
        }
    }

    /// Diagnostic trace exposed outside production.
    pub fn stack(&self) -> String {
        format!("{}: {}\n    details: {}", self.code(), self, self.details())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        let body = ErrorBody {
            message: message.clone(),
            stack: self.stack(),
        };

        let mut response = (status, Json(body)).into_response();
        response.extensions_mut().insert(ErrorMessage(message));
        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() && db.constraint() == Some(SLUG_CONSTRAINT) {
                return AppError::conflict(SLUG_IN_USE, json!({ "constraint": SLUG_CONSTRAINT }));
            }
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({ "cause": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let message = fields
            .first()
            .and_then(|(field, errs)| {
                errs.first().map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("{field} is invalid"),
                })
            })
            .unwrap_or_else(|| "Invalid request".to_string());

        let details = serde_json::to_value(&errors).unwrap_or_default();
        AppError::bad_request(message, details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            rejection.body_text(),
            json!({ "status": rejection.status().as_u16() }),
        )
    }
}
