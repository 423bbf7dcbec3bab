//! DTOs for the health check endpoint.

use serde::Serialize;

/// Body of `GET /_/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub database: CheckStatus,
}

/// Outcome of a single dependency check.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    /// `ok` or `error`.
    pub status: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Number of stored links, when the check succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<i64>,
}

impl CheckStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
