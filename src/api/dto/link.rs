//! DTOs for the link creation endpoint.

use crate::domain::entities::Link;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short link.
///
/// Both fields are optional at the JSON level so that a missing `url`
/// produces a validation message instead of a deserialization error.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// Desired slug. Generated when absent or blank.
    pub slug: Option<String>,

    /// Destination URL. Shape and length are checked after trimming by
    /// [`crate::utils::url_validator::validate_url`].
    #[validate(required(message = "url is a required field"))]
    pub url: Option<String>,
}

/// The stored link as returned to clients.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkResponse {
    pub id: i64,
    pub slug: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            slug: link.slug,
            url: link.url,
            created_at: link.created_at,
        }
    }
}
