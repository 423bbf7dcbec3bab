//! Link entity representing a slug to URL mapping.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// `id` and `created_at` are assigned by the storage engine on insert.
/// `slug` is always stored in lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub slug: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, slug: String, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            slug,
            url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub slug: String,
    pub url: String,
}
