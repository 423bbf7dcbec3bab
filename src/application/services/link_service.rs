//! Link creation and redirect resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, SLUG_IN_USE};
use crate::utils::slug::{generate_slug, validate_slug};
use crate::utils::url_validator::validate_url;
use serde_json::json;
use tracing::{info, warn};

/// Message returned when a destination already points at this service.
pub const ALREADY_SHORT: &str = "Already a short link";

/// Service for creating and resolving short links.
///
/// Holds no mutable state; every call goes straight to the repository.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    service_domain: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `service_domain` is this service's own domain; destinations that
    /// contain it are refused.
    pub fn new(link_repository: Arc<dyn LinkRepository>, service_domain: impl Into<String>) -> Self {
        Self {
            link_repository,
            service_domain: service_domain.into(),
        }
    }

    /// Resolves a slug to its link.
    ///
    /// The slug is matched exactly as received. Slugs are lowercased when
    /// stored, so a mixed-case request only resolves if it was already
    /// lowercase.
    ///
    /// A storage failure is logged and reported as `None`, the same as a miss.
    pub async fn resolve(&self, slug: &str) -> Option<Link> {
        match self.link_repository.find_by_slug(slug).await {
            Ok(link) => link,
            Err(e) => {
                warn!(slug, error = %e, "Slug lookup failed, treating as not found");
                None
            }
        }
    }

    /// Creates a short link.
    ///
    /// # Pipeline
    ///
    /// 1. Validate the URL (trimmed, absolute, with a host, no whitespace)
    /// 2. Validate the slug if a non-blank slug was given
    /// 3. Refuse destinations containing the service domain
    /// 4. Generate a slug, or check that the requested one is free
    /// 5. Lowercase the slug
    /// 6. Insert; a unique violation is reported as a conflict
    ///
    /// Generated slugs are not checked before the insert.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed URL or slug.
    /// Returns [`AppError::Conflict`] for a taken slug or a self-referencing URL.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(&self, url: &str, slug: Option<&str>) -> Result<Link, AppError> {
        let url = validate_url(url).map_err(|e| {
            AppError::bad_request(e.to_string(), json!({ "url": url, "reason": format!("{e:?}") }))
        })?;

        let requested_slug = match slug.map(str::trim).filter(|s| !s.is_empty()) {
            Some(slug) => Some(validate_slug(slug)?),
            None => None,
        };

        if !self.service_domain.is_empty() && url.contains(&self.service_domain) {
            return Err(AppError::conflict(
                ALREADY_SHORT,
                json!({ "url": url, "domain": self.service_domain }),
            ));
        }

        let slug = match requested_slug {
            Some(requested) => {
                let slug = requested.to_lowercase();
                if self.link_repository.find_by_slug(&slug).await?.is_some() {
                    return Err(AppError::conflict(SLUG_IN_USE, json!({ "slug": slug })));
                }
                slug
            }
            None => generate_slug().to_lowercase(),
        };

        let link = self
            .link_repository
            .create(NewLink {
                slug,
                url: url.to_string(),
            })
            .await?;

        info!(slug = %link.slug, id = link.id, "Link created");
        Ok(link)
    }

    /// Returns the number of stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }
}
