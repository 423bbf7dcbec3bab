//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for short links.
///
/// The storage engine must enforce slug uniqueness atomically: of two
/// concurrent inserts with the same slug exactly one succeeds.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug already exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by exact slug match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError>;

    /// Counts all stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}
