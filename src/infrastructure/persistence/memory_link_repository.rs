//! In-memory implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, SLUG_IN_USE};

/// Link repository backed by a [`DashMap`].
///
/// Slug uniqueness is enforced atomically through the map's entry API, so
/// it honours the same contract as the PostgreSQL constraint. Nothing is
/// persisted across restarts.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    links: DashMap<String, Link>,
    next_id: AtomicI64,
}

impl MemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        match self.links.entry(new_link.slug) {
            Entry::Occupied(entry) => Err(AppError::conflict(
                SLUG_IN_USE,
                json!({ "slug": entry.key() }),
            )),
            Entry::Vacant(entry) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
                let link = Link::new(id, entry.key().clone(), new_link.url, Utc::now());
                entry.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(slug).map(|entry| entry.value().clone()))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_link(slug: &str, url: &str) -> NewLink {
        NewLink {
            slug: slug.to_string(),
            url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = MemoryLinkRepository::new();

        let created = repo
            .create(new_link("abc123", "https://example.com"))
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let found = repo.find_by_slug("abc123").await.unwrap().unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_find_missing() {
        let repo = MemoryLinkRepository::new();
        assert!(repo.find_by_slug("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_lookup_is_case_sensitive() {
        let repo = MemoryLinkRepository::new();
        repo.create(new_link("abc", "https://example.com"))
            .await
            .unwrap();

        assert!(repo.find_by_slug("ABC").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_slug_conflicts() {
        let repo = MemoryLinkRepository::new();
        repo.create(new_link("taken", "https://a.com")).await.unwrap();

        let err = repo
            .create(new_link("taken", "https://b.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));

        let kept = repo.find_by_slug("taken").await.unwrap().unwrap();
        assert_eq!(kept.url, "https://a.com");
    }

    #[tokio::test]
    async fn test_concurrent_same_slug_single_winner() {
        let repo = Arc::new(MemoryLinkRepository::new());
        let mut handles = vec![];

        for i in 0..16 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.create(new_link("race", &format!("https://example{i}.com")))
                    .await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
