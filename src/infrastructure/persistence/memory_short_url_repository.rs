//! In-memory implementation of [`ShortUrlRepository`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::debug;

use crate::domain::entities::ShortUrl;
use crate::domain::repositories::{ShortUrlRepository, StoreError};

/// Thread-safe in-memory store keyed by short URL id.
///
/// A single reader-writer lock guards the whole map: reads run concurrently,
/// writes are exclusive. Data does not survive a restart.
#[derive(Debug, Default)]
pub struct MemoryShortUrlRepository {
    data: RwLock<HashMap<String, ShortUrl>>,
}

impl MemoryShortUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShortUrlRepository for MemoryShortUrlRepository {
    async fn save(&self, short_url: ShortUrl) -> Result<(), StoreError> {
        let mut data = self.data.write();
        data.insert(short_url.id().to_string(), short_url);
        Ok(())
    }

    async fn insert(&self, short_url: ShortUrl) -> Result<(), StoreError> {
        let mut data = self.data.write();

        match data.entry(short_url.id().to_string()) {
            Entry::Occupied(entry) => {
                debug!(id = %entry.key(), "Insert rejected, id taken");
                Err(StoreError::AlreadyExists(entry.key().clone()))
            }
            Entry::Vacant(entry) => {
                entry.insert(short_url);
                Ok(())
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<ShortUrl>, StoreError> {
        Ok(self.data.read().get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<ShortUrl>, StoreError> {
        Ok(self.data.read().values().cloned().collect())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.data
            .write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.data.read().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_url(id: &str) -> ShortUrl {
        ShortUrl::new(
            id,
            "https://example.com",
            format!("http://short.ly/{id}"),
            None,
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let repo = MemoryShortUrlRepository::new();
        repo.save(short_url("abc1234")).await.unwrap();

        let found = repo.find_by_id("abc1234").await.unwrap().unwrap();
        assert_eq!(found.id(), "abc1234");
        assert_eq!(found.long_url(), "https://example.com");
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = MemoryShortUrlRepository::new();
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_upserts() {
        let repo = MemoryShortUrlRepository::new();
        let mut url = short_url("abc1234");
        repo.save(url.clone()).await.unwrap();

        url.deactivate();
        repo.save(url).await.unwrap();

        let found = repo.find_by_id("abc1234").await.unwrap().unwrap();
        assert!(!found.is_active());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_existing_id() {
        let repo = MemoryShortUrlRepository::new();
        repo.insert(short_url("abc1234")).await.unwrap();

        let err = repo.insert(short_url("abc1234")).await.unwrap_err();
        assert_eq!(err, StoreError::AlreadyExists("abc1234".to_string()));
    }

    #[tokio::test]
    async fn test_insert_does_not_overwrite() {
        let repo = MemoryShortUrlRepository::new();
        repo.insert(short_url("abc1234")).await.unwrap();

        let other = ShortUrl::new("abc1234", "https://other.com", "http://s/abc1234", None, None)
            .unwrap();
        assert!(repo.insert(other).await.is_err());

        let found = repo.find_by_id("abc1234").await.unwrap().unwrap();
        assert_eq!(found.long_url(), "https://example.com");
    }

    #[tokio::test]
    async fn test_find_all() {
        let repo = MemoryShortUrlRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());

        repo.save(short_url("a")).await.unwrap();
        repo.save(short_url("b")).await.unwrap();

        let mut ids: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|u| u.id().to_string())
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = MemoryShortUrlRepository::new();
        repo.save(short_url("abc1234")).await.unwrap();

        repo.delete("abc1234").await.unwrap();
        assert!(repo.find_by_id("abc1234").await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let repo = MemoryShortUrlRepository::new();
        let err = repo.delete("missing").await.unwrap_err();
        assert_eq!(err, StoreError::NotFound("missing".to_string()));
    }
}
