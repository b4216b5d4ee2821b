//! Genre service.

use std::sync::Arc;
use std::time::Duration;

use movies_persistence::core::{CacheStore, SearchProvider};
use movies_persistence::error::StorageResult;
use movies_persistence::types::PageParams;

use crate::entity::EntityService;
use crate::models::Genre;

/// Reads genres.
#[derive(Clone)]
pub struct GenreService {
    entities: EntityService<Genre>,
}

impl GenreService {
    pub fn new(search: Arc<dyn SearchProvider>, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            entities: EntityService::new(search, cache),
        }
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.entities = self.entities.with_cache_ttl(ttl);
        self
    }

    pub fn entities(&self) -> &EntityService<Genre> {
        &self.entities
    }

    pub async fn get_by_id(&self, id: &str) -> StorageResult<Option<Genre>> {
        self.entities.get_by_id(id).await
    }

    /// First genre whose `field` matches `value`.
    pub async fn get_by_field(&self, field: &str, value: &str) -> StorageResult<Option<Genre>> {
        self.entities.get_by_field(field, value).await
    }

    /// Resolves a genre name, as embedded in film documents, to the genre.
    pub async fn get_by_name(&self, name: &str) -> StorageResult<Option<Genre>> {
        self.get_by_field("name", name).await
    }

    pub async fn get_list(&self, params: &PageParams) -> StorageResult<Vec<Genre>> {
        self.entities.list(params, &[]).await
    }
}
