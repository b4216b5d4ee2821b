//! Generic cache-aside service over one entity kind.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use movies_persistence::core::{CacheStore, SearchProvider, cache_key};
use movies_persistence::error::{StorageResult, ValidationError};
use movies_persistence::types::{Document, NestedQuery, PageParams, SearchField};
use serde::Deserialize;

use crate::models::Entity;

/// How long a hydrated entity stays in the cache.
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Reads entities of kind `T` from one search index, through the cache.
///
/// Only [`get_by_id`](Self::get_by_id) goes through the cache; listing and
/// search always hit the engine. Cache and engine outages are returned to the
/// caller unchanged. A document that does not hydrate into `T` is logged and
/// treated as absent.
pub struct EntityService<T> {
    search: Arc<dyn SearchProvider>,
    cache: Arc<dyn CacheStore>,
    cache_ttl: Duration,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for EntityService<T> {
    fn clone(&self) -> Self {
        Self {
            search: Arc::clone(&self.search),
            cache: Arc::clone(&self.cache),
            cache_ttl: self.cache_ttl,
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> EntityService<T> {
    /// Creates a service reading from `search` and caching into `cache`.
    pub fn new(search: Arc<dyn SearchProvider>, cache: Arc<dyn CacheStore>) -> Self {
        Self {
            search,
            cache,
            cache_ttl: CACHE_TTL,
            _entity: PhantomData,
        }
    }

    /// Overrides the cache TTL.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Returns the cache TTL.
    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    /// Returns the underlying search provider.
    pub fn search_provider(&self) -> &Arc<dyn SearchProvider> {
        &self.search
    }

    /// Cache-aside read by id.
    ///
    /// Absence in the engine is not cached.
    pub async fn get_by_id(&self, id: &str) -> StorageResult<Option<T>> {
        if let Some(cached) = self.get_from_cache(id).await? {
            return Ok(Some(cached));
        }

        let Some(doc) = self.search.get_by_id(id).await? else {
            tracing::debug!(entity_kind = T::KIND, id, "Not found in engine");
            return Ok(None);
        };

        let Some(entity) = hydrate::<T>(&doc) else {
            return Ok(None);
        };

        self.put_to_cache(&entity).await?;
        Ok(Some(entity))
    }

    /// Returns the first entity whose `field` matches `value`.
    pub async fn get_by_field(&self, field: &str, value: &str) -> StorageResult<Option<T>> {
        let docs = self
            .search
            .text_search(Some(value), &[SearchField::new(field)], &PageParams::default())
            .await?;

        Ok(docs.first().and_then(hydrate::<T>))
    }

    /// Paginated listing with optional nested filters.
    pub async fn list(&self, params: &PageParams, nested: &[NestedQuery]) -> StorageResult<Vec<T>> {
        let docs = self.search.list(params, nested).await?;
        Ok(hydrate_all(&docs))
    }

    /// Full-text search.
    pub async fn text_search(
        &self,
        query: Option<&str>,
        fields: &[SearchField],
        params: &PageParams,
    ) -> StorageResult<Vec<T>> {
        let docs = self.search.text_search(query, fields, params).await?;
        Ok(hydrate_all(&docs))
    }

    /// Reads `T` from the cache. An undecodable payload counts as a miss.
    pub(crate) async fn get_from_cache(&self, id: &str) -> StorageResult<Option<T>> {
        let key = cache_key(T::KIND, id);
        let Some(bytes) = self.cache.get(&key).await? else {
            tracing::debug!(key = %key, "Cache miss");
            return Ok(None);
        };

        match serde_json::from_slice::<T>(&bytes) {
            Ok(entity) => {
                tracing::debug!(key = %key, "Cache hit");
                Ok(Some(entity))
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding undecodable cache entry");
                Ok(None)
            }
        }
    }

    /// Writes `entity` to the cache under its kind-prefixed key.
    pub(crate) async fn put_to_cache(&self, entity: &T) -> StorageResult<()> {
        let key = cache_key(T::KIND, entity.id());
        let payload = match serde_json::to_vec(entity) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Skipping cache write");
                return Ok(());
            }
        };
        self.cache.put(&key, &payload, self.cache_ttl).await
    }
}

/// Builds `T` from a raw document, logging the payload when it does not fit.
pub(crate) fn hydrate<T: Entity>(doc: &Document) -> Option<T> {
    let result = T::deserialize(doc)
        .map_err(|e| e.to_string())
        .and_then(|entity| entity.validate().map(|()| entity));

    match result {
        Ok(entity) => Some(entity),
        Err(message) => {
            let error = ValidationError::Hydration {
                entity_kind: T::KIND.to_string(),
                message,
            };
            tracing::error!(error = %error, payload = %doc, "Skipping document");
            None
        }
    }
}

/// Hydrates every document, skipping (and logging) the ones that fail.
pub(crate) fn hydrate_all<T: Entity>(docs: &[Document]) -> Vec<T> {
    docs.iter().filter_map(hydrate::<T>).collect()
}
