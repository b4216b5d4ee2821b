//! Cache store trait.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::StorageResult;

/// Key-value store with TTL expiry used for cache-aside reads.
///
/// A connectivity failure is reported as
/// `StorageError::Cache(CacheError::Unavailable { .. })`, never as a miss.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns a human-readable name for this backend.
    fn backend_name(&self) -> &'static str;

    /// Returns the stored bytes for `key`, or `None` on a miss.
    async fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Stores `value` under `key`, expiring after `ttl`.
    async fn put(&self, key: &str, value: &[u8], ttl: Duration) -> StorageResult<()>;
}

/// Builds the cache key for an entity: `{entity_kind}_{id}`.
///
/// The kind prefix keeps entities of different kinds apart when they share
/// the same id space.
pub fn cache_key(entity_kind: &str, id: &str) -> String {
    format!("{}_{}", entity_kind, id)
}
