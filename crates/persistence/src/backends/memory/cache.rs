//! In-memory [`CacheStore`] with TTL expiry.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time::Instant;

use crate::core::CacheStore;
use crate::error::{CacheError, StorageResult};

const BACKEND_NAME: &str = "memory";

#[derive(Debug)]
struct Entry {
    value: Vec<u8>,
    expires_at: Instant,
}

/// Process-local cache. Expired entries are dropped lazily on read.
///
/// Expiry uses [`tokio::time::Instant`], so tests can move time forward with
/// a paused runtime.
#[derive(Debug)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
    available: AtomicBool,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Number of stored entries, expired ones included until they are read.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Returns true when `key` holds a live entry.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries
            .lock()
            .get(key)
            .is_some_and(|entry| entry.expires_at > Instant::now())
    }

    /// Simulates an outage: while unavailable every call fails with
    /// `CacheError::Unavailable`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> StorageResult<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(CacheError::Unavailable {
                backend_name: BACKEND_NAME.to_string(),
                message: "cache is offline".to_string(),
            }
            .into())
        }
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        self.ensure_available()?;
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn put(&self, key: &str, value: &[u8], ttl: Duration) -> StorageResult<()> {
        self.ensure_available()?;
        self.entries.lock().insert(
            key.to_string(),
            Entry {
                value: value.to_vec(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }
}
