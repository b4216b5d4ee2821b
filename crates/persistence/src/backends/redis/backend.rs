//! Redis connection handling and the `CacheStore` implementation.

use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, RedisError};
use serde::{Deserialize, Serialize};

use crate::core::CacheStore;
use crate::error::{CacheError, StorageError, StorageResult};

const BACKEND_NAME: &str = "redis";

/// Configuration for the Redis cache backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Connection URL (e.g., `redis://localhost:6379/0`).
    pub url: String,

    /// Timeout for establishing the initial connection, in milliseconds
    /// (default: 5000).
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

fn default_connect_timeout_ms() -> u64 {
    5000
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

/// Redis-backed [`CacheStore`].
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
    config: RedisConfig,
}

impl Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache")
            .field("url", &self.config.url)
            .finish_non_exhaustive()
    }
}

/// Maps a Redis failure onto the cache error taxonomy.
///
/// Anything that means the server could not be talked to is `Unavailable`;
/// a server that answered with an error is `Internal`.
fn map_redis_error(error: RedisError) -> StorageError {
    let message = error.to_string();
    let err = if error.is_io_error()
        || error.is_timeout()
        || error.is_connection_refusal()
        || error.is_connection_dropped()
    {
        CacheError::Unavailable {
            backend_name: BACKEND_NAME.to_string(),
            message,
        }
    } else {
        CacheError::Internal {
            backend_name: BACKEND_NAME.to_string(),
            message,
        }
    };
    StorageError::Cache(err)
}

impl RedisCache {
    /// Opens a connection to the configured server.
    ///
    /// Fails with `CacheError::Unavailable` when the server cannot be reached
    /// within `connect_timeout_ms`.
    pub async fn connect(config: RedisConfig) -> StorageResult<Self> {
        let client = redis::Client::open(config.url.as_str()).map_err(|e| {
            StorageError::Cache(CacheError::Internal {
                backend_name: BACKEND_NAME.to_string(),
                message: format!("Invalid Redis URL {}: {}", config.url, e),
            })
        })?;

        let timeout = Duration::from_millis(config.connect_timeout_ms);
        let conn = tokio::time::timeout(timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| {
                StorageError::Cache(CacheError::Unavailable {
                    backend_name: BACKEND_NAME.to_string(),
                    message: format!("Timed out connecting to {} after {:?}", config.url, timeout),
                })
            })?
            .map_err(map_redis_error)?;

        tracing::info!(url = %config.url, "Connected to Redis");

        Ok(Self { conn, config })
    }

    /// Returns the backend configuration.
    pub fn config(&self) -> &RedisConfig {
        &self.config
    }

    /// Sends `PING` and checks for the `PONG` reply.
    pub async fn ping(&self) -> StorageResult<()> {
        let mut conn = self.conn.clone();
        let reply: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(map_redis_error)?;

        if reply != "PONG" {
            return Err(StorageError::Cache(CacheError::Internal {
                backend_name: BACKEND_NAME.to_string(),
                message: format!("Unexpected PING reply: {}", reply),
            }));
        }
        Ok(())
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let value: Option<Vec<u8>> = conn.get(key).await.map_err(map_redis_error)?;
        tracing::trace!(key, hit = value.is_some(), "Cache lookup");
        Ok(value)
    }

    async fn put(&self, key: &str, value: &[u8], ttl: Duration) -> StorageResult<()> {
        let mut conn = self.conn.clone();
        // SETEX rejects a zero expiry
        let seconds = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, seconds)
            .await
            .map_err(map_redis_error)?;
        tracing::trace!(key, seconds, "Cache store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RedisConfig::default();
        assert_eq!(config.url, "redis://127.0.0.1:6379");
        assert_eq!(config.connect_timeout_ms, 5000);
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: RedisConfig = serde_json::from_str(r#"{"url": "redis://cache:6379/1"}"#).unwrap();
        assert_eq!(config.url, "redis://cache:6379/1");
        assert_eq!(config.connect_timeout_ms, 5000);
    }

    #[test]
    fn test_server_error_is_internal() {
        let err = map_redis_error(RedisError::from((
            redis::ErrorKind::ResponseError,
            "WRONGTYPE",
        )));
        assert!(matches!(err, StorageError::Cache(CacheError::Internal { .. })));
        assert!(!err.is_unavailable());
    }

    #[test]
    fn test_io_error_is_unavailable() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = map_redis_error(RedisError::from(io));
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let config = RedisConfig {
            url: "not a url".to_string(),
            ..Default::default()
        };
        let err = RedisCache::connect(config).await.unwrap_err();
        assert!(matches!(err, StorageError::Cache(CacheError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_unavailable() {
        let config = RedisConfig {
            url: "redis://127.0.0.1:1".to_string(),
            connect_timeout_ms: 2000,
        };
        let err = RedisCache::connect(config).await.unwrap_err();
        assert!(err.is_unavailable());
    }
}
