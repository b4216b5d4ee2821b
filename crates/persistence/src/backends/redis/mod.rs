//! Redis cache backend.
//!
//! [`RedisCache`] stores opaque byte payloads with `SETEX` and reads them back
//! with `GET`. It holds a single multiplexed [`ConnectionManager`](redis::aio::ConnectionManager)
//! that reconnects on its own after a dropped connection.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use movies_persistence::backends::redis::{RedisCache, RedisConfig};
//! use movies_persistence::core::{CacheStore, cache_key};
//!
//! let cache = RedisCache::connect(RedisConfig::default()).await?;
//! cache.put(&cache_key("genres", "g-1"), b"{}", Duration::from_secs(300)).await?;
//! ```

mod backend;

pub use backend::{RedisCache, RedisConfig};
