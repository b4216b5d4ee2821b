//! Search engine and cache backend implementations.
//!
//! Networked backends are gated behind feature flags; the in-memory backend
//! is always available.
//!
//! # Available Backends
//!
//! | Backend | Feature | Implements |
//! |---------|---------|------------|
//! | Elasticsearch | `elasticsearch` | `SearchProvider` |
//! | Redis | `redis` | `CacheStore` |
//! | In-memory | - | `SearchProvider`, `CacheStore` |
//!
//! # Example
//!
//! ```
//! use movies_persistence::backends::memory::{MemoryCache, MemoryIndex};
//! use serde_json::json;
//!
//! let index = MemoryIndex::new("genres");
//! index.insert(json!({"id": "g-1", "name": "Drama", "description": null}));
//!
//! let cache = MemoryCache::new();
//! assert!(cache.is_empty());
//! ```

pub mod memory;

#[cfg(feature = "elasticsearch")]
pub mod elasticsearch;

#[cfg(feature = "redis")]
pub mod redis;
