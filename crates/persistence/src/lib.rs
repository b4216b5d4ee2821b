//! Movies Catalog Persistence Layer
//!
//! This crate provides read access to the catalog's search engine and its
//! cache. It knows nothing about films, genres or persons: adapters return raw
//! JSON [`Document`](types::Document)s and opaque cache bytes, and typed
//! hydration happens in the service layer.
//!
//! # Features
//!
//! - **Search abstraction**: [`SearchProvider`] covers lookup by id, paginated
//!   listing with nested-path filters, and boosted full-text search
//! - **Cache-aside store**: [`CacheStore`] with per-entry TTL and kind-prefixed
//!   keys
//! - **Distinct failures**: not-found is `Ok(None)`, connectivity problems are
//!   `Unavailable` errors, never swallowed
//!
//! # Backend Features
//!
//! ```toml
//! [dependencies]
//! movies-persistence = { version = "0.1", features = ["elasticsearch", "redis"] }
//! ```
//!
//! - `elasticsearch` (default) - Elasticsearch search provider
//! - `redis` (default) - Redis cache store
//!
//! The in-memory backends in [`backends::memory`] are always compiled.
//!
//! # Architecture
//!
//! - [`types`] - Pagination, sort directives and query intents
//! - [`error`] - Error types for all operations
//! - [`core`] - Adapter traits
//! - [`backends`] - Backend implementations
//!
//! # Quick Start
//!
//! ```
//! use movies_persistence::types::{PageParams, SortDirection};
//!
//! let params = PageParams::new(2, 10)
//!     .unwrap()
//!     .with_sort_values(["-imdb_rating"]);
//!
//! assert_eq!(params.offset(), 10);
//! assert_eq!(params.sort()[0].field, "imdb_rating");
//! assert_eq!(params.sort()[0].direction, SortDirection::Descending);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{StorageError, StorageResult};
pub use types::{Document, NestedQuery, PageParams, SearchField, SortDirective};

// Re-export core traits
pub use core::{CacheStore, SearchProvider, cache_key};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
