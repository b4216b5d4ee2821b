//! Elasticsearch backend implementation.
//!
//! [`ElasticsearchBackend`] owns the process-wide client; every entity kind
//! reads its own index through an [`ElasticsearchIndex`] handle, which
//! implements [`SearchProvider`](crate::core::SearchProvider).
//!
//! # Query Structure
//!
//! Every list or search request is rendered as one `bool` query:
//! - **must**: the full-text clause (`match` with fuzziness for a single
//!   field, `multi_match` with boosts for several), when present
//! - **should**: one `nested` term filter per [`NestedQuery`](crate::types::NestedQuery),
//!   with `minimum_should_match: 1` so at least one must hold
//! - **sort**: the caller's directives followed by `_score` descending
//! - **size / from**: derived from [`PageParams`](crate::types::PageParams)
//!
//! # Example
//!
//! ```ignore
//! use movies_persistence::backends::elasticsearch::{ElasticsearchBackend, ElasticsearchConfig};
//!
//! let config = ElasticsearchConfig {
//!     nodes: vec!["http://localhost:9200".to_string()],
//!     ..Default::default()
//! };
//! let backend = ElasticsearchBackend::new(config)?;
//! backend.health_check().await?;
//! let films = backend.index("movies");
//! ```

mod backend;
pub mod search;
mod search_impl;

pub use backend::{ElasticsearchAuth, ElasticsearchBackend, ElasticsearchConfig, ElasticsearchIndex};
