//! Adapter traits.
//!
//! - [`SearchProvider`] - read access to one search engine index
//! - [`CacheStore`] - key-value cache with TTL

pub mod cache;
pub mod search;

pub use cache::{CacheStore, cache_key};
pub use search::SearchProvider;
