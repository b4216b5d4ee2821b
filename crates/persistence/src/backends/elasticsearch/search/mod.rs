//! Elasticsearch query translation.
//!
//! Translates engine-agnostic query intents into Elasticsearch Query DSL.

pub mod fts;
pub mod query_builder;
