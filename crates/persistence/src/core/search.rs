//! Search provider trait.
//!
//! [`SearchProvider`] is the capability set every search engine adapter
//! exposes over a single index: exact lookup by id, paginated listing with
//! optional nested-path filters, and full-text search. All three return raw
//! [`Document`]s; hydration into typed entities happens in the service layer.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{Document, NestedQuery, PageParams, SearchField};

/// Read access to one index of a search engine.
///
/// # Errors
///
/// Absence is not an error: [`get_by_id`](Self::get_by_id) returns `Ok(None)`
/// when the engine reports not-found. Connectivity failures surface as
/// `StorageError::Engine(EngineError::Unavailable { .. })` and are never
/// swallowed.
///
/// # Example
///
/// ```ignore
/// use movies_persistence::core::SearchProvider;
/// use movies_persistence::types::{NestedQuery, PageParams};
///
/// async fn films_of<S: SearchProvider + ?Sized>(index: &S, person_id: &str) {
///     let filters = [
///         NestedQuery::term("actors", "id", person_id),
///         NestedQuery::term("writers", "id", person_id),
///     ];
///     let docs = index.list(&PageParams::default(), &filters).await?;
/// }
/// ```
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Returns a human-readable name for this backend.
    fn backend_name(&self) -> &'static str;

    /// Returns the name of the index this provider reads.
    fn index_name(&self) -> &str;

    /// Looks up a single document by its id.
    async fn get_by_id(&self, id: &str) -> StorageResult<Option<Document>>;

    /// Lists documents page by page.
    ///
    /// When `nested` is non-empty a document matches if it satisfies *any*
    /// of the nested filters. Sorting follows `params.sort()` with the
    /// relevance score as the final tie-breaker.
    async fn list(&self, params: &PageParams, nested: &[NestedQuery])
    -> StorageResult<Vec<Document>>;

    /// Full-text search.
    ///
    /// A single field produces a fuzzy match on that field; several fields
    /// produce a multi-field match honoring each field's boost. A `query` of
    /// `None` matches every document.
    async fn text_search(
        &self,
        query: Option<&str>,
        fields: &[SearchField],
        params: &PageParams,
    ) -> StorageResult<Vec<Document>>;
}
