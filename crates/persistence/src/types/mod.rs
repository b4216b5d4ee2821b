//! Core types for pagination and engine-agnostic queries.

mod pagination;
mod search_params;

pub use pagination::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, FETCH_ALL_PAGE_SIZE, PageParams};
pub use search_params::{
    Document, NestedQuery, RELEVANCE_SCORE_FIELD, SearchField, SortDirection, SortDirective,
};
