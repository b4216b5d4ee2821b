//! Axum extractors for catalog query parameters.
//!
//! - [`Pagination`] - `page_number`, `page_size` and repeated `sort`
//! - [`SearchText`] - the required `query` of search endpoints
//! - [`GenreFilter`] - the optional `genre` id of the film listing

mod pagination;
mod search_text;

pub use pagination::Pagination;
pub use search_text::{GenreFilter, SearchText};
