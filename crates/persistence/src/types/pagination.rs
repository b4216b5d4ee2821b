//! Pagination and sort parameters for list and search requests.
//!
//! [`PageParams`] is the normalized value object every listing operation
//! receives: a 1-based page number, a page size and an ordered list of sort
//! directives.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

use super::search_params::SortDirective;

/// Default page number.
pub const DEFAULT_PAGE_NUMBER: u32 = 1;

/// Default page size.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page size used when a caller needs every related document in one request.
///
/// Assumes no entity relates to more documents than this. It matches the
/// engine's default maximum result window, so anything beyond it is silently
/// truncated and callers relying on it should be aware of that.
pub const FETCH_ALL_PAGE_SIZE: u32 = 10_000;

/// Pagination and sort parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    page_number: u32,
    page_size: u32,
    sort: Vec<SortDirective>,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
            sort: Vec::new(),
        }
    }
}

impl PageParams {
    /// Creates page parameters, rejecting a page number or page size below 1.
    pub fn new(page_number: u32, page_size: u32) -> Result<Self, ValidationError> {
        if page_number == 0 {
            return Err(ValidationError::InvalidPageParams {
                message: "page_number must be greater than 0".to_string(),
            });
        }
        if page_size == 0 {
            return Err(ValidationError::InvalidPageParams {
                message: "page_size must be greater than 0".to_string(),
            });
        }
        Ok(Self {
            page_number,
            page_size,
            sort: Vec::new(),
        })
    }

    /// First page of [`FETCH_ALL_PAGE_SIZE`] documents, unsorted.
    pub fn fetch_all() -> Self {
        Self {
            page_number: 1,
            page_size: FETCH_ALL_PAGE_SIZE,
            sort: Vec::new(),
        }
    }

    /// Appends sort directives parsed from raw values such as `-imdb_rating`.
    pub fn with_sort_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.sort.extend(
            values
                .into_iter()
                .filter(|v| !v.as_ref().trim().is_empty())
                .map(|v| SortDirective::parse(v.as_ref().trim())),
        );
        self
    }

    /// Returns the 1-based page number.
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Returns the page size.
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Returns the sort directives in application order.
    pub fn sort(&self) -> &[SortDirective] {
        &self.sort
    }

    /// Number of documents to skip: `page_size * (page_number - 1)`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page_size) * u64::from(self.page_number - 1)
    }
}
