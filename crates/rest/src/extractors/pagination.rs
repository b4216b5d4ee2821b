//! Pagination extractor.
//!
//! Turns `page_number`, `page_size` and repeated `sort` query parameters into
//! [`PageParams`].

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use movies_persistence::types::{DEFAULT_PAGE_NUMBER, PageParams};

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Axum extractor for page and sort parameters.
///
/// `page_number` and `page_size` must be positive integers, and `page_size`
/// may not exceed the configured maximum. Invalid values are rejected with
/// `422 Unprocessable Entity`.
///
/// # Example
///
/// ```rust,ignore
/// use movies_rest::extractors::Pagination;
///
/// async fn list_handler(Pagination(params): Pagination) {
///     let offset = params.offset();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Pagination(pub PageParams);

impl Pagination {
    /// Builds page parameters from raw query pairs.
    pub fn from_pairs(
        pairs: &[(String, String)],
        default_page_size: u32,
        max_page_size: u32,
    ) -> RestResult<Self> {
        let mut page_number = DEFAULT_PAGE_NUMBER;
        let mut page_size = default_page_size;
        let mut sort = Vec::new();

        for (key, value) in pairs {
            match key.as_str() {
                "page_number" => page_number = parse_positive(key, value)?,
                "page_size" => page_size = parse_positive(key, value)?,
                "sort" => sort.push(value.as_str()),
                _ => {}
            }
        }

        if page_size > max_page_size {
            return Err(RestError::invalid_params(format!(
                "page_size must not exceed {}",
                max_page_size
            )));
        }

        let params = PageParams::new(page_number, page_size)
            .map_err(|e| RestError::invalid_params(e.to_string()))?
            .with_sort_values(sort);

        Ok(Pagination(params))
    }
}

fn parse_positive(key: &str, value: &str) -> RestResult<u32> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(RestError::invalid_params(format!(
            "{} must be a positive integer, got '{}'",
            key, value
        ))),
    }
}

/// Reads the raw query string as ordered key/value pairs.
pub(crate) async fn query_pairs(
    parts: &mut Parts,
    state: &AppState,
) -> RestResult<Vec<(String, String)>> {
    let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
        .await
        .map_err(|e| RestError::invalid_params(e.body_text()))?;
    Ok(pairs)
}

impl FromRequestParts<AppState> for Pagination {
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let pairs = query_pairs(parts, state).await?;
        let config = state.config();
        Pagination::from_pairs(&pairs, config.default_page_size, config.max_page_size)
    }
}
