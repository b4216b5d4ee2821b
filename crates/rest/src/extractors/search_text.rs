//! Extractors for the non-paging query parameters.

use axum::{extract::FromRequestParts, http::request::Parts};

use super::pagination::query_pairs;
use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// The required `query` parameter of search endpoints.
///
/// A missing parameter is rejected with `422 Unprocessable Entity`; an empty
/// one is passed through and matches everything.
#[derive(Debug, Clone)]
pub struct SearchText(pub String);

impl SearchText {
    /// Finds `query` among raw query pairs. The last occurrence wins.
    pub fn from_pairs(pairs: &[(String, String)]) -> RestResult<Self> {
        pairs
            .iter()
            .rev()
            .find(|(key, _)| key == "query")
            .map(|(_, value)| SearchText(value.clone()))
            .ok_or_else(|| RestError::invalid_params("query parameter is required"))
    }
}

impl FromRequestParts<AppState> for SearchText {
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let pairs = query_pairs(parts, state).await?;
        SearchText::from_pairs(&pairs)
    }
}

/// The optional `genre` id filter of the film listing.
#[derive(Debug, Clone, Default)]
pub struct GenreFilter(pub Option<String>);

impl FromRequestParts<AppState> for GenreFilter {
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let pairs = query_pairs(parts, state).await?;
        let genre = pairs
            .into_iter()
            .rev()
            .find(|(key, value)| key == "genre" && !value.is_empty())
            .map(|(_, value)| value);
        Ok(GenreFilter(genre))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_required() {
        let err = SearchText::from_pairs(&[("page_size".to_string(), "5".to_string())]).unwrap_err();
        assert!(matches!(err, RestError::InvalidParams { .. }));
    }

    #[test]
    fn test_query_found() {
        let SearchText(text) = SearchText::from_pairs(&[
            ("query".to_string(), "star".to_string()),
            ("query".to_string(), "matrix".to_string()),
        ])
        .unwrap();
        assert_eq!(text, "matrix");
    }
}
