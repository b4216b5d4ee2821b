//! Error types for the movies REST API.
//!
//! [`RestError`] is what handlers return. It renders as a JSON body of the
//! form `{"detail": "..."}` with the matching status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use movies_persistence::error::StorageError;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum RestError {
    /// The requested entity does not exist.
    #[error("{entity} not found")]
    NotFound {
        /// Entity label used in the response (`film`, `genre`, `person`).
        entity: &'static str,
        /// The id that was looked up.
        id: String,
    },

    /// A query or path parameter failed validation.
    #[error("{message}")]
    InvalidParams {
        /// What was wrong with the request.
        message: String,
    },

    /// Engine or cache failure.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl RestError {
    /// Creates a not-found error.
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        RestError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Creates an invalid-params error.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        RestError::InvalidParams {
            message: message.into(),
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } => StatusCode::NOT_FOUND,
            RestError::InvalidParams { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            RestError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let detail = match &self {
            RestError::Storage(err) => {
                tracing::error!(
                    error = %err,
                    unavailable = err.is_unavailable(),
                    "Request failed on storage"
                );
                "internal server error".to_string()
            }
            RestError::NotFound { entity, id } => {
                tracing::debug!(entity, id = %id, "Entity not found");
                self.to_string()
            }
            RestError::InvalidParams { .. } => self.to_string(),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Result type for REST handlers.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use movies_persistence::error::{CacheError, EngineError};

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RestError::not_found("film", "f1").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RestError::invalid_params("page_size must be greater than 0").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );

        let engine: RestError = StorageError::Engine(EngineError::Unavailable {
            backend_name: "elasticsearch".to_string(),
            message: "connection refused".to_string(),
        })
        .into();
        assert_eq!(engine.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let cache: RestError = StorageError::Cache(CacheError::Unavailable {
            backend_name: "redis".to_string(),
            message: "connection refused".to_string(),
        })
        .into();
        assert_eq!(cache.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(RestError::not_found("genre", "g1").to_string(), "genre not found");
    }

    #[test]
    fn test_storage_error_response_hides_details() {
        let err: RestError = StorageError::Engine(EngineError::QueryFailed {
            backend_name: "elasticsearch".to_string(),
            index: "movies".to_string(),
            status: 400,
            message: "parse_exception".to_string(),
        })
        .into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
