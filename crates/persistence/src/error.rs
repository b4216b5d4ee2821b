//! Error types for the persistence layer.
//!
//! This module defines all error types used by the search engine and cache
//! adapters, following a hierarchy that separates engine errors, cache errors
//! and validation errors.
//!
//! Semantic absence (an id or field lookup that finds nothing) is never an
//! error: adapters and services return `Ok(None)` or an empty list for it.
//! Connectivity failures are kept distinct from every other failure so callers
//! can tell "not found" from "unavailable".

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all persistence operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Search engine errors
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Cache errors
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl StorageError {
    /// Returns true when the error is a connectivity failure of the engine or
    /// the cache backend.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StorageError::Engine(EngineError::Unavailable { .. })
                | StorageError::Cache(CacheError::Unavailable { .. })
        )
    }
}

/// Errors originating from the search engine.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The engine could not be reached (transport or connectivity failure).
    #[error("search engine unavailable: {backend_name}: {message}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// The engine answered with a failure status.
    #[error("query on index {index} failed with status {status}: {message}")]
    QueryFailed {
        backend_name: String,
        index: String,
        status: u16,
        message: String,
    },

    /// The engine answered with a body that could not be interpreted.
    #[error("malformed response from {backend_name}: {message}")]
    MalformedResponse {
        backend_name: String,
        message: String,
    },
}

/// Errors originating from the cache backend.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The cache backend could not be reached.
    #[error("cache unavailable: {backend_name}: {message}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// The cache backend was reached but the command failed.
    #[error("cache error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
    },
}

/// Errors related to input or document validation.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Pagination parameters are out of range.
    #[error("invalid page parameters: {message}")]
    InvalidPageParams { message: String },

    /// A raw document does not have the shape of the expected entity.
    #[error("failed to hydrate {entity_kind}: {message}")]
    Hydration {
        entity_kind: String,
        message: String,
    },
}

/// Result type alias for persistence operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_display() {
        let err = StorageError::Engine(EngineError::Unavailable {
            backend_name: "elasticsearch".to_string(),
            message: "connection refused".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "search engine unavailable: elasticsearch: connection refused"
        );
    }

    #[test]
    fn test_cache_error_display() {
        let err = CacheError::Unavailable {
            backend_name: "redis".to_string(),
            message: "timed out".to_string(),
        };
        assert_eq!(err.to_string(), "cache unavailable: redis: timed out");
    }

    #[test]
    fn test_is_unavailable() {
        let engine: StorageError = EngineError::Unavailable {
            backend_name: "memory".to_string(),
            message: "down".to_string(),
        }
        .into();
        assert!(engine.is_unavailable());

        let cache: StorageError = CacheError::Unavailable {
            backend_name: "memory".to_string(),
            message: "down".to_string(),
        }
        .into();
        assert!(cache.is_unavailable());

        let query: StorageError = EngineError::QueryFailed {
            backend_name: "elasticsearch".to_string(),
            index: "movies".to_string(),
            status: 400,
            message: "parsing_exception".to_string(),
        }
        .into();
        assert!(!query.is_unavailable());

        let internal: StorageError = CacheError::Internal {
            backend_name: "redis".to_string(),
            message: "WRONGTYPE".to_string(),
        }
        .into();
        assert!(!internal.is_unavailable());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::Hydration {
            entity_kind: "movies".to_string(),
            message: "missing field `title`".to_string(),
        };
        assert!(err.to_string().contains("failed to hydrate movies"));
    }
}
