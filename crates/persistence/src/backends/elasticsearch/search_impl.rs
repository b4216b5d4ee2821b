//! SearchProvider implementation for Elasticsearch indices.

use async_trait::async_trait;
use elasticsearch::http::StatusCode;
use elasticsearch::http::response::Response;
use elasticsearch::{GetParts, SearchParts};
use serde_json::Value;

use crate::core::SearchProvider;
use crate::error::{EngineError, StorageError, StorageResult};
use crate::types::{Document, NestedQuery, PageParams, SearchField};

use super::backend::{BACKEND_NAME, ElasticsearchIndex};
use super::search::query_builder::{EsQuery, EsQueryBuilder};

fn unavailable(error: elasticsearch::Error) -> StorageError {
    StorageError::Engine(EngineError::Unavailable {
        backend_name: BACKEND_NAME.to_string(),
        message: error.to_string(),
    })
}

fn malformed(message: String) -> StorageError {
    StorageError::Engine(EngineError::MalformedResponse {
        backend_name: BACKEND_NAME.to_string(),
        message,
    })
}

impl ElasticsearchIndex {
    /// Turns a non-success response into a `QueryFailed` error.
    async fn query_failed(&self, response: Response) -> StorageError {
        let status = response.status_code().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<unreadable body: {}>", e));
        StorageError::Engine(EngineError::QueryFailed {
            backend_name: BACKEND_NAME.to_string(),
            index: self.index.clone(),
            status,
            message,
        })
    }

    async fn execute(&self, query: EsQuery) -> StorageResult<Vec<Document>> {
        tracing::debug!(index = %query.index, body = %query.body, "Executing search");

        let response = self
            .client
            .search(SearchParts::Index(&[&query.index]))
            .body(query.body)
            .send()
            .await
            .map_err(unavailable)?;

        if !response.status_code().is_success() {
            return Err(self.query_failed(response).await);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| malformed(format!("Failed to parse search response: {}", e)))?;

        extract_sources(&body)
    }
}

/// Collects `_source` of every hit in a search response.
fn extract_sources(body: &Value) -> StorageResult<Vec<Document>> {
    let hits = body
        .get("hits")
        .and_then(|h| h.get("hits"))
        .and_then(|h| h.as_array())
        .ok_or_else(|| malformed("Search response has no hits array".to_string()))?;

    Ok(hits
        .iter()
        .filter_map(|hit| hit.get("_source").cloned())
        .collect())
}

#[async_trait]
impl SearchProvider for ElasticsearchIndex {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    fn index_name(&self) -> &str {
        &self.index
    }

    async fn get_by_id(&self, id: &str) -> StorageResult<Option<Document>> {
        let response = self
            .client
            .get(GetParts::IndexId(&self.index, id))
            .send()
            .await
            .map_err(unavailable)?;

        let status = response.status_code();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(index = %self.index, id, "Document not found");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(self.query_failed(response).await);
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| malformed(format!("Failed to parse get response: {}", e)))?;

        if body.get("found").and_then(Value::as_bool) == Some(false) {
            return Ok(None);
        }

        body.get("_source")
            .cloned()
            .map(Some)
            .ok_or_else(|| malformed(format!("Document {} has no _source", id)))
    }

    async fn list(
        &self,
        params: &PageParams,
        nested: &[NestedQuery],
    ) -> StorageResult<Vec<Document>> {
        let query = EsQueryBuilder::new(&self.index).build_list(params, nested);
        self.execute(query).await
    }

    async fn text_search(
        &self,
        query: Option<&str>,
        fields: &[SearchField],
        params: &PageParams,
    ) -> StorageResult<Vec<Document>> {
        let query = EsQueryBuilder::new(&self.index).build_text_search(query, fields, params);
        self.execute(query).await
    }
}
