//! Elasticsearch Query DSL builder.
//!
//! Translates [`PageParams`], a full-text clause and [`NestedQuery`] filters
//! into a complete search body.

use serde_json::{Value, json};

use crate::types::{NestedQuery, PageParams, RELEVANCE_SCORE_FIELD, SearchField, SortDirective};

use super::fts;

/// A complete Elasticsearch query body ready to be sent.
#[derive(Debug, Clone)]
pub struct EsQuery {
    /// The complete query body.
    pub body: Value,
    /// The index to search.
    pub index: String,
}

/// Builds Elasticsearch search bodies for one index.
pub struct EsQueryBuilder<'a> {
    index: &'a str,
}

impl<'a> EsQueryBuilder<'a> {
    /// Creates a new query builder.
    pub fn new(index: &'a str) -> Self {
        Self { index }
    }

    /// Builds a listing query, optionally restricted by nested filters.
    pub fn build_list(&self, params: &PageParams, nested: &[NestedQuery]) -> EsQuery {
        self.build(params, None, nested)
    }

    /// Builds a full-text query over `fields`.
    pub fn build_text_search(
        &self,
        query: Option<&str>,
        fields: &[SearchField],
        params: &PageParams,
    ) -> EsQuery {
        let text = fts::build_text_clause(query, fields);
        self.build(params, text, &[])
    }

    /// Builds a complete search body.
    ///
    /// The text clause goes into `must`; nested filters go into `should` with
    /// `minimum_should_match: 1`, so a document must satisfy the text clause
    /// and at least one nested filter. Without either, every document matches.
    pub fn build(
        &self,
        params: &PageParams,
        text: Option<Value>,
        nested: &[NestedQuery],
    ) -> EsQuery {
        let must_clauses: Vec<Value> = text.into_iter().collect();
        let should_clauses: Vec<Value> = nested.iter().map(build_nested_clause).collect();

        let query = if must_clauses.is_empty() && should_clauses.is_empty() {
            json!({ "match_all": {} })
        } else {
            let mut bool_query = json!({});
            if !must_clauses.is_empty() {
                bool_query["must"] = json!(must_clauses);
            }
            if !should_clauses.is_empty() {
                bool_query["should"] = json!(should_clauses);
                bool_query["minimum_should_match"] = json!(1);
            }
            json!({ "bool": bool_query })
        };

        let body = json!({
            "query": query,
            "sort": build_sort(params.sort()),
            "size": params.page_size(),
            "from": params.offset(),
        });

        EsQuery {
            body,
            index: self.index.to_string(),
        }
    }
}

/// Builds a `nested` term filter for one embedded collection.
fn build_nested_clause(nested: &NestedQuery) -> Value {
    json!({
        "nested": {
            "path": nested.path,
            "query": {
                "bool": {
                    "filter": {
                        "term": fts::keyed(&nested.qualified_field(), json!(nested.value))
                    }
                }
            }
        }
    })
}

/// Builds the sort clause: directives in order, then relevance descending.
fn build_sort(directives: &[SortDirective]) -> Value {
    let mut sort_clauses: Vec<Value> = directives
        .iter()
        .map(|directive| {
            fts::keyed(
                &directive.field,
                json!({ "order": directive.direction.as_str() }),
            )
        })
        .collect();

    sort_clauses.push(json!({ RELEVANCE_SCORE_FIELD: { "order": "desc" } }));

    Value::Array(sort_clauses)
}
