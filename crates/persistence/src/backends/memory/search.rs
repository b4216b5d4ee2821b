//! In-memory [`SearchProvider`] that evaluates query intents directly over
//! JSON documents.
//!
//! Matching is a small approximation of an inverted index: field values are
//! split into lowercase alphanumeric tokens, a single-field query tolerates a
//! few typos (Levenshtein distance scaled by token length, mirroring `AUTO`
//! fuzziness), and a multi-field query scores each field by its boost.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;

use crate::core::SearchProvider;
use crate::error::{EngineError, StorageResult};
use crate::types::{Document, NestedQuery, PageParams, SearchField, SortDirection, SortDirective};

const BACKEND_NAME: &str = "memory";

/// A single index held in memory.
#[derive(Debug)]
pub struct MemoryIndex {
    index: String,
    docs: RwLock<Vec<Document>>,
    available: AtomicBool,
}

impl MemoryIndex {
    /// Creates an empty index.
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            docs: RwLock::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Adds a document. Documents are looked up by their `id` field.
    pub fn insert(&self, doc: Document) {
        self.docs.write().push(doc);
    }

    /// Adds several documents in order.
    pub fn insert_many(&self, docs: impl IntoIterator<Item = Document>) {
        self.docs.write().extend(docs);
    }

    /// Returns the number of stored documents.
    pub fn len(&self) -> usize {
        self.docs.read().len()
    }

    /// Returns true when the index holds no documents.
    pub fn is_empty(&self) -> bool {
        self.docs.read().is_empty()
    }

    /// Simulates an outage: while unavailable every call fails with
    /// `EngineError::Unavailable`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, AtomicOrdering::SeqCst);
    }

    fn ensure_available(&self) -> StorageResult<()> {
        if self.available.load(AtomicOrdering::SeqCst) {
            Ok(())
        } else {
            Err(EngineError::Unavailable {
                backend_name: BACKEND_NAME.to_string(),
                message: format!("index {} is offline", self.index),
            }
            .into())
        }
    }

    /// Filters, sorts and paginates the stored documents.
    ///
    /// `score` returns `None` for documents that do not match.
    fn run<F>(&self, params: &PageParams, score: F) -> Vec<Document>
    where
        F: Fn(&Document) -> Option<f64>,
    {
        let docs = self.docs.read();
        let mut hits: Vec<(f64, &Document)> = docs
            .iter()
            .filter_map(|doc| score(doc).map(|s| (s, doc)))
            .collect();

        // Stable sort keeps insertion order as the last tie-breaker.
        hits.sort_by(|(score_a, a), (score_b, b)| {
            compare_by_directives(a, b, params.sort())
                .then_with(|| score_b.partial_cmp(score_a).unwrap_or(Ordering::Equal))
        });

        let offset = usize::try_from(params.offset()).unwrap_or(usize::MAX);
        hits.into_iter()
            .skip(offset)
            .take(params.page_size() as usize)
            .map(|(_, doc)| doc.clone())
            .collect()
    }
}

#[async_trait]
impl SearchProvider for MemoryIndex {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    fn index_name(&self) -> &str {
        &self.index
    }

    async fn get_by_id(&self, id: &str) -> StorageResult<Option<Document>> {
        self.ensure_available()?;
        Ok(self
            .docs
            .read()
            .iter()
            .find(|doc| doc.get("id").and_then(Value::as_str) == Some(id))
            .cloned())
    }

    async fn list(
        &self,
        params: &PageParams,
        nested: &[NestedQuery],
    ) -> StorageResult<Vec<Document>> {
        self.ensure_available()?;
        Ok(self.run(params, |doc| {
            if nested.is_empty() || nested.iter().any(|n| matches_nested(doc, n)) {
                Some(1.0)
            } else {
                None
            }
        }))
    }

    async fn text_search(
        &self,
        query: Option<&str>,
        fields: &[SearchField],
        params: &PageParams,
    ) -> StorageResult<Vec<Document>> {
        self.ensure_available()?;

        let query = query.filter(|q| !q.is_empty());
        let (Some(query), false) = (query, fields.is_empty()) else {
            return Ok(self.run(params, |_| Some(1.0)));
        };

        // Text that tokenizes to nothing can match nothing.
        let query_tokens = tokenize(query);
        if query_tokens.is_empty() {
            return Ok(Vec::new());
        }

        let fuzzy = fields.len() == 1;
        Ok(self.run(params, |doc| {
            let score: f64 = fields
                .iter()
                .map(|field| {
                    let doc_tokens = field_tokens(doc, &field.name);
                    let matched = query_tokens
                        .iter()
                        .filter(|q| doc_tokens.iter().any(|t| token_matches(q, t, fuzzy)))
                        .count();
                    field.weight() * matched as f64
                })
                .sum();
            (score > 0.0).then_some(score)
        }))
    }
}

/// True when any element of `doc[path]` has `field` equal to `value`.
fn matches_nested(doc: &Document, nested: &NestedQuery) -> bool {
    doc.get(&nested.path)
        .and_then(Value::as_array)
        .is_some_and(|items| {
            items
                .iter()
                .any(|item| item.get(&nested.field).and_then(Value::as_str) == Some(nested.value.as_str()))
        })
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Collects tokens from every string reachable under `doc[field]`.
fn field_tokens(doc: &Document, field: &str) -> Vec<String> {
    fn collect(value: &Value, out: &mut Vec<String>) {
        match value {
            Value::String(s) => out.extend(tokenize(s)),
            Value::Array(items) => items.iter().for_each(|v| collect(v, out)),
            Value::Object(map) => map.values().for_each(|v| collect(v, out)),
            _ => {}
        }
    }

    let mut out = Vec::new();
    if let Some(value) = doc.get(field) {
        collect(value, &mut out);
    }
    out
}

/// Edit distance allowed for a query token of the given length.
fn allowed_edits(len: usize) -> usize {
    match len {
        0..=2 => 0,
        3..=5 => 1,
        _ => 2,
    }
}

fn token_matches(query: &str, token: &str, fuzzy: bool) -> bool {
    if query == token {
        return true;
    }
    fuzzy && strsim::levenshtein(query, token) <= allowed_edits(query.chars().count())
}

/// Orders two documents by the sort directives; missing values sort last in
/// either direction.
fn compare_by_directives(a: &Document, b: &Document, directives: &[SortDirective]) -> Ordering {
    for directive in directives {
        let ordering = match (a.get(&directive.field), b.get(&directive.field)) {
            (Some(x), Some(y)) if !x.is_null() && !y.is_null() => {
                let ord = compare_values(x, y);
                match directive.direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            }
            (Some(x), _) if !x.is_null() => Ordering::Less,
            (_, Some(y)) if !y.is_null() => Ordering::Greater,
            _ => Ordering::Equal,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}
