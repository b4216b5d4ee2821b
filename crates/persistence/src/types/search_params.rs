//! Engine-agnostic query intents.
//!
//! These types describe what a caller wants from the search engine without
//! committing to any engine's query language: sort directives, nested-path
//! filters over embedded collections and (optionally boosted) text fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Synthetic relevance score field, always appended as the last sort key.
pub const RELEVANCE_SCORE_FIELD: &str = "_score";

/// A raw, untyped document as stored in the search engine.
pub type Document = serde_json::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Ascending order.
    Ascending,
    /// Descending order.
    Descending,
}

impl SortDirection {
    /// Returns the order keyword used by search engines (`asc` / `desc`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// A sort directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortDirective {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    pub direction: SortDirection,
}

impl SortDirective {
    /// Parses a sort value (e.g., "-imdb_rating" for descending).
    pub fn parse(s: &str) -> Self {
        if let Some(stripped) = s.strip_prefix('-') {
            Self {
                field: stripped.to_string(),
                direction: SortDirection::Descending,
            }
        } else {
            Self {
                field: s.to_string(),
                direction: SortDirection::Ascending,
            }
        }
    }
}

/// Filter on an embedded collection: matches documents where at least one
/// element of `path` has `field` equal to `value`.
///
/// Relationships such as film credits live as nested sub-documents inside the
/// owning document, so "films where person X is a writer" becomes a nested
/// term filter on `writers.id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedQuery {
    /// Name of the nested collection (e.g., `actors`).
    pub path: String,
    /// Field within each element (e.g., `id`).
    pub field: String,
    /// Value to match by equality.
    pub value: String,
}

impl NestedQuery {
    /// Creates an equality filter on `path.field`.
    pub fn term(
        path: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    /// Returns the fully qualified field name (`path.field`).
    pub fn qualified_field(&self) -> String {
        format!("{}.{}", self.path, self.field)
    }
}

/// A field targeted by a full-text query, with an optional relevance boost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchField {
    /// Field name.
    pub name: String,
    /// Relevance multiplier; `None` means 1.
    pub boost: Option<f32>,
}

impl SearchField {
    /// Creates an unboosted field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            boost: None,
        }
    }

    /// Creates a boosted field.
    pub fn boosted(name: impl Into<String>, boost: f32) -> Self {
        Self {
            name: name.into(),
            boost: Some(boost),
        }
    }

    /// Returns the effective boost.
    pub fn weight(&self) -> f64 {
        f64::from(self.boost.unwrap_or(1.0))
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.boost {
            Some(boost) => write!(f, "{}^{}", self.name, boost),
            None => write!(f, "{}", self.name),
        }
    }
}
