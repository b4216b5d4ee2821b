//! Full-text query clause builders for Elasticsearch.

use serde_json::{Value, json};

use crate::types::SearchField;

/// Wraps `value` in a single-key object, for DSL objects keyed by field name.
pub(crate) fn keyed(key: &str, value: Value) -> Value {
    let mut map = serde_json::Map::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}

/// Builds the full-text clause for `query` over `fields`.
///
/// A single field yields a `match` query with automatic fuzziness, so minor
/// misspellings still hit. Several fields yield a `multi_match` query where
/// boosts are rendered as `field^boost`. Returns `None` when the query is
/// absent or empty, or there is no field to search. Blank text is still a
/// query and is sent as is.
pub fn build_text_clause(query: Option<&str>, fields: &[SearchField]) -> Option<Value> {
    let query = query.filter(|q| !q.is_empty())?;

    match fields {
        [] => None,
        [field] => Some(json!({
            "match": keyed(
                &field.name,
                json!({
                    "query": query,
                    "fuzziness": "auto",
                    "boost": field.weight()
                })
            )
        })),
        _ => {
            let rendered: Vec<String> = fields.iter().map(ToString::to_string).collect();
            Some(json!({
                "multi_match": {
                    "query": query,
                    "fields": rendered
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_field_is_fuzzy_match() {
        let clause = build_text_clause(Some("Drama"), &[SearchField::new("genres")]).unwrap();
        assert_eq!(clause["match"]["genres"]["query"], "Drama");
        assert_eq!(clause["match"]["genres"]["fuzziness"], "auto");
    }

    #[test]
    fn test_multi_field_renders_boosts() {
        let fields = [
            SearchField::boosted("title", 3.0),
            SearchField::new("description"),
        ];
        let clause = build_text_clause(Some("Matrix"), &fields).unwrap();
        assert_eq!(clause["multi_match"]["query"], "Matrix");
        assert_eq!(
            clause["multi_match"]["fields"],
            json!(["title^3", "description"])
        );
    }

    #[test]
    fn test_absent_query_matches_everything() {
        assert!(build_text_clause(None, &[SearchField::new("genres")]).is_none());
        assert!(build_text_clause(Some(""), &[SearchField::new("genres")]).is_none());
    }

    #[test]
    fn test_blank_query_is_still_a_query() {
        let clause = build_text_clause(Some("  "), &[SearchField::new("genres")]).unwrap();
        assert_eq!(clause["match"]["genres"]["query"], "  ");
    }
}
