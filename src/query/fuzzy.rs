//! Fuzzy query implementation for approximate term matching.

use serde_json::{Map, Value};

use crate::query::options::Fuzziness;
use crate::query::query::{DEFAULT_BOOST, Query, field_object, put_common};

/// Default number of characters that must match exactly.
pub const DEFAULT_PREFIX_LENGTH: u32 = 0;

/// Default cap on the number of terms a fuzzy term expands to.
pub const DEFAULT_MAX_EXPANSIONS: u32 = 50;

/// A fuzzy query for approximate term matching.
#[derive(Debug, Clone)]
pub struct FuzzyQuery {
    /// Field to search in
    field: String,
    /// Term to search for
    value: Value,
    /// Maximum edit distance
    fuzziness: Fuzziness,
    /// Minimum prefix length that must match exactly
    prefix_length: u32,
    /// Maximum number of terms to expand to (default: 50, like Lucene)
    max_expansions: u32,
    /// Whether transpositions count as single edits (Damerau-Levenshtein)
    transpositions: bool,
    /// Optional rewrite method for the expanded terms
    rewrite: Option<String>,
    /// Boost factor for the query
    boost: f32,
    query_name: Option<String>,
}

impl FuzzyQuery {
    /// Create a new fuzzy query with default settings.
    pub fn new<F: Into<String>, V: Into<Value>>(field: F, value: V) -> Self {
        FuzzyQuery {
            field: field.into(),
            value: value.into(),
            fuzziness: Fuzziness::Auto,
            prefix_length: DEFAULT_PREFIX_LENGTH,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            transpositions: false,
            rewrite: None,
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Set the maximum edit distance.
    pub fn with_fuzziness(mut self, fuzziness: Fuzziness) -> Self {
        self.fuzziness = fuzziness;
        self
    }

    /// Set the minimum prefix length that must match exactly.
    pub fn with_prefix_length(mut self, prefix_length: u32) -> Self {
        self.prefix_length = prefix_length;
        self
    }

    /// Set the maximum number of terms to expand to.
    pub fn with_max_expansions(mut self, max_expansions: u32) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Set whether transpositions should be considered single edits.
    pub fn with_transpositions(mut self, transpositions: bool) -> Self {
        self.transpositions = transpositions;
        self
    }

    /// Set the rewrite method.
    pub fn with_rewrite<S: Into<String>>(mut self, rewrite: S) -> Self {
        self.rewrite = Some(rewrite.into());
        self
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the search term.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Get the maximum edit distance.
    pub fn fuzziness(&self) -> Fuzziness {
        self.fuzziness
    }

    /// Get the prefix length.
    pub fn prefix_length(&self) -> u32 {
        self.prefix_length
    }

    /// Get the maximum number of terms to expand to.
    pub fn max_expansions(&self) -> u32 {
        self.max_expansions
    }

    /// Check if transpositions are enabled.
    pub fn transpositions(&self) -> bool {
        self.transpositions
    }
}

impl Query for FuzzyQuery {
    fn kind(&self) -> &'static str {
        "fuzzy"
    }

    fn body(&self) -> Value {
        let mut inner = Map::new();
        inner.insert("value".to_string(), self.value.clone());
        inner.insert("fuzziness".to_string(), self.fuzziness.to_value());
        inner.insert("prefix_length".to_string(), Value::from(self.prefix_length));
        inner.insert("max_expansions".to_string(), Value::from(self.max_expansions));
        inner.insert("transpositions".to_string(), Value::from(self.transpositions));
        if let Some(rewrite) = &self.rewrite {
            inner.insert("rewrite".to_string(), Value::from(rewrite.as_str()));
        }
        put_common(&mut inner, self.boost, self.query_name.as_deref());
        field_object(&self.field, inner)
    }

    fn boost(&self) -> f32 {
        self.boost
    }

    fn set_boost(&mut self, boost: f32) {
        self.boost = boost;
    }

    fn query_name(&self) -> Option<&str> {
        self.query_name.as_deref()
    }

    fn set_query_name(&mut self, name: String) {
        self.query_name = Some(name);
    }

    fn clone_box(&self) -> Box<dyn Query> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn field(&self) -> Option<&str> {
        Some(&self.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fuzzy_query_creation() {
        let query = FuzzyQuery::new("content", "hello");

        assert_eq!(query.field(), "content");
        assert_eq!(query.value(), &json!("hello"));
        assert_eq!(query.fuzziness(), Fuzziness::Auto);
        assert_eq!(query.prefix_length(), 0);
        assert_eq!(query.max_expansions(), 50);
        assert!(!query.transpositions());
    }

    #[test]
    fn test_fuzzy_query_configuration() {
        let query = FuzzyQuery::new("content", "hello")
            .with_fuzziness(Fuzziness::ONE)
            .with_prefix_length(2)
            .with_max_expansions(10)
            .with_transpositions(true);

        assert_eq!(
            query.to_json(),
            json!({"fuzzy": {"content": {
                "value": "hello",
                "fuzziness": "1",
                "prefix_length": 2,
                "max_expansions": 10,
                "transpositions": true,
                "boost": 1.0
            }}})
        );
    }
}
