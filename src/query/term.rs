//! Term query implementation for exact term matching.

use serde_json::{Map, Value};

use crate::query::query::{DEFAULT_BOOST, Query, field_object, put_common};

/// A query that matches documents containing an exact, unanalyzed term.
#[derive(Debug, Clone)]
pub struct TermQuery {
    /// The field to search in.
    field: String,
    /// The term to search for.
    value: Value,
    /// The boost factor for this query.
    boost: f32,
    /// Optional `_name`.
    query_name: Option<String>,
}

impl TermQuery {
    /// Create a new term query.
    ///
    /// The value is sent as-is; the engine does not analyze it.
    pub fn new<F, V>(field: F, value: V) -> Self
    where
        F: Into<String>,
        V: Into<Value>,
    {
        TermQuery {
            field: field.into(),
            value: value.into(),
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the term.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Set the boost factor.
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }
}

impl Query for TermQuery {
    fn kind(&self) -> &'static str {
        "term"
    }

    fn body(&self) -> Value {
        let mut inner = Map::new();
        inner.insert("value".to_string(), self.value.clone());
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
    fn test_term_query_creation() {
        let query = TermQuery::new("status", "active");

        assert_eq!(query.field(), "status");
        assert_eq!(query.value(), &json!("active"));
        assert_eq!(query.boost(), 1.0);
        assert_eq!(query.query_name(), None);
    }

    #[test]
    fn test_term_query_with_boost() {
        let query = TermQuery::new("status", "active").with_boost(2.5);

        assert_eq!(query.boost(), 2.5);
    }

    #[test]
    fn test_term_query_json() {
        let mut query = TermQuery::new("age", 42);
        query.set_query_name("adults".to_string());

        assert_eq!(
            query.to_json(),
            json!({"term": {"age": {"value": 42, "boost": 1.0, "_name": "adults"}}})
        );
    }
}
