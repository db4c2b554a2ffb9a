//! Wildcard query implementation.

use serde_json::{Map, Value};

use crate::query::query::{DEFAULT_BOOST, Query, field_object, put_common};

/// A query that matches terms against a pattern.
///
/// Supported wildcards:
/// - `*` matches any sequence of characters (including empty)
/// - `?` matches exactly one character
#[derive(Debug, Clone)]
pub struct WildcardQuery {
    /// Field to search in
    field: String,
    /// Wildcard pattern
    pattern: String,
    /// Boost factor for the query
    boost: f32,
    /// Optional `_name`
    query_name: Option<String>,
}

impl WildcardQuery {
    /// Create a new wildcard query.
    pub fn new<F: Into<String>, P: Into<String>>(field: F, pattern: P) -> Self {
        WildcardQuery {
            field: field.into(),
            pattern: pattern.into(),
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the wildcard pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Set the boost factor for this query.
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }
}

impl Query for WildcardQuery {
    fn kind(&self) -> &'static str {
        "wildcard"
    }

    fn body(&self) -> Value {
        let mut inner = Map::new();
        inner.insert("wildcard".to_string(), Value::from(self.pattern.as_str()));
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
