//! Prefix query implementation.

use serde_json::{Map, Value};

use crate::query::query::{DEFAULT_BOOST, Query, field_object, put_common};

/// A query that matches terms starting with a prefix.
#[derive(Debug, Clone)]
pub struct PrefixQuery {
    field: String,
    prefix: String,
    boost: f32,
    query_name: Option<String>,
}

impl PrefixQuery {
    /// Create a new prefix query.
    pub fn new<F: Into<String>, P: Into<String>>(field: F, prefix: P) -> Self {
        PrefixQuery {
            field: field.into(),
            prefix: prefix.into(),
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Query for PrefixQuery {
    fn kind(&self) -> &'static str {
        "prefix"
    }

    fn body(&self) -> Value {
        let mut inner = Map::new();
        inner.insert("value".to_string(), Value::from(self.prefix.as_str()));
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
