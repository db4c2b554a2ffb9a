//! Ids query: match documents by `_id`.

use serde_json::{Map, Value};

use crate::query::query::{DEFAULT_BOOST, Query, put_common};

/// A query matching documents whose id is in a set.
#[derive(Debug, Clone)]
pub struct IdsQuery {
    types: Vec<String>,
    ids: Vec<String>,
    boost: f32,
    query_name: Option<String>,
}

impl IdsQuery {
    /// Create an ids query with no ids; it matches nothing until ids are added.
    pub fn new() -> Self {
        IdsQuery {
            types: Vec::new(),
            ids: Vec::new(),
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Restrict the query to the given mapping types.
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Add ids to match. Ids already present are ignored.
    pub fn add_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            let id = id.into();
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
        self
    }

    /// Get the mapping types.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    /// Get the ids, in insertion order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

impl Default for IdsQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl Query for IdsQuery {
    fn kind(&self) -> &'static str {
        "ids"
    }

    fn body(&self) -> Value {
        let mut body = Map::new();
        if !self.types.is_empty() {
            body.insert("type".to_string(), Value::from(self.types.clone()));
        }
        body.insert("values".to_string(), Value::from(self.ids.clone()));
        put_common(&mut body, self.boost, self.query_name.as_deref());
        Value::Object(body)
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
}
