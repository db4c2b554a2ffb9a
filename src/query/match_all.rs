//! Query matching every document.

use serde_json::{Map, Value};

use crate::query::query::{DEFAULT_BOOST, Query, put_common};

/// A query that matches all documents with a constant score of `boost`.
#[derive(Debug, Clone)]
pub struct MatchAllQuery {
    boost: f32,
    query_name: Option<String>,
}

impl MatchAllQuery {
    /// Create a new match-all query.
    pub fn new() -> Self {
        MatchAllQuery {
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }
}

impl Default for MatchAllQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl Query for MatchAllQuery {
    fn kind(&self) -> &'static str {
        "match_all"
    }

    fn body(&self) -> Value {
        let mut body = Map::new();
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_match_all_json() {
        let query = MatchAllQuery::new();

        assert_eq!(query.to_json(), json!({"match_all": {"boost": 1.0}}));
    }
}
