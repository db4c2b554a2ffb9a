//! Constant score query: wraps a filter and gives every match the same score.

use serde_json::{Map, Value};

use crate::query::query::{DEFAULT_BOOST, Query, put_common};

/// A query returning every document matching `filter` with score `boost`.
#[derive(Debug, Clone)]
pub struct ConstantScoreQuery {
    filter: Box<dyn Query>,
    boost: f32,
    query_name: Option<String>,
}

impl ConstantScoreQuery {
    /// Create a new constant score query.
    pub fn new(filter: Box<dyn Query>) -> Self {
        ConstantScoreQuery {
            filter,
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Get the wrapped filter.
    pub fn filter(&self) -> &dyn Query {
        self.filter.as_ref()
    }
}

impl Query for ConstantScoreQuery {
    fn kind(&self) -> &'static str {
        "constant_score"
    }

    fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("filter".to_string(), self.filter.to_json());
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
    use crate::query::term::TermQuery;
    use serde_json::json;

    #[test]
    fn test_constant_score_json() {
        let mut query = ConstantScoreQuery::new(Box::new(TermQuery::new("user", "kimchy")));
        query.set_boost(1.2);

        assert_eq!(query.filter().field(), Some("user"));
        assert_eq!(
            query.to_json()["constant_score"]["filter"],
            json!({"term": {"user": {"value": "kimchy", "boost": 1.0}}})
        );
        assert_eq!(query.boost(), 1.2);
    }
}
