//! Boosting query: demotes documents that also match a negative query.

use serde_json::{Map, Value};

use crate::query::query::{DEFAULT_BOOST, Query, float_value, put_common};

/// A query that scores `positive` matches, multiplying the score of those
/// that also match `negative` by `negative_boost`.
#[derive(Debug, Clone)]
pub struct BoostingQuery {
    positive: Box<dyn Query>,
    negative: Box<dyn Query>,
    negative_boost: Option<f32>,
    boost: f32,
    query_name: Option<String>,
}

impl BoostingQuery {
    /// Create a new boosting query.
    pub fn new(positive: Box<dyn Query>, negative: Box<dyn Query>) -> Self {
        BoostingQuery {
            positive,
            negative,
            negative_boost: None,
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Set the factor applied to documents matching the negative query.
    pub fn with_negative_boost(mut self, negative_boost: f32) -> Self {
        self.negative_boost = Some(negative_boost);
        self
    }

    /// Get the positive query.
    pub fn positive(&self) -> &dyn Query {
        self.positive.as_ref()
    }

    /// Get the negative query.
    pub fn negative(&self) -> &dyn Query {
        self.negative.as_ref()
    }

    /// Get the negative boost.
    pub fn negative_boost(&self) -> Option<f32> {
        self.negative_boost
    }
}

impl Query for BoostingQuery {
    fn kind(&self) -> &'static str {
        "boosting"
    }

    fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("positive".to_string(), self.positive.to_json());
        body.insert("negative".to_string(), self.negative.to_json());
        if let Some(negative_boost) = self.negative_boost {
            body.insert("negative_boost".to_string(), float_value(negative_boost));
        }
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
    fn test_boosting_query_json() {
        let query = BoostingQuery::new(
            Box::new(TermQuery::new("text", "apple")),
            Box::new(TermQuery::new("text", "pie")),
        )
        .with_negative_boost(0.5);

        assert_eq!(query.negative_boost(), Some(0.5));
        assert_eq!(
            query.to_json(),
            json!({"boosting": {
                "positive": {"term": {"text": {"value": "apple", "boost": 1.0}}},
                "negative": {"term": {"text": {"value": "pie", "boost": 1.0}}},
                "negative_boost": 0.5,
                "boost": 1.0
            }})
        );
    }

    #[test]
    fn test_boosting_query_without_negative_boost() {
        let query = BoostingQuery::new(
            Box::new(TermQuery::new("text", "apple")),
            Box::new(TermQuery::new("text", "pie")),
        );

        assert_eq!(query.negative_boost(), None);
        assert!(query.to_json()["boosting"].get("negative_boost").is_none());
    }
}
