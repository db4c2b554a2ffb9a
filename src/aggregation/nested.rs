//! Nested aggregation: aggregates over nested objects under a path.

use serde_json::{Map, Value};

use crate::aggregation::aggregation::Aggregation;

/// A single-bucket aggregation over the nested documents at `path`.
#[derive(Debug, Clone)]
pub struct NestedAggregation {
    name: String,
    path: String,
    sub_aggregations: Vec<Box<dyn Aggregation>>,
}

impl NestedAggregation {
    /// Create a nested aggregation.
    pub fn new<N: Into<String>, P: Into<String>>(name: N, path: P) -> Self {
        NestedAggregation {
            name: name.into(),
            path: path.into(),
            sub_aggregations: Vec::new(),
        }
    }

    /// Add a sub-aggregation.
    pub fn with_sub_aggregation(mut self, aggregation: Box<dyn Aggregation>) -> Self {
        self.sub_aggregations.push(aggregation);
        self
    }

    /// Get the nested path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Aggregation for NestedAggregation {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "nested"
    }

    fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("path".to_string(), Value::from(self.path.as_str()));
        Value::Object(body)
    }

    fn sub_aggregations(&self) -> &[Box<dyn Aggregation>] {
        &self.sub_aggregations
    }

    fn add_sub_aggregation(&mut self, aggregation: Box<dyn Aggregation>) {
        self.sub_aggregations.push(aggregation);
    }

    fn clone_box(&self) -> Box<dyn Aggregation> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
