//! Terms aggregation: one bucket per distinct value of a field.

use serde_json::{Map, Value};

use crate::aggregation::aggregation::Aggregation;

/// Default number of buckets returned.
pub const DEFAULT_SIZE: u32 = 10;

/// Default minimum document count for a bucket to be returned.
pub const DEFAULT_MIN_DOC_COUNT: u64 = 1;

/// A multi-bucket aggregation keyed by the distinct values of `field`.
#[derive(Debug, Clone)]
pub struct TermsAggregation {
    name: String,
    field: String,
    size: u32,
    min_doc_count: u64,
    sub_aggregations: Vec<Box<dyn Aggregation>>,
}

impl TermsAggregation {
    /// Create a terms aggregation.
    pub fn new<N: Into<String>, F: Into<String>>(name: N, field: F) -> Self {
        TermsAggregation {
            name: name.into(),
            field: field.into(),
            size: DEFAULT_SIZE,
            min_doc_count: DEFAULT_MIN_DOC_COUNT,
            sub_aggregations: Vec::new(),
        }
    }

    /// Set the number of buckets.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    /// Set the minimum document count per bucket.
    pub fn with_min_doc_count(mut self, min_doc_count: u64) -> Self {
        self.min_doc_count = min_doc_count;
        self
    }

    /// Add a sub-aggregation.
    pub fn with_sub_aggregation(mut self, aggregation: Box<dyn Aggregation>) -> Self {
        self.sub_aggregations.push(aggregation);
        self
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the number of buckets.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Get the minimum document count.
    pub fn min_doc_count(&self) -> u64 {
        self.min_doc_count
    }
}

impl Aggregation for TermsAggregation {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        "terms"
    }

    fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("field".to_string(), Value::from(self.field.as_str()));
        body.insert("size".to_string(), Value::from(self.size));
        body.insert("min_doc_count".to_string(), Value::from(self.min_doc_count));
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_terms_aggregation_defaults() {
        let agg = TermsAggregation::new("genres", "genre");

        assert_eq!(agg.size(), 10);
        assert_eq!(agg.min_doc_count(), 1);
        assert!(agg.sub_aggregations().is_empty());
    }

    #[test]
    fn test_terms_aggregation_json() {
        let agg = TermsAggregation::new("genres", "genre")
            .with_size(5)
            .with_min_doc_count(0);

        assert_eq!(
            agg.to_json(),
            json!({"genres": {"terms": {"field": "genre", "size": 5, "min_doc_count": 0}}})
        );
    }
}
