//! Aggregation builders.

use crate::aggregation::{
    Aggregation, MetricAggregation, MetricKind, NestedAggregation, TermsAggregation,
};

/// Sub-aggregations of a `nested` aggregation.
#[derive(Debug, Clone, Default)]
pub struct NestedAggregationData {
    pub sub_aggregations: Vec<Box<dyn Aggregation>>,
}

impl NestedAggregationData {
    /// Replace the sub-aggregations with `aggregation`.
    pub fn sub_aggregation<A: Aggregation + 'static>(&mut self, aggregation: A) -> &mut Self {
        self.sub_aggregations = vec![Box::new(aggregation)];
        self
    }
}

/// Build a `nested` aggregation named `name` over the objects at `path`.
pub fn nested_aggregation<N, P>(
    name: N,
    path: P,
    init: impl FnOnce(&mut NestedAggregationData),
) -> NestedAggregation
where
    N: Into<String>,
    P: Into<String>,
{
    let mut params = NestedAggregationData::default();
    init(&mut params);

    let mut aggregation = NestedAggregation::new(name, path);
    for sub in params.sub_aggregations {
        aggregation.add_sub_aggregation(sub);
    }
    aggregation
}

/// Options of a `terms` aggregation.
#[derive(Debug, Clone, Default)]
pub struct TermsAggregationData {
    /// Number of buckets to return.
    pub size: Option<u32>,
    pub min_doc_count: Option<u64>,
    pub sub_aggregations: Vec<Box<dyn Aggregation>>,
}

/// Build a `terms` aggregation.
pub fn terms_aggregation<N, F>(
    name: N,
    field: F,
    init: impl FnOnce(&mut TermsAggregationData),
) -> TermsAggregation
where
    N: Into<String>,
    F: Into<String>,
{
    let mut params = TermsAggregationData::default();
    init(&mut params);

    let mut aggregation = TermsAggregation::new(name, field);
    if let Some(size) = params.size {
        aggregation = aggregation.with_size(size);
    }
    if let Some(min_doc_count) = params.min_doc_count {
        aggregation = aggregation.with_min_doc_count(min_doc_count);
    }
    for sub in params.sub_aggregations {
        aggregation.add_sub_aggregation(sub);
    }
    aggregation
}

/// Build a single-value metric aggregation.
pub fn metric_aggregation<N, F>(kind: MetricKind, name: N, field: F) -> MetricAggregation
where
    N: Into<String>,
    F: Into<String>,
{
    MetricAggregation::new(kind, name, field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_aggregation_sub_aggregation_replaces() {
        let agg = nested_aggregation("resellers", "resellers", |n| {
            n.sub_aggregation(metric_aggregation(MetricKind::Min, "first", "resellers.price"));
            n.sub_aggregation(metric_aggregation(MetricKind::Min, "min_price", "resellers.price"));
        });

        assert_eq!(agg.sub_aggregations().len(), 1);
        assert_eq!(agg.sub_aggregations()[0].name(), "min_price");
        assert_eq!(
            agg.to_json(),
            json!({"resellers": {
                "nested": {"path": "resellers"},
                "aggregations": {"min_price": {"min": {"field": "resellers.price"}}}
            }})
        );
    }

    #[test]
    fn test_nested_aggregation_extend_list() {
        let agg = nested_aggregation("resellers", "resellers", |n| {
            n.sub_aggregation(metric_aggregation(MetricKind::Min, "low", "resellers.price"));
            n.sub_aggregations
                .push(Box::new(metric_aggregation(MetricKind::Max, "high", "resellers.price")));
        });

        assert_eq!(agg.sub_aggregations().len(), 2);
    }

    #[test]
    fn test_nested_aggregation_without_subs() {
        let agg = nested_aggregation("resellers", "resellers", |_| {});

        assert!(agg.sub_aggregations().is_empty());
        assert!(agg.to_json()["resellers"].get("aggregations").is_none());
    }

    #[test]
    fn test_terms_aggregation() {
        let agg = terms_aggregation("genres", "genre", |t| {
            t.size = Some(3);
            t.sub_aggregations
                .push(Box::new(metric_aggregation(MetricKind::Avg, "avg_rating", "rating")));
        });

        assert_eq!(agg.size(), 3);
        assert_eq!(agg.min_doc_count(), 1);
        assert_eq!(
            agg.to_json()["genres"]["aggregations"]["avg_rating"],
            json!({"avg": {"field": "rating"}})
        );
    }

    #[test]
    fn test_terms_aggregation_min_doc_count() {
        let agg = terms_aggregation("genres", "genre", |t| t.min_doc_count = Some(0));

        assert_eq!(agg.min_doc_count(), 0);
        assert_eq!(agg.size(), 10);
        assert_eq!(
            agg.to_json(),
            json!({"genres": {"terms": {"field": "genre", "size": 10, "min_doc_count": 0}}})
        );
    }
}
