//! Single-value metric aggregations.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::aggregation::aggregation::Aggregation;
use crate::error::{QueryDslError, Result};

/// The statistic computed by a [`MetricAggregation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Avg,
    Sum,
    Min,
    Max,
    ValueCount,
}

impl MetricKind {
    /// The JSON DSL name of this metric.
    pub fn key(&self) -> &'static str {
        match self {
            MetricKind::Avg => "avg",
            MetricKind::Sum => "sum",
            MetricKind::Min => "min",
            MetricKind::Max => "max",
            MetricKind::ValueCount => "value_count",
        }
    }
}

impl FromStr for MetricKind {
    type Err = QueryDslError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "avg" => Ok(MetricKind::Avg),
            "sum" => Ok(MetricKind::Sum),
            "min" => Ok(MetricKind::Min),
            "max" => Ok(MetricKind::Max),
            "value_count" => Ok(MetricKind::ValueCount),
            _ => Err(QueryDslError::invalid_option("metric", s)),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A metric aggregation over the values of `field`.
#[derive(Debug, Clone)]
pub struct MetricAggregation {
    kind: MetricKind,
    name: String,
    field: String,
    sub_aggregations: Vec<Box<dyn Aggregation>>,
}

impl MetricAggregation {
    /// Create a metric aggregation.
    pub fn new<N: Into<String>, F: Into<String>>(kind: MetricKind, name: N, field: F) -> Self {
        MetricAggregation {
            kind,
            name: name.into(),
            field: field.into(),
            sub_aggregations: Vec::new(),
        }
    }

    pub fn metric(&self) -> MetricKind {
        self.kind
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

impl Aggregation for MetricAggregation {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &'static str {
        self.kind.key()
    }

    fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("field".to_string(), Value::from(self.field.as_str()));
        Value::Object(body)
    }

    fn sub_aggregations(&self) -> &[Box<dyn Aggregation>] {
        &self.sub_aggregations
    }

    // Leaf aggregation: the engine rejects sub-aggregations here.
    fn add_sub_aggregation(&mut self, aggregation: Box<dyn Aggregation>) {
        log::warn!(
            "sub-aggregation {:?} added under metric aggregation {:?}",
            aggregation.name(),
            self.name
        );
        self.sub_aggregations.push(aggregation);
    }

    fn clone_box(&self) -> Box<dyn Aggregation> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
