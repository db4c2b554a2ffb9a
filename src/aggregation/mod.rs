//! Aggregation object model.

#[allow(clippy::module_inception)]
pub mod aggregation;
pub mod metric;
pub mod nested;
pub mod terms;

pub use self::aggregation::Aggregation;
pub use self::metric::{MetricAggregation, MetricKind};
pub use self::nested::NestedAggregation;
pub use self::terms::TermsAggregation;
