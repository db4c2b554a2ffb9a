//! Range query implementation for querying within value ranges.

use serde_json::{Map, Value};

use crate::query::query::{DEFAULT_BOOST, Query, field_object, put_common};

/// A query that matches documents with field values within a specified range.
///
/// Bounds are sent as JSON values so numbers, strings and date math
/// (`"now-1d/d"`) all work; the engine interprets them using the field mapping
/// and the optional `format`.
#[derive(Debug, Clone)]
pub struct RangeQuery {
    /// The field to search in.
    field: String,
    /// Lower bound of the range, unbounded when `None`.
    from: Option<Value>,
    /// Upper bound of the range, unbounded when `None`.
    to: Option<Value>,
    /// Whether `from` itself is in range.
    include_lower: bool,
    /// Whether `to` itself is in range.
    include_upper: bool,
    /// Date format used to parse the bounds.
    format: Option<String>,
    /// Time zone applied to date bounds.
    time_zone: Option<String>,
    /// The boost factor for this query.
    boost: f32,
    query_name: Option<String>,
}

impl RangeQuery {
    /// Create an unbounded range query with both bounds inclusive.
    pub fn new<S: Into<String>>(field: S) -> Self {
        RangeQuery {
            field: field.into(),
            from: None,
            to: None,
            include_lower: true,
            include_upper: true,
            format: None,
            time_zone: None,
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Set the lower bound.
    pub fn with_from<V: Into<Value>>(mut self, from: V) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Set the upper bound.
    pub fn with_to<V: Into<Value>>(mut self, to: V) -> Self {
        self.to = Some(to.into());
        self
    }

    /// Set whether the lower bound is inclusive.
    pub fn with_include_lower(mut self, include: bool) -> Self {
        self.include_lower = include;
        self
    }

    /// Set whether the upper bound is inclusive.
    pub fn with_include_upper(mut self, include: bool) -> Self {
        self.include_upper = include;
        self
    }

    /// Set the date format of the bounds.
    pub fn with_format<S: Into<String>>(mut self, format: S) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set the time zone of the bounds.
    pub fn with_time_zone<S: Into<String>>(mut self, time_zone: S) -> Self {
        self.time_zone = Some(time_zone.into());
        self
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the lower bound.
    pub fn from(&self) -> Option<&Value> {
        self.from.as_ref()
    }

    /// Get the upper bound.
    pub fn to(&self) -> Option<&Value> {
        self.to.as_ref()
    }

    /// Check whether the lower bound is inclusive.
    pub fn include_lower(&self) -> bool {
        self.include_lower
    }

    /// Check whether the upper bound is inclusive.
    pub fn include_upper(&self) -> bool {
        self.include_upper
    }

    /// Get the date format.
    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    /// Get the time zone.
    pub fn time_zone(&self) -> Option<&str> {
        self.time_zone.as_deref()
    }
}

impl Query for RangeQuery {
    fn kind(&self) -> &'static str {
        "range"
    }

    fn body(&self) -> Value {
        let mut inner = Map::new();
        inner.insert("from".to_string(), self.from.clone().unwrap_or(Value::Null));
        inner.insert("to".to_string(), self.to.clone().unwrap_or(Value::Null));
        inner.insert("include_lower".to_string(), Value::from(self.include_lower));
        inner.insert("include_upper".to_string(), Value::from(self.include_upper));
        if let Some(time_zone) = &self.time_zone {
            inner.insert("time_zone".to_string(), Value::from(time_zone.as_str()));
        }
        if let Some(format) = &self.format {
            inner.insert("format".to_string(), Value::from(format.as_str()));
        }
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
