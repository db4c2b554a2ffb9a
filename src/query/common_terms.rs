//! Common terms query: splits analyzed terms into low- and high-frequency
//! groups and only scores high-frequency terms when low-frequency ones match.

use serde_json::{Map, Value};

use crate::query::options::Operator;
use crate::query::query::{DEFAULT_BOOST, Query, field_object, float_value, put_common};

/// Default document-frequency ratio above which a term counts as common.
pub const DEFAULT_CUTOFF_FREQUENCY: f32 = 0.01;

#[derive(Debug, Clone)]
pub struct CommonTermsQuery {
    field: String,
    text: Value,
    high_freq_operator: Operator,
    low_freq_operator: Operator,
    analyzer: Option<String>,
    cutoff_frequency: f32,
    low_freq_minimum_should_match: Option<String>,
    high_freq_minimum_should_match: Option<String>,
    boost: f32,
    query_name: Option<String>,
}

impl CommonTermsQuery {
    pub fn new<F: Into<String>, V: Into<Value>>(field: F, text: V) -> Self {
        CommonTermsQuery {
            field: field.into(),
            text: text.into(),
            high_freq_operator: Operator::Or,
            low_freq_operator: Operator::Or,
            analyzer: None,
            cutoff_frequency: DEFAULT_CUTOFF_FREQUENCY,
            low_freq_minimum_should_match: None,
            high_freq_minimum_should_match: None,
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    pub fn with_high_freq_operator(mut self, operator: Operator) -> Self {
        self.high_freq_operator = operator;
        self
    }

    pub fn with_low_freq_operator(mut self, operator: Operator) -> Self {
        self.low_freq_operator = operator;
        self
    }

    pub fn with_analyzer<S: Into<String>>(mut self, analyzer: S) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn with_cutoff_frequency(mut self, cutoff_frequency: f32) -> Self {
        self.cutoff_frequency = cutoff_frequency;
        self
    }

    pub fn with_low_freq_minimum_should_match<S: Into<String>>(mut self, minimum: S) -> Self {
        self.low_freq_minimum_should_match = Some(minimum.into());
        self
    }

    pub fn with_high_freq_minimum_should_match<S: Into<String>>(mut self, minimum: S) -> Self {
        self.high_freq_minimum_should_match = Some(minimum.into());
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn text(&self) -> &Value {
        &self.text
    }

    pub fn high_freq_operator(&self) -> Operator {
        self.high_freq_operator
    }

    pub fn low_freq_operator(&self) -> Operator {
        self.low_freq_operator
    }

    pub fn cutoff_frequency(&self) -> f32 {
        self.cutoff_frequency
    }

    pub fn low_freq_minimum_should_match(&self) -> Option<&str> {
        self.low_freq_minimum_should_match.as_deref()
    }

    pub fn high_freq_minimum_should_match(&self) -> Option<&str> {
        self.high_freq_minimum_should_match.as_deref()
    }
}

impl Query for CommonTermsQuery {
    fn kind(&self) -> &'static str {
        "common"
    }

    fn body(&self) -> Value {
        let mut inner = Map::new();
        inner.insert("query".to_string(), self.text.clone());
        inner.insert(
            "high_freq_operator".to_string(),
            Value::from(self.high_freq_operator.to_string()),
        );
        inner.insert(
            "low_freq_operator".to_string(),
            Value::from(self.low_freq_operator.to_string()),
        );
        if let Some(analyzer) = &self.analyzer {
            inner.insert("analyzer".to_string(), Value::from(analyzer.as_str()));
        }
        inner.insert(
            "cutoff_frequency".to_string(),
            float_value(self.cutoff_frequency),
        );

        let mut minimum = Map::new();
        if let Some(low) = &self.low_freq_minimum_should_match {
            minimum.insert("low_freq".to_string(), Value::from(low.as_str()));
        }
        if let Some(high) = &self.high_freq_minimum_should_match {
            minimum.insert("high_freq".to_string(), Value::from(high.as_str()));
        }
        if !minimum.is_empty() {
            inner.insert("minimum_should_match".to_string(), Value::Object(minimum));
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
