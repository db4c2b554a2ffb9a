//! Multi-match query: one analyzed query run against several fields.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::query::fuzzy::{DEFAULT_MAX_EXPANSIONS, DEFAULT_PREFIX_LENGTH};
use crate::query::options::{Fuzziness, MultiMatchType, Operator, ZeroTermsQuery};
use crate::query::query::{DEFAULT_BOOST, Query, float_value, put_common};

/// A match query spanning several fields, each with its own boost.
#[derive(Debug, Clone)]
pub struct MultiMatchQuery {
    query: Value,
    /// Field name to boost, ordered by field name.
    fields: BTreeMap<String, f32>,
    match_type: MultiMatchType,
    operator: Operator,
    analyzer: Option<String>,
    slop: u32,
    fuzziness: Option<Fuzziness>,
    prefix_length: u32,
    max_expansions: u32,
    minimum_should_match: Option<String>,
    fuzzy_rewrite: Option<String>,
    tie_breaker: Option<f32>,
    lenient: bool,
    cutoff_frequency: Option<f32>,
    zero_terms_query: ZeroTermsQuery,
    boost: f32,
    query_name: Option<String>,
}

impl MultiMatchQuery {
    /// Create a multi-match query with no fields.
    pub fn new<V: Into<Value>>(query: V) -> Self {
        MultiMatchQuery {
            query: query.into(),
            fields: BTreeMap::new(),
            match_type: MultiMatchType::BestFields,
            operator: Operator::Or,
            analyzer: None,
            slop: 0,
            fuzziness: None,
            prefix_length: DEFAULT_PREFIX_LENGTH,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            minimum_should_match: None,
            fuzzy_rewrite: None,
            tie_breaker: None,
            lenient: false,
            cutoff_frequency: None,
            zero_terms_query: ZeroTermsQuery::None,
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Add a field with a boost. A field added twice keeps the last boost.
    pub fn with_field<S: Into<String>>(mut self, field: S, boost: f32) -> Self {
        self.fields.insert(field.into(), boost);
        self
    }

    /// Add several `(field, boost)` pairs.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (S, f32)>,
        S: Into<String>,
    {
        for (field, boost) in fields {
            self.fields.insert(field.into(), boost);
        }
        self
    }

    /// Set the execution type.
    pub fn with_type(mut self, match_type: MultiMatchType) -> Self {
        self.match_type = match_type;
        self
    }

    /// Set the operator.
    pub fn with_operator(mut self, operator: Operator) -> Self {
        self.operator = operator;
        self
    }

    /// Set the analyzer.
    pub fn with_analyzer<S: Into<String>>(mut self, analyzer: S) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    /// Set the phrase slop.
    pub fn with_slop(mut self, slop: u32) -> Self {
        self.slop = slop;
        self
    }

    /// Enable fuzzy matching.
    pub fn with_fuzziness(mut self, fuzziness: Fuzziness) -> Self {
        self.fuzziness = Some(fuzziness);
        self
    }

    /// Set the fuzzy prefix length.
    pub fn with_prefix_length(mut self, prefix_length: u32) -> Self {
        self.prefix_length = prefix_length;
        self
    }

    /// Set the maximum fuzzy expansions.
    pub fn with_max_expansions(mut self, max_expansions: u32) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Set the minimum should match.
    pub fn with_minimum_should_match<S: Into<String>>(mut self, minimum: S) -> Self {
        self.minimum_should_match = Some(minimum.into());
        self
    }

    /// Set the fuzzy rewrite method.
    pub fn with_fuzzy_rewrite<S: Into<String>>(mut self, rewrite: S) -> Self {
        self.fuzzy_rewrite = Some(rewrite.into());
        self
    }

    /// Set how much non-best fields contribute to the score.
    pub fn with_tie_breaker(mut self, tie_breaker: f32) -> Self {
        self.tie_breaker = Some(tie_breaker);
        self
    }

    /// Set leniency.
    pub fn with_lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// Set the cutoff frequency.
    pub fn with_cutoff_frequency(mut self, cutoff_frequency: f32) -> Self {
        self.cutoff_frequency = Some(cutoff_frequency);
        self
    }

    /// Set the zero terms behavior.
    pub fn with_zero_terms_query(mut self, zero_terms_query: ZeroTermsQuery) -> Self {
        self.zero_terms_query = zero_terms_query;
        self
    }

    /// Get the query value.
    pub fn query(&self) -> &Value {
        &self.query
    }

    /// Get the field boosts.
    pub fn fields(&self) -> &BTreeMap<String, f32> {
        &self.fields
    }

    /// Get the execution type.
    pub fn match_type(&self) -> MultiMatchType {
        self.match_type
    }

    /// Get the operator.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get the analyzer.
    pub fn analyzer(&self) -> Option<&str> {
        self.analyzer.as_deref()
    }

    /// Get the slop.
    pub fn slop(&self) -> u32 {
        self.slop
    }

    /// Get the fuzziness.
    pub fn fuzziness(&self) -> Option<Fuzziness> {
        self.fuzziness
    }

    /// Get the tie breaker.
    pub fn tie_breaker(&self) -> Option<f32> {
        self.tie_breaker
    }

    /// Check leniency.
    pub fn lenient(&self) -> bool {
        self.lenient
    }

    /// Get the zero terms behavior.
    pub fn zero_terms_query(&self) -> ZeroTermsQuery {
        self.zero_terms_query
    }
}

impl Query for MultiMatchQuery {
    fn kind(&self) -> &'static str {
        "multi_match"
    }

    fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("query".to_string(), self.query.clone());
        let fields = self
            .fields
            .iter()
            .map(|(field, boost)| Value::from(format!("{field}^{boost:?}")))
            .collect();
        body.insert("fields".to_string(), Value::Array(fields));
        body.insert("type".to_string(), Value::from(self.match_type.to_string()));
        body.insert("operator".to_string(), Value::from(self.operator.to_string()));
        if let Some(analyzer) = &self.analyzer {
            body.insert("analyzer".to_string(), Value::from(analyzer.as_str()));
        }
        body.insert("slop".to_string(), Value::from(self.slop));
        if let Some(fuzziness) = &self.fuzziness {
            body.insert("fuzziness".to_string(), fuzziness.to_value());
        }
        body.insert("prefix_length".to_string(), Value::from(self.prefix_length));
        body.insert("max_expansions".to_string(), Value::from(self.max_expansions));
        if let Some(minimum) = &self.minimum_should_match {
            body.insert(
                "minimum_should_match".to_string(),
                Value::from(minimum.as_str()),
            );
        }
        if let Some(rewrite) = &self.fuzzy_rewrite {
            body.insert("fuzzy_rewrite".to_string(), Value::from(rewrite.as_str()));
        }
        if let Some(tie_breaker) = self.tie_breaker {
            body.insert("tie_breaker".to_string(), float_value(tie_breaker));
        }
        body.insert("lenient".to_string(), Value::from(self.lenient));
        if let Some(cutoff) = self.cutoff_frequency {
            body.insert("cutoff_frequency".to_string(), float_value(cutoff));
        }
        body.insert(
            "zero_terms_query".to_string(),
            Value::from(self.zero_terms_query.to_string()),
        );
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
