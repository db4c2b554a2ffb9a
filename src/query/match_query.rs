//! Match query: analyzed full-text matching on one field.

use serde_json::{Map, Value};

use crate::query::fuzzy::{DEFAULT_MAX_EXPANSIONS, DEFAULT_PREFIX_LENGTH};
use crate::query::options::{Fuzziness, Operator, ZeroTermsQuery};
use crate::query::query::{DEFAULT_BOOST, Query, field_object, float_value, put_common};

/// A full-text query that analyzes its input and matches the resulting terms.
#[derive(Debug, Clone)]
pub struct MatchQuery {
    field: String,
    query: Value,
    operator: Operator,
    analyzer: Option<String>,
    fuzziness: Option<Fuzziness>,
    prefix_length: u32,
    max_expansions: u32,
    fuzzy_transpositions: bool,
    fuzzy_rewrite: Option<String>,
    minimum_should_match: Option<String>,
    lenient: bool,
    zero_terms_query: ZeroTermsQuery,
    cutoff_frequency: Option<f32>,
    boost: f32,
    query_name: Option<String>,
}

impl MatchQuery {
    /// Create a new match query.
    pub fn new<F: Into<String>, V: Into<Value>>(field: F, query: V) -> Self {
        MatchQuery {
            field: field.into(),
            query: query.into(),
            operator: Operator::Or,
            analyzer: None,
            fuzziness: None,
            prefix_length: DEFAULT_PREFIX_LENGTH,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            fuzzy_transpositions: true,
            fuzzy_rewrite: None,
            minimum_should_match: None,
            lenient: false,
            zero_terms_query: ZeroTermsQuery::None,
            cutoff_frequency: None,
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Set the operator combining the analyzed terms.
    pub fn with_operator(mut self, operator: Operator) -> Self {
        self.operator = operator;
        self
    }

    /// Set the search analyzer.
    pub fn with_analyzer<S: Into<String>>(mut self, analyzer: S) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    /// Enable fuzzy matching with the given edit distance.
    pub fn with_fuzziness(mut self, fuzziness: Fuzziness) -> Self {
        self.fuzziness = Some(fuzziness);
        self
    }

    /// Set the number of leading characters excluded from fuzzy matching.
    pub fn with_prefix_length(mut self, prefix_length: u32) -> Self {
        self.prefix_length = prefix_length;
        self
    }

    /// Set the maximum number of terms a fuzzy term expands to.
    pub fn with_max_expansions(mut self, max_expansions: u32) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Set whether fuzzy matching counts transpositions as one edit.
    pub fn with_fuzzy_transpositions(mut self, transpositions: bool) -> Self {
        self.fuzzy_transpositions = transpositions;
        self
    }

    /// Set the rewrite method for fuzzy expansion.
    pub fn with_fuzzy_rewrite<S: Into<String>>(mut self, rewrite: S) -> Self {
        self.fuzzy_rewrite = Some(rewrite.into());
        self
    }

    /// Set the minimum number (or percentage) of terms that must match.
    pub fn with_minimum_should_match<S: Into<String>>(mut self, minimum: S) -> Self {
        self.minimum_should_match = Some(minimum.into());
        self
    }

    /// Set whether format errors (text for a numeric field) are ignored.
    pub fn with_lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// Set what to match when analysis removes every term.
    pub fn with_zero_terms_query(mut self, zero_terms_query: ZeroTermsQuery) -> Self {
        self.zero_terms_query = zero_terms_query;
        self
    }

    /// Set the frequency above which terms are treated as common.
    pub fn with_cutoff_frequency(mut self, cutoff_frequency: f32) -> Self {
        self.cutoff_frequency = Some(cutoff_frequency);
        self
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the query value.
    pub fn query(&self) -> &Value {
        &self.query
    }

    /// Get the operator.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Get the analyzer.
    pub fn analyzer(&self) -> Option<&str> {
        self.analyzer.as_deref()
    }

    /// Get the fuzziness.
    pub fn fuzziness(&self) -> Option<Fuzziness> {
        self.fuzziness
    }

    /// Get the prefix length.
    pub fn prefix_length(&self) -> u32 {
        self.prefix_length
    }

    /// Get the maximum number of fuzzy expansions.
    pub fn max_expansions(&self) -> u32 {
        self.max_expansions
    }

    /// Check whether fuzzy transpositions are enabled.
    pub fn fuzzy_transpositions(&self) -> bool {
        self.fuzzy_transpositions
    }

    /// Get the fuzzy rewrite method.
    pub fn fuzzy_rewrite(&self) -> Option<&str> {
        self.fuzzy_rewrite.as_deref()
    }

    /// Get the minimum should match.
    pub fn minimum_should_match(&self) -> Option<&str> {
        self.minimum_should_match.as_deref()
    }

    /// Check whether the query is lenient.
    pub fn lenient(&self) -> bool {
        self.lenient
    }

    /// Get the zero terms behavior.
    pub fn zero_terms_query(&self) -> ZeroTermsQuery {
        self.zero_terms_query
    }

    /// Get the cutoff frequency.
    pub fn cutoff_frequency(&self) -> Option<f32> {
        self.cutoff_frequency
    }
}

impl Query for MatchQuery {
    fn kind(&self) -> &'static str {
        "match"
    }

    fn body(&self) -> Value {
        let mut inner = Map::new();
        inner.insert("query".to_string(), self.query.clone());
        inner.insert("operator".to_string(), Value::from(self.operator.to_string()));
        if let Some(analyzer) = &self.analyzer {
            inner.insert("analyzer".to_string(), Value::from(analyzer.as_str()));
        }
        if let Some(fuzziness) = &self.fuzziness {
            inner.insert("fuzziness".to_string(), fuzziness.to_value());
        }
        inner.insert("prefix_length".to_string(), Value::from(self.prefix_length));
        inner.insert("max_expansions".to_string(), Value::from(self.max_expansions));
        inner.insert(
            "fuzzy_transpositions".to_string(),
            Value::from(self.fuzzy_transpositions),
        );
        if let Some(rewrite) = &self.fuzzy_rewrite {
            inner.insert("fuzzy_rewrite".to_string(), Value::from(rewrite.as_str()));
        }
        if let Some(minimum) = &self.minimum_should_match {
            inner.insert(
                "minimum_should_match".to_string(),
                Value::from(minimum.as_str()),
            );
        }
        inner.insert("lenient".to_string(), Value::from(self.lenient));
        inner.insert(
            "zero_terms_query".to_string(),
            Value::from(self.zero_terms_query.to_string()),
        );
        if let Some(cutoff) = self.cutoff_frequency {
            inner.insert("cutoff_frequency".to_string(), float_value(cutoff));
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
