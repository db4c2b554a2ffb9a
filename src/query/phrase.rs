//! Phrase queries: analyzed text matched as a sequence of positions.

use serde_json::{Map, Value};

use crate::query::fuzzy::DEFAULT_MAX_EXPANSIONS;
use crate::query::options::ZeroTermsQuery;
use crate::query::query::{DEFAULT_BOOST, Query, field_object, put_common};

/// A query that matches documents containing an exact phrase.
#[derive(Debug, Clone)]
pub struct MatchPhraseQuery {
    /// The field to search in.
    field: String,
    /// The phrase text.
    query: Value,
    /// Analyzer used to split the phrase.
    analyzer: Option<String>,
    /// Number of positions terms may move apart.
    slop: u32,
    zero_terms_query: ZeroTermsQuery,
    /// The boost factor for this query.
    boost: f32,
    query_name: Option<String>,
}

impl MatchPhraseQuery {
    /// Create a new phrase query.
    pub fn new<F: Into<String>, V: Into<Value>>(field: F, query: V) -> Self {
        MatchPhraseQuery {
            field: field.into(),
            query: query.into(),
            analyzer: None,
            slop: 0,
            zero_terms_query: ZeroTermsQuery::None,
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Set the analyzer.
    pub fn with_analyzer<S: Into<String>>(mut self, analyzer: S) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    /// Set the slop (allowed distance between terms).
    pub fn with_slop(mut self, slop: u32) -> Self {
        self.slop = slop;
        self
    }

    /// Set what to match when analysis removes every term.
    pub fn with_zero_terms_query(mut self, zero_terms_query: ZeroTermsQuery) -> Self {
        self.zero_terms_query = zero_terms_query;
        self
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the phrase.
    pub fn query(&self) -> &Value {
        &self.query
    }

    /// Get the analyzer.
    pub fn analyzer(&self) -> Option<&str> {
        self.analyzer.as_deref()
    }

    /// Get the slop.
    pub fn slop(&self) -> u32 {
        self.slop
    }
}

impl Query for MatchPhraseQuery {
    fn kind(&self) -> &'static str {
        "match_phrase"
    }

    fn body(&self) -> Value {
        let mut inner = Map::new();
        inner.insert("query".to_string(), self.query.clone());
        if let Some(analyzer) = &self.analyzer {
            inner.insert("analyzer".to_string(), Value::from(analyzer.as_str()));
        }
        inner.insert("slop".to_string(), Value::from(self.slop));
        inner.insert(
            "zero_terms_query".to_string(),
            Value::from(self.zero_terms_query.to_string()),
        );
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

/// A phrase query whose last term is matched as a prefix.
#[derive(Debug, Clone)]
pub struct MatchPhrasePrefixQuery {
    field: String,
    query: Value,
    analyzer: Option<String>,
    slop: u32,
    /// Maximum number of terms the final prefix expands to.
    max_expansions: u32,
    boost: f32,
    query_name: Option<String>,
}

impl MatchPhrasePrefixQuery {
    /// Create a new phrase prefix query.
    pub fn new<F: Into<String>, V: Into<Value>>(field: F, query: V) -> Self {
        MatchPhrasePrefixQuery {
            field: field.into(),
            query: query.into(),
            analyzer: None,
            slop: 0,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Set the analyzer.
    pub fn with_analyzer<S: Into<String>>(mut self, analyzer: S) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    /// Set the slop.
    pub fn with_slop(mut self, slop: u32) -> Self {
        self.slop = slop;
        self
    }

    /// Set the maximum number of prefix expansions.
    pub fn with_max_expansions(mut self, max_expansions: u32) -> Self {
        self.max_expansions = max_expansions;
        self
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the phrase.
    pub fn query(&self) -> &Value {
        &self.query
    }

    /// Get the analyzer.
    pub fn analyzer(&self) -> Option<&str> {
        self.analyzer.as_deref()
    }

    /// Get the slop.
    pub fn slop(&self) -> u32 {
        self.slop
    }

    /// Get the maximum number of prefix expansions.
    pub fn max_expansions(&self) -> u32 {
        self.max_expansions
    }
}

impl Query for MatchPhrasePrefixQuery {
    fn kind(&self) -> &'static str {
        "match_phrase_prefix"
    }

    fn body(&self) -> Value {
        let mut inner = Map::new();
        inner.insert("query".to_string(), self.query.clone());
        if let Some(analyzer) = &self.analyzer {
            inner.insert("analyzer".to_string(), Value::from(analyzer.as_str()));
        }
        inner.insert("slop".to_string(), Value::from(self.slop));
        inner.insert("max_expansions".to_string(), Value::from(self.max_expansions));
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_phrase_query_creation() {
        let query = MatchPhraseQuery::new("content", "hello world").with_slop(2);

        assert_eq!(query.field(), "content");
        assert_eq!(query.query(), &json!("hello world"));
        assert_eq!(query.slop(), 2);
        assert_eq!(
            query.to_json(),
            json!({"match_phrase": {"content": {
                "query": "hello world",
                "slop": 2,
                "zero_terms_query": "NONE",
                "boost": 1.0
            }}})
        );
    }

    #[test]
    fn test_phrase_prefix_query() {
        let query = MatchPhrasePrefixQuery::new("message", "quick brown f")
            .with_analyzer("standard")
            .with_max_expansions(10);

        assert_eq!(query.analyzer(), Some("standard"));
        assert_eq!(
            query.to_json(),
            json!({"match_phrase_prefix": {"message": {
                "query": "quick brown f",
                "analyzer": "standard",
                "slop": 0,
                "max_expansions": 10,
                "boost": 1.0
            }}})
        );
    }
}
