//! Query string query: Lucene syntax parsed by the engine.

use serde_json::{Map, Value};

use crate::query::options::Operator;
use crate::query::query::{DEFAULT_BOOST, Query, put_common};

/// A query whose text is parsed by the engine's query-string parser.
#[derive(Debug, Clone)]
pub struct QueryStringQuery {
    query: String,
    fields: Vec<String>,
    default_operator: Operator,
    analyze_wildcard: bool,
    analyzer: Option<String>,
    boost: f32,
    query_name: Option<String>,
}

impl QueryStringQuery {
    /// Create a new query string query.
    pub fn new<S: Into<String>>(query: S) -> Self {
        QueryStringQuery {
            query: query.into(),
            fields: Vec::new(),
            default_operator: Operator::Or,
            analyze_wildcard: false,
            analyzer: None,
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Add a field to search.
    pub fn with_field<S: Into<String>>(mut self, field: S) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Set the operator used between terms that have no explicit operator.
    pub fn with_default_operator(mut self, operator: Operator) -> Self {
        self.default_operator = operator;
        self
    }

    /// Set whether terms containing wildcards are analyzed.
    pub fn with_analyze_wildcard(mut self, analyze: bool) -> Self {
        self.analyze_wildcard = analyze;
        self
    }

    /// Set the analyzer.
    pub fn with_analyzer<S: Into<String>>(mut self, analyzer: S) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    /// Get the query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get the searched fields.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Get the default operator.
    pub fn default_operator(&self) -> Operator {
        self.default_operator
    }

    /// Check whether wildcard terms are analyzed.
    pub fn analyze_wildcard(&self) -> bool {
        self.analyze_wildcard
    }
}

impl Query for QueryStringQuery {
    fn kind(&self) -> &'static str {
        "query_string"
    }

    fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("query".to_string(), Value::from(self.query.as_str()));
        body.insert("fields".to_string(), Value::from(self.fields.clone()));
        body.insert(
            "default_operator".to_string(),
            Value::from(self.default_operator.to_string()),
        );
        if let Some(analyzer) = &self.analyzer {
            body.insert("analyzer".to_string(), Value::from(analyzer.as_str()));
        }
        body.insert(
            "analyze_wildcard".to_string(),
            Value::from(self.analyze_wildcard),
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

    fn field(&self) -> Option<&str> {
        match self.fields.as_slice() {
            [field] => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_string_defaults() {
        let query = QueryStringQuery::new("rust AND search");

        assert!(query.fields().is_empty());
        assert_eq!(query.default_operator(), Operator::Or);
        assert!(!query.analyze_wildcard());
        assert_eq!(Query::field(&query), None);
    }

    #[test]
    fn test_query_string_json() {
        let query = QueryStringQuery::new("*rust*")
            .with_field("title")
            .with_default_operator(Operator::And)
            .with_analyze_wildcard(true);

        assert_eq!(Query::field(&query), Some("title"));
        assert_eq!(
            query.to_json(),
            json!({"query_string": {
                "query": "*rust*",
                "fields": ["title"],
                "default_operator": "AND",
                "analyze_wildcard": true,
                "boost": 1.0
            }})
        );
    }
}
