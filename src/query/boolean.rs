//! Boolean query implementation for combining multiple queries.

use serde_json::{Map, Value};

use crate::query::query::{DEFAULT_BOOST, Query, put_common};

/// Occurrence requirements for boolean clauses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occur {
    /// The clause must match and contributes to the score.
    Must,
    /// The clause must match but does not contribute to the score.
    Filter,
    /// The clause should match (equivalent to OR).
    Should,
    /// The clause must not match (equivalent to NOT).
    MustNot,
}

impl Occur {
    /// The JSON key clauses of this kind are listed under.
    pub fn key(&self) -> &'static str {
        match self {
            Occur::Must => "must",
            Occur::Filter => "filter",
            Occur::Should => "should",
            Occur::MustNot => "must_not",
        }
    }
}

/// A clause in a boolean query.
#[derive(Debug, Clone)]
pub struct BoolClause {
    /// The query for this clause.
    pub query: Box<dyn Query>,
    /// The occurrence requirement.
    pub occur: Occur,
}

impl BoolClause {
    /// Create a new boolean clause.
    pub fn new(query: Box<dyn Query>, occur: Occur) -> Self {
        BoolClause { query, occur }
    }
}

/// A boolean query that combines multiple queries with boolean logic.
#[derive(Debug, Clone)]
pub struct BoolQuery {
    /// The clauses in this boolean query, in insertion order.
    clauses: Vec<BoolClause>,
    /// Minimum number (or percentage) of should clauses that must match.
    minimum_should_match: Option<String>,
    /// Whether a query with only must_not clauses matches all other documents.
    adjust_pure_negative: bool,
    /// The boost factor for this query.
    boost: f32,
    query_name: Option<String>,
}

impl BoolQuery {
    /// Create a new empty boolean query.
    pub fn new() -> Self {
        BoolQuery {
            clauses: Vec::new(),
            minimum_should_match: None,
            adjust_pure_negative: true,
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Add a clause to this boolean query.
    pub fn add_clause(&mut self, clause: BoolClause) {
        self.clauses.push(clause);
    }

    /// Add a MUST clause.
    pub fn must(mut self, query: Box<dyn Query>) -> Self {
        self.add_clause(BoolClause::new(query, Occur::Must));
        self
    }

    /// Add a FILTER clause.
    pub fn filter(mut self, query: Box<dyn Query>) -> Self {
        self.add_clause(BoolClause::new(query, Occur::Filter));
        self
    }

    /// Add a SHOULD clause.
    pub fn should(mut self, query: Box<dyn Query>) -> Self {
        self.add_clause(BoolClause::new(query, Occur::Should));
        self
    }

    /// Add a MUST_NOT clause.
    pub fn must_not(mut self, query: Box<dyn Query>) -> Self {
        self.add_clause(BoolClause::new(query, Occur::MustNot));
        self
    }

    /// Set the minimum number of should clauses that must match.
    pub fn with_minimum_should_match<S: Into<String>>(mut self, minimum: S) -> Self {
        self.minimum_should_match = Some(minimum.into());
        self
    }

    /// Set whether pure-negative queries match everything not excluded.
    pub fn with_adjust_pure_negative(mut self, adjust: bool) -> Self {
        self.adjust_pure_negative = adjust;
        self
    }

    /// Get the clauses.
    pub fn clauses(&self) -> &[BoolClause] {
        &self.clauses
    }

    /// Get clauses by occurrence type.
    pub fn clauses_by_occur(&self, occur: Occur) -> Vec<&BoolClause> {
        self.clauses.iter().filter(|c| c.occur == occur).collect()
    }

    /// Get the minimum should match value.
    pub fn minimum_should_match(&self) -> Option<&str> {
        self.minimum_should_match.as_deref()
    }

    /// Check whether pure-negative adjustment is enabled.
    pub fn adjust_pure_negative(&self) -> bool {
        self.adjust_pure_negative
    }

    /// Check if this query has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl Default for BoolQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl Query for BoolQuery {
    fn kind(&self) -> &'static str {
        "bool"
    }

    fn body(&self) -> Value {
        let mut body = Map::new();

        for occur in [Occur::Must, Occur::Filter, Occur::MustNot, Occur::Should] {
            let clauses: Vec<Value> = self
                .clauses_by_occur(occur)
                .into_iter()
                .map(|c| c.query.to_json())
                .collect();
            if !clauses.is_empty() {
                body.insert(occur.key().to_string(), Value::Array(clauses));
            }
        }

        body.insert(
            "adjust_pure_negative".to_string(),
            Value::from(self.adjust_pure_negative),
        );
        if let Some(minimum) = &self.minimum_should_match {
            body.insert(
                "minimum_should_match".to_string(),
                Value::from(minimum.as_str()),
            );
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::term::TermQuery;
    use serde_json::json;

    #[test]
    fn test_bool_query_creation() {
        let query = BoolQuery::new();

        assert!(query.is_empty());
        assert_eq!(query.clauses().len(), 0);
        assert_eq!(query.boost(), 1.0);
        assert_eq!(query.minimum_should_match(), None);
        assert!(query.adjust_pure_negative());
    }

    #[test]
    fn test_bool_query_clauses() {
        let query = BoolQuery::new()
            .must(Box::new(TermQuery::new("title", "hello")))
            .filter(Box::new(TermQuery::new("status", "published")))
            .should(Box::new(TermQuery::new("body", "world")))
            .must_not(Box::new(TermQuery::new("title", "spam")));

        assert_eq!(query.clauses().len(), 4);
        assert!(!query.is_empty());

        assert_eq!(query.clauses_by_occur(Occur::Must).len(), 1);
        assert_eq!(query.clauses_by_occur(Occur::Filter).len(), 1);
        assert_eq!(query.clauses_by_occur(Occur::Should).len(), 1);
        assert_eq!(query.clauses_by_occur(Occur::MustNot).len(), 1);
    }

    #[test]
    fn test_bool_query_json_omits_empty_roles() {
        let query = BoolQuery::new()
            .must(Box::new(TermQuery::new("title", "hello")))
            .with_minimum_should_match("1");

        assert_eq!(
            query.to_json(),
            json!({"bool": {
                "must": [{"term": {"title": {"value": "hello", "boost": 1.0}}}],
                "adjust_pure_negative": true,
                "minimum_should_match": "1",
                "boost": 1.0
            }})
        );
    }

    #[test]
    fn test_bool_query_keeps_clause_order() {
        let query = BoolQuery::new()
            .should(Box::new(TermQuery::new("tag", "a")))
            .should(Box::new(TermQuery::new("tag", "b")));

        let json = query.to_json();
        assert_eq!(json["bool"]["should"][0]["term"]["tag"]["value"], json!("a"));
        assert_eq!(json["bool"]["should"][1]["term"]["tag"]["value"], json!("b"));
    }

    #[test]
    fn test_occur_keys() {
        assert_eq!(Occur::Must.key(), "must");
        assert_eq!(Occur::Filter.key(), "filter");
        assert_eq!(Occur::Should.key(), "should");
        assert_eq!(Occur::MustNot.key(), "must_not");
    }
}
