//! Joining queries: nested documents and parent/child relations.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{QueryDslError, Result};
use crate::query::query::{DEFAULT_BOOST, Query, put_common};

/// Default minimum number of matching children.
pub const DEFAULT_MIN_CHILDREN: u32 = 0;

/// Default maximum number of matching children.
pub const DEFAULT_MAX_CHILDREN: u32 = i32::MAX as u32;

/// How the scores of matching inner documents become the outer score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreMode {
    /// Ignore inner scores.
    None,
    /// Average of inner scores.
    Avg,
    /// Highest inner score.
    Max,
    /// Sum of inner scores.
    Total,
    /// Lowest inner score.
    Min,
}

impl FromStr for ScoreMode {
    type Err = QueryDslError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(ScoreMode::None),
            "avg" => Ok(ScoreMode::Avg),
            "max" => Ok(ScoreMode::Max),
            "sum" | "total" => Ok(ScoreMode::Total),
            "min" => Ok(ScoreMode::Min),
            _ => Err(QueryDslError::invalid_option("score_mode", s)),
        }
    }
}

impl fmt::Display for ScoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScoreMode::None => "none",
            ScoreMode::Avg => "avg",
            ScoreMode::Max => "max",
            ScoreMode::Total => "sum",
            ScoreMode::Min => "min",
        };
        write!(f, "{name}")
    }
}

/// Request to return the inner documents that caused a join match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InnerHits {
    /// Name of the inner hit section in the response.
    pub name: Option<String>,
    /// Offset of the first inner hit.
    pub from: Option<u32>,
    /// Maximum number of inner hits.
    pub size: Option<u32>,
}

impl InnerHits {
    /// Inner hits with engine defaults.
    pub fn new() -> Self {
        Self::default()
    }

    fn to_value(&self) -> Value {
        let mut body = Map::new();
        if let Some(name) = &self.name {
            body.insert("name".to_string(), Value::from(name.as_str()));
        }
        if let Some(from) = self.from {
            body.insert("from".to_string(), Value::from(from));
        }
        if let Some(size) = self.size {
            body.insert("size".to_string(), Value::from(size));
        }
        Value::Object(body)
    }
}

/// A query on nested objects, scoring the root document from its matches.
#[derive(Debug, Clone)]
pub struct NestedQuery {
    path: String,
    query: Box<dyn Query>,
    score_mode: ScoreMode,
    ignore_unmapped: bool,
    inner_hits: Option<InnerHits>,
    boost: f32,
    query_name: Option<String>,
}

impl NestedQuery {
    /// Create a nested query.
    pub fn new<S: Into<String>>(path: S, query: Box<dyn Query>, score_mode: ScoreMode) -> Self {
        NestedQuery {
            path: path.into(),
            query,
            score_mode,
            ignore_unmapped: false,
            inner_hits: None,
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Return the matching nested objects with each hit.
    pub fn with_inner_hits(mut self, inner_hits: InnerHits) -> Self {
        self.inner_hits = Some(inner_hits);
        self
    }

    /// Match nothing instead of failing when `path` is not mapped.
    pub fn with_ignore_unmapped(mut self, ignore: bool) -> Self {
        self.ignore_unmapped = ignore;
        self
    }

    /// Get the nested path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the inner query.
    pub fn query(&self) -> &dyn Query {
        self.query.as_ref()
    }

    /// Get the score mode.
    pub fn score_mode(&self) -> ScoreMode {
        self.score_mode
    }

    /// Get the inner hits request.
    pub fn inner_hits(&self) -> Option<&InnerHits> {
        self.inner_hits.as_ref()
    }
}

impl Query for NestedQuery {
    fn kind(&self) -> &'static str {
        "nested"
    }

    fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("query".to_string(), self.query.to_json());
        body.insert("path".to_string(), Value::from(self.path.as_str()));
        body.insert(
            "ignore_unmapped".to_string(),
            Value::from(self.ignore_unmapped),
        );
        body.insert(
            "score_mode".to_string(),
            Value::from(self.score_mode.to_string()),
        );
        if let Some(inner_hits) = &self.inner_hits {
            body.insert("inner_hits".to_string(), inner_hits.to_value());
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

/// A query matching parent documents whose children match `query`.
#[derive(Debug, Clone)]
pub struct HasChildQuery {
    child_type: String,
    query: Box<dyn Query>,
    score_mode: ScoreMode,
    min_children: u32,
    max_children: u32,
    ignore_unmapped: bool,
    inner_hits: Option<InnerHits>,
    boost: f32,
    query_name: Option<String>,
}

impl HasChildQuery {
    /// Create a has_child query.
    pub fn new<S: Into<String>>(
        child_type: S,
        query: Box<dyn Query>,
        score_mode: ScoreMode,
    ) -> Self {
        HasChildQuery {
            child_type: child_type.into(),
            query,
            score_mode,
            min_children: DEFAULT_MIN_CHILDREN,
            max_children: DEFAULT_MAX_CHILDREN,
            ignore_unmapped: false,
            inner_hits: None,
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Bound the number of matching children a parent must have.
    pub fn with_min_max_children(mut self, min_children: u32, max_children: u32) -> Result<Self> {
        if min_children > max_children {
            return Err(QueryDslError::invalid_argument(format!(
                "[has_child] 'max_children' ({max_children}) is less than 'min_children' ({min_children})"
            )));
        }
        self.min_children = min_children;
        self.max_children = max_children;
        Ok(self)
    }

    /// Return the matching children with each parent.
    pub fn with_inner_hits(mut self, inner_hits: InnerHits) -> Self {
        self.inner_hits = Some(inner_hits);
        self
    }

    /// Match nothing instead of failing when the child type is not mapped.
    pub fn with_ignore_unmapped(mut self, ignore: bool) -> Self {
        self.ignore_unmapped = ignore;
        self
    }

    /// Get the child type.
    pub fn child_type(&self) -> &str {
        &self.child_type
    }

    /// Get the child query.
    pub fn query(&self) -> &dyn Query {
        self.query.as_ref()
    }

    /// Get the score mode.
    pub fn score_mode(&self) -> ScoreMode {
        self.score_mode
    }

    /// Get the minimum number of children.
    pub fn min_children(&self) -> u32 {
        self.min_children
    }

    /// Get the maximum number of children.
    pub fn max_children(&self) -> u32 {
        self.max_children
    }

    /// Get the inner hits request.
    pub fn inner_hits(&self) -> Option<&InnerHits> {
        self.inner_hits.as_ref()
    }
}

impl Query for HasChildQuery {
    fn kind(&self) -> &'static str {
        "has_child"
    }

    fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("query".to_string(), self.query.to_json());
        body.insert("type".to_string(), Value::from(self.child_type.as_str()));
        body.insert(
            "score_mode".to_string(),
            Value::from(self.score_mode.to_string()),
        );
        body.insert("min_children".to_string(), Value::from(self.min_children));
        body.insert("max_children".to_string(), Value::from(self.max_children));
        body.insert(
            "ignore_unmapped".to_string(),
            Value::from(self.ignore_unmapped),
        );
        if let Some(inner_hits) = &self.inner_hits {
            body.insert("inner_hits".to_string(), inner_hits.to_value());
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
    fn test_score_mode_parsing() {
        assert_eq!("avg".parse::<ScoreMode>().unwrap(), ScoreMode::Avg);
        assert_eq!("total".parse::<ScoreMode>().unwrap(), ScoreMode::Total);
        assert_eq!(ScoreMode::Total.to_string(), "sum");
        assert!("median".parse::<ScoreMode>().is_err());
    }

    #[test]
    fn test_nested_query_json() {
        let inner_hits = InnerHits {
            size: Some(3),
            ..InnerHits::new()
        };
        let query = NestedQuery::new(
            "comments",
            Box::new(TermQuery::new("comments.author", "kimchy")),
            ScoreMode::Avg,
        )
        .with_inner_hits(inner_hits);

        assert_eq!(query.path(), "comments");
        assert_eq!(
            query.to_json(),
            json!({"nested": {
                "query": {"term": {"comments.author": {"value": "kimchy", "boost": 1.0}}},
                "path": "comments",
                "ignore_unmapped": false,
                "score_mode": "avg",
                "inner_hits": {"size": 3},
                "boost": 1.0
            }})
        );
    }

    #[test]
    fn test_inner_hits_renders_set_fields() {
        let inner_hits = InnerHits {
            name: Some("top_answers".to_string()),
            from: Some(5),
            size: Some(2),
        };
        let query = HasChildQuery::new(
            "answer",
            Box::new(TermQuery::new("body", "rust")),
            ScoreMode::Max,
        )
        .with_inner_hits(inner_hits);

        assert_eq!(
            query.to_json()["has_child"]["inner_hits"],
            json!({"name": "top_answers", "from": 5, "size": 2})
        );
        assert_eq!(InnerHits::new().to_value(), json!({}));
    }

    #[test]
    fn test_has_child_defaults() {
        let query = HasChildQuery::new(
            "answer",
            Box::new(TermQuery::new("body", "rust")),
            ScoreMode::None,
        );

        assert_eq!(query.child_type(), "answer");
        assert_eq!(query.min_children(), 0);
        assert_eq!(query.max_children(), 2147483647);
        assert_eq!(query.to_json()["has_child"]["score_mode"], json!("none"));
        assert_eq!(query.to_json()["has_child"]["max_children"], json!(2147483647));
    }

    #[test]
    fn test_has_child_min_max_validation() {
        let query = HasChildQuery::new(
            "answer",
            Box::new(TermQuery::new("body", "rust")),
            ScoreMode::Max,
        );

        let bounded = query.clone().with_min_max_children(2, 10).unwrap();
        assert_eq!(bounded.min_children(), 2);
        assert_eq!(bounded.max_children(), 10);

        let err = query.with_min_max_children(5, 1).unwrap_err();
        assert!(matches!(err, QueryDslError::InvalidArgument(_)));
    }
}
