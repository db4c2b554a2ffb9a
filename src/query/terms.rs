//! Terms query: match any of several exact terms, given inline or fetched
//! from another document.

use serde_json::{Map, Value};

use crate::error::{QueryDslError, Result};
use crate::query::query::{DEFAULT_BOOST, Query, put_common};

/// Location of a document whose field holds the terms to match.
#[derive(Debug, Clone, PartialEq)]
pub struct TermsLookup {
    index: Option<String>,
    doc_type: Option<String>,
    id: String,
    path: String,
    routing: Option<String>,
}

impl TermsLookup {
    /// Create a lookup. `id` and `path` are mandatory.
    pub fn new(
        index: Option<String>,
        doc_type: Option<String>,
        id: Option<String>,
        path: Option<String>,
    ) -> Result<Self> {
        let id = id.ok_or_else(|| {
            QueryDslError::missing_field("[terms] query lookup element requires specifying the id")
        })?;
        let path = path.ok_or_else(|| {
            QueryDslError::missing_field(
                "[terms] query lookup element requires specifying the path",
            )
        })?;

        Ok(TermsLookup {
            index,
            doc_type,
            id,
            path,
            routing: None,
        })
    }

    /// Set the routing used to fetch the lookup document.
    pub fn with_routing<S: Into<String>>(mut self, routing: S) -> Self {
        self.routing = Some(routing.into());
        self
    }

    /// Get the index holding the lookup document.
    pub fn index(&self) -> Option<&str> {
        self.index.as_deref()
    }

    /// Get the mapping type of the lookup document.
    pub fn doc_type(&self) -> Option<&str> {
        self.doc_type.as_deref()
    }

    /// Get the id of the lookup document.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the path of the field holding the terms.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the routing.
    pub fn routing(&self) -> Option<&str> {
        self.routing.as_deref()
    }

    fn to_value(&self) -> Value {
        let mut lookup = Map::new();
        if let Some(index) = &self.index {
            lookup.insert("index".to_string(), Value::from(index.as_str()));
        }
        if let Some(doc_type) = &self.doc_type {
            lookup.insert("type".to_string(), Value::from(doc_type.as_str()));
        }
        lookup.insert("id".to_string(), Value::from(self.id.as_str()));
        lookup.insert("path".to_string(), Value::from(self.path.as_str()));
        if let Some(routing) = &self.routing {
            lookup.insert("routing".to_string(), Value::from(routing.as_str()));
        }
        Value::Object(lookup)
    }
}

/// Where the terms of a [`TermsQuery`] come from.
#[derive(Debug, Clone, PartialEq)]
pub enum TermsSource {
    /// Terms listed in the query.
    Values(Vec<Value>),
    /// Terms read from a field of another document.
    Lookup(TermsLookup),
}

/// A query that matches documents containing any of the given terms.
#[derive(Debug, Clone)]
pub struct TermsQuery {
    field: String,
    source: TermsSource,
    boost: f32,
    query_name: Option<String>,
}

impl TermsQuery {
    /// Create a terms query over inline values.
    pub fn new<F, I, V>(field: F, values: I) -> Self
    where
        F: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        TermsQuery {
            field: field.into(),
            source: TermsSource::Values(values.into_iter().map(Into::into).collect()),
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Create a terms query whose terms are fetched from another document.
    pub fn with_lookup<F: Into<String>>(field: F, lookup: TermsLookup) -> Self {
        TermsQuery {
            field: field.into(),
            source: TermsSource::Lookup(lookup),
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the inline values, if this query does not use a lookup.
    pub fn values(&self) -> Option<&[Value]> {
        match &self.source {
            TermsSource::Values(values) => Some(values),
            TermsSource::Lookup(_) => None,
        }
    }

    /// Get the lookup, if any.
    pub fn lookup(&self) -> Option<&TermsLookup> {
        match &self.source {
            TermsSource::Values(_) => None,
            TermsSource::Lookup(lookup) => Some(lookup),
        }
    }
}

impl Query for TermsQuery {
    fn kind(&self) -> &'static str {
        "terms"
    }

    fn body(&self) -> Value {
        let mut body = Map::new();
        let terms = match &self.source {
            TermsSource::Values(values) => Value::Array(values.clone()),
            TermsSource::Lookup(lookup) => lookup.to_value(),
        };
        body.insert(self.field.clone(), terms);
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
        Some(&self.field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_terms_query_values() {
        let query = TermsQuery::new("tags", ["rust", "search"]);

        assert_eq!(query.values().unwrap().len(), 2);
        assert!(query.lookup().is_none());
        assert_eq!(
            query.to_json(),
            json!({"terms": {"tags": ["rust", "search"], "boost": 1.0}})
        );
    }

    #[test]
    fn test_terms_query_lookup() {
        let lookup = TermsLookup::new(
            Some("users".to_string()),
            None,
            Some("2".to_string()),
            Some("followers".to_string()),
        )
        .unwrap()
        .with_routing("r1");
        let query = TermsQuery::with_lookup("user", lookup);

        assert!(query.values().is_none());
        assert_eq!(
            query.to_json(),
            json!({"terms": {
                "user": {"index": "users", "id": "2", "path": "followers", "routing": "r1"},
                "boost": 1.0
            }})
        );
    }

    #[test]
    fn test_terms_lookup_requires_id_and_path() {
        let missing_id = TermsLookup::new(None, None, None, Some("followers".to_string()));
        assert!(matches!(missing_id, Err(QueryDslError::MissingField(_))));

        let missing_path = TermsLookup::new(None, None, Some("2".to_string()), None);
        assert!(matches!(missing_path, Err(QueryDslError::MissingField(_))));
    }
}
