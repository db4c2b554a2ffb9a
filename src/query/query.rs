//! Base query trait and common query functionality.

use std::any::Any;
use std::fmt::Debug;

use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::error::Result;

/// Default boost applied by every query kind.
pub const DEFAULT_BOOST: f32 = 1.0;

/// Trait for nodes of a search query tree.
///
/// A query knows its JSON DSL name and how to render the object that sits
/// under that name. Everything else (boost, `_name`) is shared by all kinds.
pub trait Query: Send + Sync + Debug {
    /// The JSON DSL name of this query (`"bool"`, `"match"`, ...).
    fn kind(&self) -> &'static str;

    /// Render the object placed under [`Query::kind`].
    fn body(&self) -> Value;

    /// Get the boost factor for this query.
    fn boost(&self) -> f32;

    /// Set the boost factor for this query.
    fn set_boost(&mut self, boost: f32);

    /// Get the `_name` used to identify this query in matched-query output.
    fn query_name(&self) -> Option<&str>;

    /// Set the `_name` of this query.
    fn set_query_name(&mut self, name: String);

    /// Clone this query.
    fn clone_box(&self) -> Box<dyn Query>;

    /// Get this query as Any for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Get the field name this query searches in, if applicable.
    /// Returns None for queries that don't target a specific field (e.g., BoolQuery).
    fn field(&self) -> Option<&str> {
        None
    }

    /// Render the full query node, `{ kind: body }`.
    fn to_json(&self) -> Value {
        let mut node = Map::new();
        node.insert(self.kind().to_string(), self.body());
        Value::Object(node)
    }

    /// Render this query as compact JSON text.
    fn json(&self) -> String {
        self.to_json().to_string()
    }

    /// Render this query as indented JSON text.
    fn json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }
}

/// Queries serialize as their JSON DSL node, so they can sit inside
/// caller-defined request structs.
impl Serialize for dyn Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl Clone for Box<dyn Query> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Append `boost` and `_name` to a rendered query body.
pub(crate) fn put_common(body: &mut Map<String, Value>, boost: f32, query_name: Option<&str>) {
    body.insert("boost".to_string(), float_value(boost));
    if let Some(name) = query_name {
        body.insert("_name".to_string(), Value::from(name));
    }
}

/// Render an `f32` through its shortest decimal form, so `1.1` stays `1.1`
/// instead of its widened `f64` expansion. Non-finite values become `null`.
pub(crate) fn float_value(value: f32) -> Value {
    value
        .to_string()
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map_or(Value::Null, Value::Number)
}

/// Wrap `inner` in a single-key object keyed by `field`.
pub(crate) fn field_object(field: &str, inner: Map<String, Value>) -> Value {
    let mut body = Map::new();
    body.insert(field.to_string(), Value::Object(inner));
    Value::Object(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::term::TermQuery;
    use serde_json::json;

    #[test]
    fn test_to_json_wraps_body_in_kind() {
        let query = TermQuery::new("status", "active");

        assert_eq!(
            query.to_json(),
            json!({"term": {"status": {"value": "active", "boost": 1.0}}})
        );
    }

    #[test]
    fn test_json_text() {
        let query = TermQuery::new("status", "active");

        assert_eq!(
            query.json(),
            r#"{"term":{"status":{"boost":1.0,"value":"active"}}}"#
        );
        assert!(query.json_pretty().unwrap().contains('\n'));
    }

    #[test]
    fn test_float_value_keeps_shortest_decimal() {
        assert_eq!(float_value(1.1), json!(1.1));
        assert_eq!(float_value(0.001), json!(0.001));
        assert_eq!(float_value(2.0), json!(2.0));
        assert_eq!(float_value(f32::NAN), Value::Null);
    }

    #[test]
    fn test_json_text_fractional_boost() {
        let query = TermQuery::new("status", "active").with_boost(1.1);

        assert_eq!(
            query.json(),
            r#"{"term":{"status":{"boost":1.1,"value":"active"}}}"#
        );
    }

    #[test]
    fn test_serialize_inside_request() {
        #[derive(Serialize)]
        struct SearchRequest {
            query: Box<dyn Query>,
            size: u32,
        }

        let request = SearchRequest {
            query: Box::new(TermQuery::new("status", "active").with_boost(1.1)),
            size: 10,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"query": {"term": {"status": {"value": "active", "boost": 1.1}}}, "size": 10})
        );
    }

    #[test]
    fn test_boxed_clone_and_downcast() {
        let query: Box<dyn Query> = Box::new(TermQuery::new("status", "active").with_boost(2.0));
        let cloned = query.clone();

        let term = cloned.as_any().downcast_ref::<TermQuery>().unwrap();
        assert_eq!(term.field(), "status");
        assert_eq!(term.boost(), 2.0);
        assert_eq!(cloned.field(), Some("status"));
    }
}
