//! Base aggregation trait.

use std::any::Any;
use std::fmt::Debug;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::Result;

/// Trait for named aggregations that may hold sub-aggregations.
pub trait Aggregation: Send + Sync + Debug {
    /// The name the aggregation result is reported under.
    fn name(&self) -> &str;

    /// The JSON DSL name of this aggregation (`"terms"`, `"nested"`, ...).
    fn kind(&self) -> &'static str;

    /// Render the object placed under [`Aggregation::kind`].
    fn body(&self) -> Value;

    /// Get the sub-aggregations.
    fn sub_aggregations(&self) -> &[Box<dyn Aggregation>];

    /// Add a sub-aggregation.
    fn add_sub_aggregation(&mut self, aggregation: Box<dyn Aggregation>);

    /// Clone this aggregation.
    fn clone_box(&self) -> Box<dyn Aggregation>;

    /// Get this aggregation as Any for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Render `{ name: { kind: body, "aggregations": { ... } } }`.
    fn to_json(&self) -> Value {
        let mut node = Map::new();
        node.insert(self.kind().to_string(), self.body());

        let subs = self.sub_aggregations();
        if !subs.is_empty() {
            node.insert("aggregations".to_string(), aggregations_object(subs));
        }

        let mut named = Map::new();
        named.insert(self.name().to_string(), Value::Object(node));
        Value::Object(named)
    }

    /// Render this aggregation as compact JSON text.
    fn json(&self) -> String {
        self.to_json().to_string()
    }

    /// Render this aggregation as indented JSON text.
    fn json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }
}

impl Serialize for dyn Aggregation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl Clone for Box<dyn Aggregation> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Merge several aggregations into one object keyed by aggregation name.
///
/// A later aggregation replaces an earlier one with the same name.
pub fn aggregations_object(aggregations: &[Box<dyn Aggregation>]) -> Value {
    let mut merged = Map::new();
    for aggregation in aggregations {
        if let Value::Object(named) = aggregation.to_json() {
            merged.extend(named);
        }
    }
    Value::Object(merged)
}
