//! Function score query: rescoring a query with score functions.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{QueryDslError, Result};
use crate::query::query::{DEFAULT_BOOST, Query, float_value, put_common};

/// How the scores of several functions are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FunctionScoreMode {
    #[default]
    Multiply,
    Sum,
    Avg,
    First,
    Max,
    Min,
}

impl FromStr for FunctionScoreMode {
    type Err = QueryDslError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "multiply" => Ok(FunctionScoreMode::Multiply),
            "sum" => Ok(FunctionScoreMode::Sum),
            "avg" => Ok(FunctionScoreMode::Avg),
            "first" => Ok(FunctionScoreMode::First),
            "max" => Ok(FunctionScoreMode::Max),
            "min" => Ok(FunctionScoreMode::Min),
            _ => Err(QueryDslError::invalid_option("score_mode", s)),
        }
    }
}

impl fmt::Display for FunctionScoreMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FunctionScoreMode::Multiply => "multiply",
            FunctionScoreMode::Sum => "sum",
            FunctionScoreMode::Avg => "avg",
            FunctionScoreMode::First => "first",
            FunctionScoreMode::Max => "max",
            FunctionScoreMode::Min => "min",
        };
        write!(f, "{name}")
    }
}

/// How the combined function score is merged with the query score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombineFunction {
    #[default]
    Multiply,
    Replace,
    Sum,
    Avg,
    Max,
    Min,
}

impl FromStr for CombineFunction {
    type Err = QueryDslError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "multiply" => Ok(CombineFunction::Multiply),
            "replace" => Ok(CombineFunction::Replace),
            "sum" => Ok(CombineFunction::Sum),
            "avg" => Ok(CombineFunction::Avg),
            "max" => Ok(CombineFunction::Max),
            "min" => Ok(CombineFunction::Min),
            _ => Err(QueryDslError::invalid_option("boost_mode", s)),
        }
    }
}

impl fmt::Display for CombineFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CombineFunction::Multiply => "multiply",
            CombineFunction::Replace => "replace",
            CombineFunction::Sum => "sum",
            CombineFunction::Avg => "avg",
            CombineFunction::Max => "max",
            CombineFunction::Min => "min",
        };
        write!(f, "{name}")
    }
}

/// Function applied to a field value before it is used as a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldValueFactorModifier {
    #[default]
    None,
    Log,
    Log1p,
    Log2p,
    Ln,
    Ln1p,
    Ln2p,
    Square,
    Sqrt,
    Reciprocal,
}

impl FromStr for FieldValueFactorModifier {
    type Err = QueryDslError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(FieldValueFactorModifier::None),
            "log" => Ok(FieldValueFactorModifier::Log),
            "log1p" => Ok(FieldValueFactorModifier::Log1p),
            "log2p" => Ok(FieldValueFactorModifier::Log2p),
            "ln" => Ok(FieldValueFactorModifier::Ln),
            "ln1p" => Ok(FieldValueFactorModifier::Ln1p),
            "ln2p" => Ok(FieldValueFactorModifier::Ln2p),
            "square" => Ok(FieldValueFactorModifier::Square),
            "sqrt" => Ok(FieldValueFactorModifier::Sqrt),
            "reciprocal" => Ok(FieldValueFactorModifier::Reciprocal),
            _ => Err(QueryDslError::invalid_option("modifier", s)),
        }
    }
}

impl fmt::Display for FieldValueFactorModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldValueFactorModifier::None => "none",
            FieldValueFactorModifier::Log => "log",
            FieldValueFactorModifier::Log1p => "log1p",
            FieldValueFactorModifier::Log2p => "log2p",
            FieldValueFactorModifier::Ln => "ln",
            FieldValueFactorModifier::Ln1p => "ln1p",
            FieldValueFactorModifier::Ln2p => "ln2p",
            FieldValueFactorModifier::Square => "square",
            FieldValueFactorModifier::Sqrt => "sqrt",
            FieldValueFactorModifier::Reciprocal => "reciprocal",
        };
        write!(f, "{name}")
    }
}

/// Score derived from a numeric field: `modifier(factor * doc[field])`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValueFactorFunction {
    field: String,
    factor: f32,
    modifier: FieldValueFactorModifier,
    missing: Option<f64>,
}

impl FieldValueFactorFunction {
    /// Create a field value factor function with factor 1 and no modifier.
    pub fn new<S: Into<String>>(field: S) -> Self {
        FieldValueFactorFunction {
            field: field.into(),
            factor: 1.0,
            modifier: FieldValueFactorModifier::None,
            missing: None,
        }
    }

    /// Set the multiplier.
    pub fn with_factor(mut self, factor: f32) -> Self {
        self.factor = factor;
        self
    }

    /// Set the modifier.
    pub fn with_modifier(mut self, modifier: FieldValueFactorModifier) -> Self {
        self.modifier = modifier;
        self
    }

    /// Set the value used for documents without the field.
    pub fn with_missing(mut self, missing: f64) -> Self {
        self.missing = Some(missing);
        self
    }

    /// Get the field name.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Get the factor.
    pub fn factor(&self) -> f32 {
        self.factor
    }

    /// Get the modifier.
    pub fn modifier(&self) -> FieldValueFactorModifier {
        self.modifier
    }
}

/// A score function.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreFunction {
    /// Score from a numeric field.
    FieldValueFactor(FieldValueFactorFunction),
    /// A constant score.
    Weight(f32),
    /// A uniformly distributed score, reproducible when seeded.
    RandomScore {
        /// Seed for reproducible scores.
        seed: Option<i64>,
        /// Field whose values feed the random generator.
        field: Option<String>,
    },
}

impl ScoreFunction {
    /// Render this function into the object of one `functions` entry.
    fn put_into(&self, entry: &mut Map<String, Value>) {
        match self {
            ScoreFunction::FieldValueFactor(function) => {
                let mut body = Map::new();
                body.insert("field".to_string(), Value::from(function.field.as_str()));
                body.insert("factor".to_string(), float_value(function.factor));
                body.insert(
                    "modifier".to_string(),
                    Value::from(function.modifier.to_string()),
                );
                if let Some(missing) = function.missing {
                    body.insert("missing".to_string(), Value::from(missing));
                }
                entry.insert("field_value_factor".to_string(), Value::Object(body));
            }
            ScoreFunction::Weight(weight) => {
                entry.insert("weight".to_string(), float_value(*weight));
            }
            ScoreFunction::RandomScore { seed, field } => {
                let mut body = Map::new();
                if let Some(seed) = seed {
                    body.insert("seed".to_string(), Value::from(*seed));
                }
                if let Some(field) = field {
                    body.insert("field".to_string(), Value::from(field.as_str()));
                }
                entry.insert("random_score".to_string(), Value::Object(body));
            }
        }
    }
}

impl From<FieldValueFactorFunction> for ScoreFunction {
    fn from(function: FieldValueFactorFunction) -> Self {
        ScoreFunction::FieldValueFactor(function)
    }
}

/// A score function applied only to documents matching `filter`.
#[derive(Debug, Clone)]
pub struct FilterFunction {
    filter: Option<Box<dyn Query>>,
    function: ScoreFunction,
}

impl FilterFunction {
    /// Apply `function` to every document.
    pub fn new(function: ScoreFunction) -> Self {
        FilterFunction {
            filter: None,
            function,
        }
    }

    /// Apply `function` to documents matching `filter`.
    pub fn with_filter(filter: Box<dyn Query>, function: ScoreFunction) -> Self {
        FilterFunction {
            filter: Some(filter),
            function,
        }
    }

    /// Get the filter, if any.
    pub fn filter(&self) -> Option<&dyn Query> {
        self.filter.as_deref()
    }

    /// Get the score function.
    pub fn function(&self) -> &ScoreFunction {
        &self.function
    }

    fn to_value(&self) -> Value {
        let mut entry = Map::new();
        if let Some(filter) = &self.filter {
            entry.insert("filter".to_string(), filter.to_json());
        }
        self.function.put_into(&mut entry);
        Value::Object(entry)
    }
}

/// A query whose scores are modified by a list of filter functions.
#[derive(Debug, Clone)]
pub struct FunctionScoreQuery {
    query: Box<dyn Query>,
    functions: Vec<FilterFunction>,
    score_mode: FunctionScoreMode,
    boost_mode: CombineFunction,
    max_boost: f32,
    min_score: Option<f32>,
    boost: f32,
    query_name: Option<String>,
}

impl FunctionScoreQuery {
    /// Create a function score query.
    pub fn new(query: Box<dyn Query>, functions: Vec<FilterFunction>) -> Self {
        FunctionScoreQuery {
            query,
            functions,
            score_mode: FunctionScoreMode::Multiply,
            boost_mode: CombineFunction::Multiply,
            max_boost: f32::MAX,
            min_score: None,
            boost: DEFAULT_BOOST,
            query_name: None,
        }
    }

    /// Set how function scores are combined.
    pub fn with_score_mode(mut self, score_mode: FunctionScoreMode) -> Self {
        self.score_mode = score_mode;
        self
    }

    /// Set how the function score is merged with the query score.
    pub fn with_boost_mode(mut self, boost_mode: CombineFunction) -> Self {
        self.boost_mode = boost_mode;
        self
    }

    /// Cap the function score.
    pub fn with_max_boost(mut self, max_boost: f32) -> Self {
        self.max_boost = max_boost;
        self
    }

    /// Drop documents scoring below `min_score`.
    pub fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = Some(min_score);
        self
    }

    /// Get the wrapped query.
    pub fn query(&self) -> &dyn Query {
        self.query.as_ref()
    }

    /// Get the filter functions in evaluation order.
    pub fn functions(&self) -> &[FilterFunction] {
        &self.functions
    }

    /// Get the score mode.
    pub fn score_mode(&self) -> FunctionScoreMode {
        self.score_mode
    }

    /// Get the boost mode.
    pub fn boost_mode(&self) -> CombineFunction {
        self.boost_mode
    }

    /// Get the max boost.
    pub fn max_boost(&self) -> f32 {
        self.max_boost
    }

    /// Get the min score.
    pub fn min_score(&self) -> Option<f32> {
        self.min_score
    }
}

impl Query for FunctionScoreQuery {
    fn kind(&self) -> &'static str {
        "function_score"
    }

    fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("query".to_string(), self.query.to_json());
        body.insert(
            "functions".to_string(),
            Value::Array(self.functions.iter().map(|f| f.to_value()).collect()),
        );
        body.insert(
            "score_mode".to_string(),
            Value::from(self.score_mode.to_string()),
        );
        body.insert(
            "boost_mode".to_string(),
            Value::from(self.boost_mode.to_string()),
        );
        body.insert("max_boost".to_string(), float_value(self.max_boost));
        if let Some(min_score) = self.min_score {
            body.insert("min_score".to_string(), float_value(min_score));
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
