//! Field boost expressions such as `title^2`.

use std::fmt;
use std::str::FromStr;

use crate::error::{QueryDslError, Result};

/// A field name paired with the boost applied to matches in it.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBoost {
    /// The field name.
    pub field: String,
    /// The boost, `1.0` when the expression has none.
    pub boost: f32,
}

impl FieldBoost {
    /// Create a field boost.
    pub fn new<S: Into<String>>(field: S, boost: f32) -> Self {
        FieldBoost {
            field: field.into(),
            boost,
        }
    }
}

impl FromStr for FieldBoost {
    type Err = QueryDslError;

    /// Parse `field` or `field^boost`. Only the first `^` separates the
    /// field from the boost.
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('^') {
            None => Ok(FieldBoost::new(s, 1.0)),
            Some((field, boost)) => {
                let boost = boost
                    .trim()
                    .parse::<f32>()
                    .map_err(|_| QueryDslError::invalid_field_boost(s))?;
                Ok(FieldBoost::new(field, boost))
            }
        }
    }
}

impl fmt::Display for FieldBoost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}^{:?}", self.field, self.boost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_boost() {
        let parsed: FieldBoost = "title^2".parse().unwrap();
        assert_eq!(parsed, FieldBoost::new("title", 2.0));

        let parsed: FieldBoost = "body^0.5".parse().unwrap();
        assert_eq!(parsed.boost, 0.5);
    }

    #[test]
    fn test_parse_without_boost() {
        let parsed: FieldBoost = "title".parse().unwrap();
        assert_eq!(parsed, FieldBoost::new("title", 1.0));
    }

    #[test]
    fn test_only_first_caret_splits() {
        let err = "title^2^3".parse::<FieldBoost>().unwrap_err();
        assert!(matches!(err, QueryDslError::InvalidFieldBoost(ref e) if e == "title^2^3"));
    }

    #[test]
    fn test_non_numeric_boost() {
        assert!("title^high".parse::<FieldBoost>().is_err());
        assert!("title^".parse::<FieldBoost>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldBoost::new("title", 2.0).to_string(), "title^2.0");
    }
}
