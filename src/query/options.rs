//! Option values shared by the full-text and term-level queries.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{QueryDslError, Result};

/// How the terms of an analyzed query string are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Operator {
    /// Every term must match.
    And,
    /// Any term may match.
    #[default]
    Or,
}

impl FromStr for Operator {
    type Err = QueryDslError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "and" => Ok(Operator::And),
            "or" => Ok(Operator::Or),
            _ => Err(QueryDslError::invalid_option("operator", s)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operator::And => write!(f, "AND"),
            Operator::Or => write!(f, "OR"),
        }
    }
}

/// What a full-text query matches when the analyzer removes every token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroTermsQuery {
    /// Match no documents.
    #[default]
    None,
    /// Match all documents.
    All,
}

impl FromStr for ZeroTermsQuery {
    type Err = QueryDslError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(ZeroTermsQuery::None),
            "all" => Ok(ZeroTermsQuery::All),
            _ => Err(QueryDslError::invalid_option("zero_terms_query", s)),
        }
    }
}

impl fmt::Display for ZeroTermsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZeroTermsQuery::None => write!(f, "NONE"),
            ZeroTermsQuery::All => write!(f, "ALL"),
        }
    }
}

/// Execution strategy of a `multi_match` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiMatchType {
    /// Score by the best matching field.
    #[default]
    BestFields,
    /// Sum the scores of all matching fields.
    MostFields,
    /// Treat the fields as one big field.
    CrossFields,
    /// Run a `match_phrase` on each field.
    Phrase,
    /// Run a `match_phrase_prefix` on each field.
    PhrasePrefix,
}

impl FromStr for MultiMatchType {
    type Err = QueryDslError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "best_fields" | "boolean" => Ok(MultiMatchType::BestFields),
            "most_fields" => Ok(MultiMatchType::MostFields),
            "cross_fields" => Ok(MultiMatchType::CrossFields),
            "phrase" => Ok(MultiMatchType::Phrase),
            "phrase_prefix" => Ok(MultiMatchType::PhrasePrefix),
            _ => Err(QueryDslError::invalid_option("multi_match type", s)),
        }
    }
}

impl fmt::Display for MultiMatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MultiMatchType::BestFields => "best_fields",
            MultiMatchType::MostFields => "most_fields",
            MultiMatchType::CrossFields => "cross_fields",
            MultiMatchType::Phrase => "phrase",
            MultiMatchType::PhrasePrefix => "phrase_prefix",
        };
        write!(f, "{name}")
    }
}

/// Allowed edit distance for fuzzy matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fuzziness {
    /// Edit distance derived from the term length (0 below 3 chars, 1 below 6, else 2).
    #[default]
    Auto,
    /// `AUTO:low,high` with custom length thresholds.
    AutoRange {
        /// Terms shorter than this must match exactly.
        low: u32,
        /// Terms shorter than this allow one edit; longer allow two.
        high: u32,
    },
    /// A fixed edit distance.
    Edits(EditDistance),
}

/// A fixed edit distance of 0, 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditDistance(u8);

impl EditDistance {
    /// Largest edit distance the engine accepts.
    pub const MAX: u8 = 2;

    /// Validate an edit distance.
    pub fn new(edits: u8) -> Result<Self> {
        if edits > Self::MAX {
            return Err(QueryDslError::invalid_option("fuzziness", edits.to_string()));
        }
        Ok(EditDistance(edits))
    }

    /// The number of edits.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Fuzziness {
    /// Exact matching only.
    pub const ZERO: Fuzziness = Fuzziness::Edits(EditDistance(0));
    /// One edit.
    pub const ONE: Fuzziness = Fuzziness::Edits(EditDistance(1));
    /// Two edits.
    pub const TWO: Fuzziness = Fuzziness::Edits(EditDistance(2));

    /// A fixed edit distance, rejecting anything above two.
    pub fn edits(edits: u8) -> Result<Self> {
        EditDistance::new(edits).map(Fuzziness::Edits)
    }

    /// Render the engine's representation of this fuzziness.
    pub fn to_value(&self) -> Value {
        Value::from(self.to_string())
    }
}

impl FromStr for Fuzziness {
    type Err = QueryDslError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let upper = trimmed.to_ascii_uppercase();

        if upper == "AUTO" {
            return Ok(Fuzziness::Auto);
        }

        if let Some(range) = upper.strip_prefix("AUTO:") {
            let (low, high) = range
                .split_once(',')
                .ok_or_else(|| QueryDslError::invalid_option("fuzziness", s))?;
            let low = low
                .trim()
                .parse::<u32>()
                .map_err(|_| QueryDslError::invalid_option("fuzziness", s))?;
            let high = high
                .trim()
                .parse::<u32>()
                .map_err(|_| QueryDslError::invalid_option("fuzziness", s))?;
            if low > high {
                return Err(QueryDslError::invalid_option("fuzziness", s));
            }
            return Ok(Fuzziness::AutoRange { low, high });
        }

        trimmed
            .parse::<u8>()
            .ok()
            .and_then(|edits| Fuzziness::edits(edits).ok())
            .ok_or_else(|| QueryDslError::invalid_option("fuzziness", s))
    }
}

impl fmt::Display for Fuzziness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fuzziness::Auto => write!(f, "AUTO"),
            Fuzziness::AutoRange { low, high } => write!(f, "AUTO:{low},{high}"),
            Fuzziness::Edits(edits) => write!(f, "{}", edits.get()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_parsing() {
        assert_eq!("and".parse::<Operator>().unwrap(), Operator::And);
        assert_eq!("OR".parse::<Operator>().unwrap(), Operator::Or);
        assert!("xor".parse::<Operator>().is_err());
        assert_eq!(Operator::default().to_string(), "OR");
    }

    #[test]
    fn test_zero_terms_query_parsing() {
        assert_eq!("all".parse::<ZeroTermsQuery>().unwrap(), ZeroTermsQuery::All);
        assert_eq!("None".parse::<ZeroTermsQuery>().unwrap(), ZeroTermsQuery::None);

        let err = "some".parse::<ZeroTermsQuery>().unwrap_err();
        assert!(matches!(
            err,
            QueryDslError::InvalidOption {
                kind: "zero_terms_query",
                ..
            }
        ));
    }

    #[test]
    fn test_multi_match_type_round_trip() {
        for name in ["best_fields", "most_fields", "cross_fields", "phrase", "phrase_prefix"] {
            let parsed: MultiMatchType = name.parse().unwrap();
            assert_eq!(parsed.to_string(), name);
        }
        assert!("fastest_fields".parse::<MultiMatchType>().is_err());
    }

    #[test]
    fn test_fuzziness_parsing() {
        assert_eq!("auto".parse::<Fuzziness>().unwrap(), Fuzziness::Auto);
        assert_eq!(
            "AUTO:3,6".parse::<Fuzziness>().unwrap(),
            Fuzziness::AutoRange { low: 3, high: 6 }
        );
        assert_eq!("2".parse::<Fuzziness>().unwrap(), Fuzziness::TWO);

        assert!("3".parse::<Fuzziness>().is_err());
        assert!("AUTO:6,3".parse::<Fuzziness>().is_err());
        assert!("AUTO:3".parse::<Fuzziness>().is_err());
    }

    #[test]
    fn test_fuzziness_value() {
        assert_eq!(Fuzziness::Auto.to_value(), Value::from("AUTO"));
        assert_eq!(Fuzziness::ONE.to_value(), Value::from("1"));
    }

    #[test]
    fn test_fuzziness_edits_bounded() {
        assert_eq!(Fuzziness::edits(1).unwrap(), Fuzziness::ONE);
        assert_eq!(Fuzziness::edits(0).unwrap().to_string(), "0");
        assert!(Fuzziness::edits(7).is_err());
        assert!(EditDistance::new(3).is_err());
        assert_eq!(EditDistance::new(2).unwrap().get(), 2);
    }
}
