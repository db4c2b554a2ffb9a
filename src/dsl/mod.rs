//! Builder functions that assemble query trees from configuration records.
//!
//! Every builder takes the values a query cannot exist without as plain
//! arguments, hands a record of optional settings to a caller-supplied
//! initializer, and then copies only the settings that were filled in onto
//! the query object. Settings left as `None` keep the object's own defaults.
//!
//! ```
//! use query_dsl::dsl::{bool_query, match_query, range, term};
//! use query_dsl::query::{Operator, Query};
//!
//! let query = bool_query(|b| {
//!     b.must(match_query("title", "rust search", |m| {
//!         m.operator = Some(Operator::And);
//!     }));
//!     b.filter(term("status", "published", |_| {}));
//!     b.filter(range("year", |r| {
//!         r.gte(2015);
//!     }));
//! });
//!
//! assert_eq!(query.clauses().len(), 3);
//! assert!(query.json().contains("\"operator\":\"AND\""));
//! ```

pub mod aggregation;
pub mod compound;
pub mod field_boost;
pub mod full_text;
pub mod joining;
pub mod term_level;

pub use self::aggregation::{
    NestedAggregationData, TermsAggregationData, metric_aggregation, nested_aggregation,
    terms_aggregation,
};
pub use self::compound::{
    BoolData, BoostingData, ConstantScoreData, FunctionScoreData, bool_query, boosting,
    constant_score, function_score,
};
pub use self::field_boost::FieldBoost;
pub use self::full_text::{
    CommonData, MatchData, MatchPhraseData, MatchPhrasePrefixData, MinimumShouldMatchData,
    MultiMatchData, common, match_phrase, match_phrase_prefix, match_query, multi_match,
};
pub use self::joining::{HasChildData, NestedData, has_child, nested};
pub use self::term_level::{
    FuzzyData, IdsData, QueryData, QueryStringData, RangeData, StringPattern, TermsLookupData,
    fuzzy, ids, match_all, prefix, query_string, range, term, terms, terms_lookup, wildcard,
};
