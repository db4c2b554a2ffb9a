//! Query object model: typed nodes of a search query tree and their JSON
//! rendering.

pub mod boolean;
pub mod boosting;
pub mod common_terms;
pub mod constant_score;
pub mod function_score;
pub mod fuzzy;
pub mod ids;
pub mod join;
pub mod match_all;
pub mod match_query;
pub mod multi_match;
pub mod options;
pub mod phrase;
pub mod prefix;
#[allow(clippy::module_inception)]
pub mod query;
pub mod query_string;
pub mod range;
pub mod term;
pub mod terms;
pub mod wildcard;

pub use self::boolean::{BoolClause, BoolQuery, Occur};
pub use self::boosting::BoostingQuery;
pub use self::common_terms::CommonTermsQuery;
pub use self::constant_score::ConstantScoreQuery;
pub use self::function_score::{
    CombineFunction, FieldValueFactorFunction, FieldValueFactorModifier, FilterFunction,
    FunctionScoreMode, FunctionScoreQuery, ScoreFunction,
};
pub use self::fuzzy::FuzzyQuery;
pub use self::ids::IdsQuery;
pub use self::join::{HasChildQuery, InnerHits, NestedQuery, ScoreMode};
pub use self::match_all::MatchAllQuery;
pub use self::match_query::MatchQuery;
pub use self::multi_match::MultiMatchQuery;
pub use self::options::{EditDistance, Fuzziness, MultiMatchType, Operator, ZeroTermsQuery};
pub use self::phrase::{MatchPhrasePrefixQuery, MatchPhraseQuery};
pub use self::prefix::PrefixQuery;
pub use self::query::{DEFAULT_BOOST, Query};
pub use self::query_string::QueryStringQuery;
pub use self::range::RangeQuery;
pub use self::term::TermQuery;
pub use self::terms::{TermsLookup, TermsQuery, TermsSource};
pub use self::wildcard::WildcardQuery;
