//! Term-level builders: exact values, ranges, patterns and ids.

use log::debug;
use serde_json::Value;

use crate::error::Result;
use crate::query::{
    FuzzyQuery, Fuzziness, IdsQuery, MatchAllQuery, Operator, PrefixQuery, Query,
    QueryStringQuery, RangeQuery, TermQuery, TermsLookup, TermsQuery, WildcardQuery,
};

/// Settings shared by every term-level query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryData {
    /// Boost of the query.
    pub boost: Option<f32>,
    /// `_name` reported for matching documents.
    pub query_name: Option<String>,
}

/// Apply the shared term-level settings to a query.
fn init_query(query: &mut dyn Query, boost: Option<f32>, query_name: Option<String>) {
    if let Some(boost) = boost {
        query.set_boost(boost);
    }
    if let Some(name) = query_name {
        query.set_query_name(name);
    }
}

/// Build a `term` query.
pub fn term<F, V>(field: F, value: V, init: impl FnOnce(&mut QueryData)) -> TermQuery
where
    F: Into<String>,
    V: Into<Value>,
{
    let mut params = QueryData::default();
    init(&mut params);

    let mut query = TermQuery::new(field, value);
    init_query(&mut query, params.boost, params.query_name);
    query
}

/// Build a `terms` query over inline values.
pub fn terms<F, I, V>(field: F, values: I, init: impl FnOnce(&mut QueryData)) -> TermsQuery
where
    F: Into<String>,
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let mut params = QueryData::default();
    init(&mut params);

    let mut query = TermsQuery::new(field, values);
    init_query(&mut query, params.boost, params.query_name);
    query
}

/// Where a lookup `terms` query reads its terms from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermsLookupData {
    pub index: Option<String>,
    pub doc_type: Option<String>,
    /// Id of the document holding the terms. Required.
    pub id: Option<String>,
    /// Path of the field holding the terms. Required.
    pub path: Option<String>,
    pub routing: Option<String>,
    pub boost: Option<f32>,
    pub query_name: Option<String>,
}

/// Build a `terms` query whose terms are fetched from another document.
///
/// Fails with [`QueryDslError::MissingField`](crate::error::QueryDslError::MissingField)
/// when the initializer leaves `id` or `path` unset.
pub fn terms_lookup<F>(field: F, init: impl FnOnce(&mut TermsLookupData)) -> Result<TermsQuery>
where
    F: Into<String>,
{
    let mut params = TermsLookupData::default();
    init(&mut params);

    let mut lookup = TermsLookup::new(params.index, params.doc_type, params.id, params.path)?;
    if let Some(routing) = params.routing {
        lookup = lookup.with_routing(routing);
    }

    let mut query = TermsQuery::with_lookup(field, lookup);
    init_query(&mut query, params.boost, params.query_name);
    Ok(query)
}

/// Bounds and options of a `range` query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RangeData {
    /// Lower bound.
    pub from: Option<Value>,
    /// Upper bound.
    pub to: Option<Value>,
    pub include_lower: Option<bool>,
    pub include_upper: Option<bool>,
    /// Date format of the bounds.
    pub format: Option<String>,
    pub time_zone: Option<String>,
    pub boost: Option<f32>,
    pub query_name: Option<String>,
}

impl RangeData {
    /// Greater than or equal to `value`.
    pub fn gte<V: Into<Value>>(&mut self, value: V) -> &mut Self {
        self.from = Some(value.into());
        self.include_lower = Some(true);
        self
    }

    /// Strictly greater than `value`.
    pub fn gt<V: Into<Value>>(&mut self, value: V) -> &mut Self {
        self.from = Some(value.into());
        self.include_lower = Some(false);
        self
    }

    /// Less than or equal to `value`.
    pub fn lte<V: Into<Value>>(&mut self, value: V) -> &mut Self {
        self.to = Some(value.into());
        self.include_upper = Some(true);
        self
    }

    /// Strictly less than `value`.
    pub fn lt<V: Into<Value>>(&mut self, value: V) -> &mut Self {
        self.to = Some(value.into());
        self.include_upper = Some(false);
        self
    }
}

/// Build a `range` query.
pub fn range<F: Into<String>>(field: F, init: impl FnOnce(&mut RangeData)) -> RangeQuery {
    let mut params = RangeData::default();
    init(&mut params);

    let mut query = RangeQuery::new(field);
    if let Some(from) = params.from {
        query = query.with_from(from);
    }
    if let Some(to) = params.to {
        query = query.with_to(to);
    }
    if let Some(include_lower) = params.include_lower {
        query = query.with_include_lower(include_lower);
    }
    if let Some(include_upper) = params.include_upper {
        query = query.with_include_upper(include_upper);
    }
    if let Some(format) = params.format {
        query = query.with_format(format);
    }
    if let Some(time_zone) = params.time_zone {
        query = query.with_time_zone(time_zone);
    }
    init_query(&mut query, params.boost, params.query_name);
    query
}

/// Options of a `fuzzy` query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FuzzyData {
    pub fuzziness: Option<Fuzziness>,
    pub prefix_length: Option<u32>,
    pub max_expansions: Option<u32>,
    /// Whether swapping two adjacent characters counts as one edit.
    /// Unset means `false`.
    pub transpositions: Option<bool>,
    pub boost: Option<f32>,
    pub query_name: Option<String>,
}

/// Build a `fuzzy` query.
pub fn fuzzy<F, V>(field: F, value: V, init: impl FnOnce(&mut FuzzyData)) -> FuzzyQuery
where
    F: Into<String>,
    V: Into<Value>,
{
    let mut params = FuzzyData::default();
    init(&mut params);

    let mut query = FuzzyQuery::new(field, value);
    init_query(&mut query, params.boost, params.query_name);
    if let Some(fuzziness) = params.fuzziness {
        query = query.with_fuzziness(fuzziness);
    }
    if let Some(prefix_length) = params.prefix_length {
        query = query.with_prefix_length(prefix_length);
    }
    if let Some(max_expansions) = params.max_expansions {
        query = query.with_max_expansions(max_expansions);
    }
    query.with_transpositions(params.transpositions.unwrap_or(false))
}

/// Build a `prefix` query.
pub fn prefix<F, P>(field: F, prefix: P, init: impl FnOnce(&mut QueryData)) -> PrefixQuery
where
    F: Into<String>,
    P: Into<String>,
{
    let mut params = QueryData::default();
    init(&mut params);

    let mut query = PrefixQuery::new(field, prefix);
    init_query(&mut query, params.boost, params.query_name);
    query
}

/// Build a `wildcard` query.
pub fn wildcard<F, P>(field: F, pattern: P, init: impl FnOnce(&mut QueryData)) -> WildcardQuery
where
    F: Into<String>,
    P: Into<String>,
{
    let mut params = QueryData::default();
    init(&mut params);

    let mut query = WildcardQuery::new(field, pattern);
    init_query(&mut query, params.boost, params.query_name);
    query
}

/// Ids (and optionally mapping types) for an `ids` query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdsData {
    pub types: Vec<String>,
    pub values: Vec<String>,
    pub boost: Option<f32>,
    pub query_name: Option<String>,
}

impl IdsData {
    /// Restrict the query to a single mapping type.
    pub fn set_type<S: Into<String>>(&mut self, doc_type: S) -> &mut Self {
        self.types = vec![doc_type.into()];
        self
    }
}

/// Build an `ids` query.
pub fn ids(init: impl FnOnce(&mut IdsData)) -> IdsQuery {
    let mut params = IdsData::default();
    init(&mut params);

    let mut query = IdsQuery::new();
    if !params.types.is_empty() {
        query = query.with_types(params.types);
    }
    init_query(&mut query, params.boost, params.query_name);
    query.add_ids(params.values)
}

/// How the search text of [`query_string`] is anchored in the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringPattern {
    /// `text*`
    StartsWith(String),
    /// `*text`
    EndsWith(String),
    /// `text`
    EqualsTo(String),
    /// `*text*`
    Contains(String),
}

impl StringPattern {
    /// Render the query-string expression for this pattern.
    pub fn to_query_text(&self) -> String {
        match self {
            StringPattern::StartsWith(text) => format!("{text}*"),
            StringPattern::EndsWith(text) => format!("*{text}"),
            StringPattern::EqualsTo(text) => text.clone(),
            StringPattern::Contains(text) => format!("*{text}*"),
        }
    }
}

/// Options of a [`query_string`] query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryStringData {
    /// Operator between terms without an explicit one. Defaults to `AND`.
    pub default_operator: Operator,
    pub boost: Option<f32>,
    pub query_name: Option<String>,
}

impl Default for QueryStringData {
    fn default() -> Self {
        QueryStringData {
            default_operator: Operator::And,
            boost: None,
            query_name: None,
        }
    }
}

/// Build a `query_string` query matching `pattern` in one field, with
/// wildcard analysis enabled.
pub fn query_string<F: Into<String>>(
    field: F,
    pattern: StringPattern,
    init: impl FnOnce(&mut QueryStringData),
) -> QueryStringQuery {
    let mut params = QueryStringData::default();
    init(&mut params);

    let text = pattern.to_query_text();
    debug!("query_string pattern {pattern:?} rendered as {text:?}");

    let mut query = QueryStringQuery::new(text)
        .with_field(field)
        .with_analyze_wildcard(true)
        .with_default_operator(params.default_operator);
    init_query(&mut query, params.boost, params.query_name);
    query
}

/// Build a `match_all` query.
pub fn match_all(init: impl FnOnce(&mut QueryData)) -> MatchAllQuery {
    let mut params = QueryData::default();
    init(&mut params);

    let mut query = MatchAllQuery::new();
    init_query(&mut query, params.boost, params.query_name);
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryDslError;
    use serde_json::json;

    #[test]
    fn test_term_sets_only_boost() {
        let query = term("status", "active", |t| t.boost = Some(2.0));

        assert_eq!(query.field(), "status");
        assert_eq!(query.value(), &json!("active"));
        assert_eq!(query.boost(), 2.0);
        assert_eq!(query.query_name(), None);
    }

    #[test]
    fn test_term_untouched_keeps_defaults() {
        let query = term("status", "active", |_| {});

        assert_eq!(query.boost(), 1.0);
        assert_eq!(
            query.to_json(),
            json!({"term": {"status": {"value": "active", "boost": 1.0}}})
        );
    }

    #[test]
    fn test_query_name_is_rendered() {
        let query = prefix("user", "ki", |p| p.query_name = Some("user_prefix".to_string()));

        assert_eq!(query.to_json()["prefix"]["_name"], json!("user_prefix"));
    }

    #[test]
    fn test_terms_values() {
        let query = terms("tags", ["rust", "search"], |t| t.boost = Some(1.5));

        assert_eq!(
            query.to_json(),
            json!({"terms": {"tags": ["rust", "search"], "boost": 1.5}})
        );
    }

    #[test]
    fn test_terms_lookup() {
        let query = terms_lookup("user", |l| {
            l.index = Some("users".to_string());
            l.id = Some("2".to_string());
            l.path = Some("followers".to_string());
        })
        .unwrap();

        match query.lookup() {
            Some(lookup) => {
                assert_eq!(lookup.index(), Some("users"));
                assert_eq!(lookup.id(), "2");
                assert_eq!(lookup.path(), "followers");
                assert_eq!(lookup.routing(), None);
            }
            None => panic!("expected a lookup source"),
        }
        assert!(query.values().is_none());
    }

    #[test]
    fn test_terms_lookup_requires_id_and_path() {
        let err = terms_lookup("user", |l| l.path = Some("followers".to_string())).unwrap_err();
        assert!(matches!(err, QueryDslError::MissingField(_)));

        let err = terms_lookup("user", |l| l.id = Some("2".to_string())).unwrap_err();
        assert!(matches!(err, QueryDslError::MissingField(_)));
    }

    #[test]
    fn test_range_shortcuts() {
        let query = range("age", |r| {
            r.gt(10).lte(20);
        });

        assert_eq!(query.from(), Some(&json!(10)));
        assert_eq!(query.to(), Some(&json!(20)));
        assert!(!query.include_lower());
        assert!(query.include_upper());
    }

    #[test]
    fn test_range_gte_lt() {
        let query = range("published", |r| {
            r.gte("now-1d/d").lt("now/d");
            r.format = Some("strict_date_optional_time".to_string());
            r.time_zone = Some("+01:00".to_string());
        });

        assert!(query.include_lower());
        assert!(!query.include_upper());
        assert_eq!(query.format(), Some("strict_date_optional_time"));
        assert_eq!(query.time_zone(), Some("+01:00"));
    }

    #[test]
    fn test_range_defaults() {
        let query = range("age", |_| {});

        assert_eq!(
            query.to_json(),
            json!({"range": {"age": {
                "from": null,
                "to": null,
                "include_lower": true,
                "include_upper": true,
                "boost": 1.0
            }}})
        );
    }

    #[test]
    fn test_fuzzy_transpositions_default_false() {
        let query = fuzzy("user", "ki", |_| {});
        assert!(!query.transpositions());
        assert_eq!(query.fuzziness(), Fuzziness::Auto);

        let query = fuzzy("user", "ki", |f| {
            f.transpositions = Some(true);
            f.fuzziness = Some(Fuzziness::TWO);
            f.prefix_length = Some(1);
            f.max_expansions = Some(10);
        });
        assert!(query.transpositions());
        assert_eq!(query.fuzziness(), Fuzziness::TWO);
        assert_eq!(query.prefix_length(), 1);
        assert_eq!(query.max_expansions(), 10);
    }

    #[test]
    fn test_prefix_applies_boost_and_name() {
        let query = prefix("user", "ki", |p| {
            p.boost = Some(1.1);
            p.query_name = Some("user_prefix".to_string());
        });

        assert_eq!(query.boost(), 1.1);
        assert_eq!(query.query_name(), Some("user_prefix"));
        assert_eq!(
            query.to_json(),
            json!({"prefix": {"user": {"value": "ki", "boost": 1.1, "_name": "user_prefix"}}})
        );
    }

    #[test]
    fn test_prefix_untouched_keeps_defaults() {
        let query = prefix("user", "ki", |_| {});

        assert_eq!(
            query.to_json(),
            json!({"prefix": {"user": {"value": "ki", "boost": 1.0}}})
        );
    }

    #[test]
    fn test_wildcard() {
        let query = wildcard("user", "ki*y", |w| w.boost = Some(2.0));

        assert_eq!(query.pattern(), "ki*y");
        assert_eq!(query.boost(), 2.0);
    }

    #[test]
    fn test_ids_set_type() {
        let query = ids(|i| {
            i.set_type("_doc");
            i.values = vec!["1".to_string(), "4".to_string(), "100".to_string()];
        });

        assert_eq!(query.types(), ["_doc".to_string()]);
        assert_eq!(query.ids().len(), 3);
    }

    #[test]
    fn test_string_patterns() {
        assert_eq!(StringPattern::StartsWith("ab".into()).to_query_text(), "ab*");
        assert_eq!(StringPattern::EndsWith("ab".into()).to_query_text(), "*ab");
        assert_eq!(StringPattern::EqualsTo("ab".into()).to_query_text(), "ab");
        assert_eq!(StringPattern::Contains("ab".into()).to_query_text(), "*ab*");
    }

    #[test]
    fn test_query_string() {
        let query = query_string("name", StringPattern::Contains("ohn".into()), |_| {});

        assert_eq!(query.query(), "*ohn*");
        assert_eq!(query.fields(), ["name".to_string()]);
        assert!(query.analyze_wildcard());
        assert_eq!(query.default_operator(), Operator::And);
        assert_eq!(query.field(), Some("name"));
    }

    #[test]
    fn test_query_string_operator_override() {
        let query = query_string("name", StringPattern::EqualsTo("john".into()), |s| {
            s.default_operator = Operator::Or;
        });

        assert_eq!(query.default_operator(), Operator::Or);
    }

    #[test]
    fn test_match_all() {
        let query = match_all(|m| m.boost = Some(1.2));

        assert_eq!(query.to_json()["match_all"]["boost"], json!(1.2));
    }
}
