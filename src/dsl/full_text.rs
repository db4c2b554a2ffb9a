//! Full-text builders: analyzed `match` family, `multi_match` and `common`.

use log::debug;
use serde_json::Value;

use crate::dsl::field_boost::FieldBoost;
use crate::error::Result;
use crate::query::{
    CommonTermsQuery, Fuzziness, MatchPhrasePrefixQuery, MatchPhraseQuery, MatchQuery,
    MultiMatchQuery, MultiMatchType, Operator, Query, ZeroTermsQuery,
};

/// Options of a `match` query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchData {
    pub operator: Option<Operator>,
    pub analyzer: Option<String>,
    pub boost: Option<f32>,
    pub fuzziness: Option<Fuzziness>,
    pub prefix_length: Option<u32>,
    pub max_expansions: Option<u32>,
    pub minimum_should_match: Option<String>,
    pub fuzzy_rewrite: Option<String>,
    pub lenient: Option<bool>,
    pub fuzzy_transpositions: Option<bool>,
    pub zero_terms_query: Option<ZeroTermsQuery>,
    pub cutoff_frequency: Option<f32>,
}

/// Build a `match` query.
pub fn match_query<F, V>(field: F, query: V, init: impl FnOnce(&mut MatchData)) -> MatchQuery
where
    F: Into<String>,
    V: Into<Value>,
{
    let mut params = MatchData::default();
    init(&mut params);

    let mut query = MatchQuery::new(field, query);
    if let Some(analyzer) = params.analyzer {
        query = query.with_analyzer(analyzer);
    }
    if let Some(boost) = params.boost {
        query.set_boost(boost);
    }
    if let Some(cutoff_frequency) = params.cutoff_frequency {
        query = query.with_cutoff_frequency(cutoff_frequency);
    }
    if let Some(fuzziness) = params.fuzziness {
        query = query.with_fuzziness(fuzziness);
    }
    if let Some(fuzzy_rewrite) = params.fuzzy_rewrite {
        query = query.with_fuzzy_rewrite(fuzzy_rewrite);
    }
    if let Some(fuzzy_transpositions) = params.fuzzy_transpositions {
        query = query.with_fuzzy_transpositions(fuzzy_transpositions);
    }
    if let Some(lenient) = params.lenient {
        query = query.with_lenient(lenient);
    }
    if let Some(max_expansions) = params.max_expansions {
        query = query.with_max_expansions(max_expansions);
    }
    if let Some(minimum_should_match) = params.minimum_should_match {
        query = query.with_minimum_should_match(minimum_should_match);
    }
    if let Some(operator) = params.operator {
        query = query.with_operator(operator);
    }
    if let Some(prefix_length) = params.prefix_length {
        query = query.with_prefix_length(prefix_length);
    }
    if let Some(zero_terms_query) = params.zero_terms_query {
        query = query.with_zero_terms_query(zero_terms_query);
    }
    query
}

/// Options of a `match_phrase` query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchPhraseData {
    pub analyzer: Option<String>,
    /// Number of positions terms may move apart and still match.
    pub slop: Option<u32>,
    pub boost: Option<f32>,
}

/// Build a `match_phrase` query.
pub fn match_phrase<F, V>(
    field: F,
    query: V,
    init: impl FnOnce(&mut MatchPhraseData),
) -> MatchPhraseQuery
where
    F: Into<String>,
    V: Into<Value>,
{
    let mut params = MatchPhraseData::default();
    init(&mut params);

    let mut query = MatchPhraseQuery::new(field, query);
    if let Some(analyzer) = params.analyzer {
        query = query.with_analyzer(analyzer);
    }
    if let Some(slop) = params.slop {
        query = query.with_slop(slop);
    }
    if let Some(boost) = params.boost {
        query.set_boost(boost);
    }
    query
}

/// Options of a `match_phrase_prefix` query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchPhrasePrefixData {
    pub analyzer: Option<String>,
    pub slop: Option<u32>,
    /// Number of terms the last word may expand to.
    pub max_expansions: Option<u32>,
    pub boost: Option<f32>,
}

/// Build a `match_phrase_prefix` query.
pub fn match_phrase_prefix<F, V>(
    field: F,
    query: V,
    init: impl FnOnce(&mut MatchPhrasePrefixData),
) -> MatchPhrasePrefixQuery
where
    F: Into<String>,
    V: Into<Value>,
{
    let mut params = MatchPhrasePrefixData::default();
    init(&mut params);

    let mut query = MatchPhrasePrefixQuery::new(field, query);
    if let Some(analyzer) = params.analyzer {
        query = query.with_analyzer(analyzer);
    }
    if let Some(slop) = params.slop {
        query = query.with_slop(slop);
    }
    if let Some(max_expansions) = params.max_expansions {
        query = query.with_max_expansions(max_expansions);
    }
    if let Some(boost) = params.boost {
        query.set_boost(boost);
    }
    query
}

/// Options of a `multi_match` query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiMatchData {
    /// How matches in the individual fields are combined (`type`).
    pub match_type: Option<MultiMatchType>,
    pub operator: Option<Operator>,
    pub analyzer: Option<String>,
    pub boost: Option<f32>,
    pub slop: Option<u32>,
    pub fuzziness: Option<Fuzziness>,
    pub prefix_length: Option<u32>,
    pub max_expansions: Option<u32>,
    pub minimum_should_match: Option<String>,
    pub fuzzy_rewrite: Option<String>,
    pub tie_breaker: Option<f32>,
    pub lenient: Option<bool>,
    pub cutoff_frequency: Option<f32>,
    pub zero_terms_query: Option<ZeroTermsQuery>,
}

/// Build a `multi_match` query over `fields`, each given as `name` or
/// `name^boost`.
///
/// Fails with [`QueryDslError::InvalidFieldBoost`](crate::error::QueryDslError::InvalidFieldBoost)
/// when a boost is not a number.
pub fn multi_match<V, I, S>(
    query: V,
    fields: I,
    init: impl FnOnce(&mut MultiMatchData),
) -> Result<MultiMatchQuery>
where
    V: Into<Value>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut params = MultiMatchData::default();
    init(&mut params);

    let fields = fields
        .into_iter()
        .map(|expr| expr.as_ref().parse::<FieldBoost>())
        .collect::<Result<Vec<_>>>()?;
    debug!("multi_match over {} field(s): {fields:?}", fields.len());

    let mut query = MultiMatchQuery::new(query)
        .with_fields(fields.into_iter().map(|fb| (fb.field, fb.boost)));
    if let Some(match_type) = params.match_type {
        query = query.with_type(match_type);
    }
    if let Some(operator) = params.operator {
        query = query.with_operator(operator);
    }
    if let Some(analyzer) = params.analyzer {
        query = query.with_analyzer(analyzer);
    }
    if let Some(boost) = params.boost {
        query.set_boost(boost);
    }
    if let Some(slop) = params.slop {
        query = query.with_slop(slop);
    }
    if let Some(fuzziness) = params.fuzziness {
        query = query.with_fuzziness(fuzziness);
    }
    if let Some(prefix_length) = params.prefix_length {
        query = query.with_prefix_length(prefix_length);
    }
    if let Some(max_expansions) = params.max_expansions {
        query = query.with_max_expansions(max_expansions);
    }
    if let Some(minimum_should_match) = params.minimum_should_match {
        query = query.with_minimum_should_match(minimum_should_match);
    }
    if let Some(fuzzy_rewrite) = params.fuzzy_rewrite {
        query = query.with_fuzzy_rewrite(fuzzy_rewrite);
    }
    if let Some(tie_breaker) = params.tie_breaker {
        query = query.with_tie_breaker(tie_breaker);
    }
    if let Some(lenient) = params.lenient {
        query = query.with_lenient(lenient);
    }
    if let Some(cutoff_frequency) = params.cutoff_frequency {
        query = query.with_cutoff_frequency(cutoff_frequency);
    }
    if let Some(zero_terms_query) = params.zero_terms_query {
        query = query.with_zero_terms_query(zero_terms_query);
    }
    Ok(query)
}

/// Separate `minimum_should_match` values for low- and high-frequency terms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MinimumShouldMatchData {
    pub low_freq: Option<String>,
    pub high_freq: Option<String>,
}

/// Options of a `common` terms query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommonData {
    pub high_freq_operator: Option<Operator>,
    pub low_freq_operator: Option<Operator>,
    pub analyzer: Option<String>,
    pub boost: Option<f32>,
    /// Document frequency above which a term counts as high frequency.
    pub cutoff_frequency: Option<f32>,
    pub minimum_should_match: MinimumShouldMatchData,
}

impl CommonData {
    /// Set the low-frequency `minimum_should_match`, the usual single form.
    pub fn minimum_should_match<S: ToString>(&mut self, value: S) -> &mut Self {
        self.minimum_should_match.low_freq = Some(value.to_string());
        self
    }
}

/// Build a `common` terms query.
pub fn common<F, V>(field: F, query: V, init: impl FnOnce(&mut CommonData)) -> CommonTermsQuery
where
    F: Into<String>,
    V: Into<Value>,
{
    let mut params = CommonData::default();
    init(&mut params);

    let mut query = CommonTermsQuery::new(field, query);
    if let Some(operator) = params.high_freq_operator {
        query = query.with_high_freq_operator(operator);
    }
    if let Some(operator) = params.low_freq_operator {
        query = query.with_low_freq_operator(operator);
    }
    if let Some(analyzer) = params.analyzer {
        query = query.with_analyzer(analyzer);
    }
    if let Some(boost) = params.boost {
        query.set_boost(boost);
    }
    if let Some(cutoff_frequency) = params.cutoff_frequency {
        query = query.with_cutoff_frequency(cutoff_frequency);
    }
    if let Some(low_freq) = params.minimum_should_match.low_freq {
        query = query.with_low_freq_minimum_should_match(low_freq);
    }
    if let Some(high_freq) = params.minimum_should_match.high_freq {
        query = query.with_high_freq_minimum_should_match(high_freq);
    }
    query
}
