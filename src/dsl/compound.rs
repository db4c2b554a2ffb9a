//! Compound builders: queries wrapping other queries.

use log::{debug, warn};

use crate::query::{
    BoolClause, BoolQuery, BoostingQuery, CombineFunction, ConstantScoreQuery,
    FieldValueFactorFunction, FilterFunction, FunctionScoreMode, FunctionScoreQuery,
    MatchAllQuery, Occur, Query, ScoreFunction,
};

/// Clauses and options of a `bool` query.
#[derive(Debug, Clone, Default)]
pub struct BoolData {
    /// Clauses that must match and score.
    pub must: Vec<Box<dyn Query>>,
    /// Clauses that must match without scoring.
    pub filter: Vec<Box<dyn Query>>,
    /// Clauses that must not match.
    pub must_not: Vec<Box<dyn Query>>,
    /// Clauses that add to the score when they match.
    pub should: Vec<Box<dyn Query>>,
    pub minimum_should_match: Option<i32>,
    pub boost: Option<f32>,
}

impl BoolData {
    /// Append a `must` clause.
    pub fn must<Q: Query + 'static>(&mut self, query: Q) -> &mut Self {
        self.must.push(Box::new(query));
        self
    }

    /// Append a `filter` clause.
    pub fn filter<Q: Query + 'static>(&mut self, query: Q) -> &mut Self {
        self.filter.push(Box::new(query));
        self
    }

    /// Append a `must_not` clause.
    pub fn must_not<Q: Query + 'static>(&mut self, query: Q) -> &mut Self {
        self.must_not.push(Box::new(query));
        self
    }

    /// Append a `should` clause.
    pub fn should<Q: Query + 'static>(&mut self, query: Q) -> &mut Self {
        self.should.push(Box::new(query));
        self
    }
}

/// Build a `bool` query.
pub fn bool_query(init: impl FnOnce(&mut BoolData)) -> BoolQuery {
    let mut params = BoolData::default();
    init(&mut params);

    debug!(
        "bool query: {} must, {} filter, {} must_not, {} should",
        params.must.len(),
        params.filter.len(),
        params.must_not.len(),
        params.should.len()
    );

    let has_should = !params.should.is_empty();
    let mut query = BoolQuery::new();
    let roles = [
        (params.must, Occur::Must),
        (params.filter, Occur::Filter),
        (params.must_not, Occur::MustNot),
        (params.should, Occur::Should),
    ];
    for (clauses, occur) in roles {
        for clause in clauses {
            query.add_clause(BoolClause::new(clause, occur));
        }
    }

    if let Some(minimum_should_match) = params.minimum_should_match {
        if !has_should {
            warn!("bool query sets minimum_should_match={minimum_should_match} without should clauses");
        }
        query = query.with_minimum_should_match(minimum_should_match.to_string());
    }
    if let Some(boost) = params.boost {
        query.set_boost(boost);
    }
    query
}

/// Options of a `constant_score` query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstantScoreData {
    /// Score given to every match.
    pub boost: Option<f32>,
}

/// Build a `constant_score` query around `filter`.
pub fn constant_score<Q: Query + 'static>(
    filter: Q,
    init: impl FnOnce(&mut ConstantScoreData),
) -> ConstantScoreQuery {
    let mut params = ConstantScoreData::default();
    init(&mut params);

    let mut query = ConstantScoreQuery::new(Box::new(filter));
    if let Some(boost) = params.boost {
        query.set_boost(boost);
    }
    query
}

/// Options of a `boosting` query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoostingData {
    /// Factor applied to the score of documents matching the negative query.
    pub negative_boost: Option<f32>,
}

/// Build a `boosting` query.
pub fn boosting<P, N>(positive: P, negative: N, init: impl FnOnce(&mut BoostingData)) -> BoostingQuery
where
    P: Query + 'static,
    N: Query + 'static,
{
    let mut params = BoostingData::default();
    init(&mut params);

    let mut query = BoostingQuery::new(Box::new(positive), Box::new(negative));
    if let Some(negative_boost) = params.negative_boost {
        query = query.with_negative_boost(negative_boost);
    }
    query
}

/// The wrapped query, score functions and options of a `function_score`
/// query.
#[derive(Debug, Clone)]
pub struct FunctionScoreData {
    /// Query whose matches are rescored. Defaults to `match_all`.
    pub query: Box<dyn Query>,
    pub boost: Option<f32>,
    /// Score functions, each optionally restricted by a filter.
    pub functions: Vec<(Option<Box<dyn Query>>, ScoreFunction)>,
    /// Applied to every document, ahead of `functions`.
    pub field_value_factor: Option<FieldValueFactorFunction>,
    pub max_boost: Option<f32>,
    pub score_mode: Option<FunctionScoreMode>,
    pub boost_mode: Option<CombineFunction>,
    pub min_score: Option<f32>,
}

impl Default for FunctionScoreData {
    fn default() -> Self {
        FunctionScoreData {
            query: Box::new(MatchAllQuery::new()),
            boost: None,
            functions: Vec::new(),
            field_value_factor: None,
            max_boost: None,
            score_mode: None,
            boost_mode: None,
            min_score: None,
        }
    }
}

impl FunctionScoreData {
    /// Replace the wrapped query.
    pub fn query<Q: Query + 'static>(&mut self, query: Q) -> &mut Self {
        self.query = Box::new(query);
        self
    }

    /// Append a function applied to every document.
    pub fn function(&mut self, function: ScoreFunction) -> &mut Self {
        self.functions.push((None, function));
        self
    }

    /// Append a function applied to documents matching `filter`.
    pub fn filtered_function<Q: Query + 'static>(
        &mut self,
        filter: Q,
        function: ScoreFunction,
    ) -> &mut Self {
        self.functions.push((Some(Box::new(filter)), function));
        self
    }
}

/// Build a `function_score` query.
pub fn function_score(init: impl FnOnce(&mut FunctionScoreData)) -> FunctionScoreQuery {
    let mut params = FunctionScoreData::default();
    init(&mut params);

    let leading = params
        .field_value_factor
        .map(|factor| (None, ScoreFunction::from(factor)));
    let functions: Vec<FilterFunction> = leading
        .into_iter()
        .chain(params.functions)
        .map(|(filter, function)| match filter {
            Some(filter) => FilterFunction::with_filter(filter, function),
            None => FilterFunction::new(function),
        })
        .collect();

    let mut query = FunctionScoreQuery::new(params.query, functions);
    if let Some(boost) = params.boost {
        query.set_boost(boost);
    }
    if let Some(max_boost) = params.max_boost {
        query = query.with_max_boost(max_boost);
    }
    if let Some(score_mode) = params.score_mode {
        query = query.with_score_mode(score_mode);
    }
    if let Some(boost_mode) = params.boost_mode {
        query = query.with_boost_mode(boost_mode);
    }
    if let Some(min_score) = params.min_score {
        query = query.with_min_score(min_score);
    }
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::term_level::{match_all, range, term};
    use crate::query::{FieldValueFactorModifier, TermQuery};
    use serde_json::json;

    #[test]
    fn test_bool_with_must_and_should() {
        let query = bool_query(|b| {
            b.must(term("user", "kimchy", |_| {}));
            b.should(term("tag", "rust", |_| {}));
        });

        assert_eq!(query.clauses().len(), 2);
        assert_eq!(query.clauses_by_occur(Occur::Must).len(), 1);
        assert_eq!(query.clauses_by_occur(Occur::Should).len(), 1);
        assert!(query.clauses_by_occur(Occur::Filter).is_empty());
        assert!(query.clauses_by_occur(Occur::MustNot).is_empty());
        assert_eq!(query.minimum_should_match(), None);
        assert_eq!(query.boost(), 1.0);
    }

    #[test]
    fn test_bool_keeps_insertion_order_within_role() {
        let query = bool_query(|b| {
            b.filter(term("a", 1, |_| {})).filter(term("b", 2, |_| {}));
            b.minimum_should_match = Some(1);
            b.boost = Some(1.5);
        });

        let filters = query.clauses_by_occur(Occur::Filter);
        assert_eq!(filters[0].query.field(), Some("a"));
        assert_eq!(filters[1].query.field(), Some("b"));
        assert_eq!(query.minimum_should_match(), Some("1"));
        assert_eq!(query.boost(), 1.5);
    }

    #[test]
    fn test_bool_accepts_boxed_clauses() {
        let query = bool_query(|b| {
            b.must_not.push(Box::new(range("age", |r| {
                r.lt(18);
            })));
        });

        let excluded = query.clauses_by_occur(Occur::MustNot);
        assert_eq!(excluded.len(), 1);
        assert_eq!(excluded[0].query.kind(), "range");
    }

    #[test]
    fn test_constant_score() {
        let query = constant_score(term("user", "kimchy", |_| {}), |c| c.boost = Some(1.2));

        assert_eq!(query.boost(), 1.2);
        assert_eq!(query.filter().kind(), "term");
    }

    #[test]
    fn test_boosting() {
        let query = boosting(
            term("text", "apple", |_| {}),
            term("text", "pie tart fruit crumble tree", |_| {}),
            |b| b.negative_boost = Some(0.5),
        );

        assert_eq!(query.negative_boost(), Some(0.5));
        assert_eq!(query.positive().field(), Some("text"));
    }

    #[test]
    fn test_function_score_defaults_to_match_all() {
        let query = function_score(|_| {});

        assert_eq!(query.query().kind(), "match_all");
        assert!(query.functions().is_empty());
        assert_eq!(query.score_mode(), FunctionScoreMode::Multiply);
        assert_eq!(query.boost_mode(), CombineFunction::Multiply);
        assert_eq!(query.max_boost(), f32::MAX);
        assert_eq!(query.min_score(), None);
    }

    #[test]
    fn test_function_score_field_value_factor_comes_first() {
        let query = function_score(|f| {
            f.query(term("user", "kimchy", |_| {}));
            f.filtered_function(match_all(|_| {}), ScoreFunction::Weight(23.0));
            f.function(ScoreFunction::RandomScore {
                seed: Some(42),
                field: None,
            });
            f.field_value_factor = Some(
                FieldValueFactorFunction::new("likes")
                    .with_factor(1.2)
                    .with_modifier(FieldValueFactorModifier::Sqrt),
            );
            f.score_mode = Some(FunctionScoreMode::Max);
            f.boost_mode = Some(CombineFunction::Replace);
            f.max_boost = Some(42.0);
            f.min_score = Some(2.0);
            f.boost = Some(5.0);
        });

        let functions = query.functions();
        assert_eq!(functions.len(), 3);
        assert!(matches!(
            functions[0].function(),
            ScoreFunction::FieldValueFactor(_)
        ));
        assert!(functions[0].filter().is_none());
        assert_eq!(functions[1].function(), &ScoreFunction::Weight(23.0));
        assert!(functions[1].filter().is_some());
        assert!(functions[2].filter().is_none());

        assert!(query.query().as_any().downcast_ref::<TermQuery>().is_some());
        assert_eq!(query.score_mode(), FunctionScoreMode::Max);
        assert_eq!(query.boost_mode(), CombineFunction::Replace);
        assert_eq!(query.max_boost(), 42.0);
        assert_eq!(query.min_score(), Some(2.0));
        assert_eq!(query.boost(), 5.0);

        let json = query.to_json();
        assert_eq!(
            json["function_score"]["functions"][0],
            json!({"field_value_factor": {"field": "likes", "factor": 1.2, "modifier": "sqrt"}})
        );
        assert_eq!(json["function_score"]["functions"][2], json!({"random_score": {"seed": 42}}));
    }
}
