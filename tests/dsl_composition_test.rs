//! Integration tests composing queries through the builder functions.

use query_dsl::prelude::*;
use query_dsl::query::{BoolQuery, FieldValueFactorFunction, FunctionScoreMode, Occur};
use serde_json::json;

#[test]
fn test_search_page_query() -> Result<()> {
    let query = bool_query(|b| {
        b.must(multi_match("rust search engine", ["title^3", "body"], |m| {
            m.match_type = Some(MultiMatchType::BestFields);
            m.operator = Some(Operator::And);
        })
        .expect("valid field boosts"));
        b.filter(term("status", "published", |_| {}));
        b.filter(range("published_at", |r| {
            r.gte("now-1y/d");
        }));
        b.must_not(terms("tags", ["spam", "nsfw"], |_| {}));
        b.should(match_phrase("body", "zero cost abstractions", |p| p.slop = Some(2)));
        b.minimum_should_match = Some(0);
    });

    assert_eq!(query.clauses().len(), 5);
    assert_eq!(query.clauses_by_occur(Occur::Filter).len(), 2);

    let json = query.to_json();
    let body = &json["bool"];
    assert_eq!(body["must"][0]["multi_match"]["fields"], json!(["body^1.0", "title^3.0"]));
    assert_eq!(body["must"][0]["multi_match"]["operator"], json!("AND"));
    assert_eq!(
        body["filter"][0],
        json!({"term": {"status": {"value": "published", "boost": 1.0}}})
    );
    assert_eq!(body["filter"][1]["range"]["published_at"]["from"], json!("now-1y/d"));
    assert_eq!(body["filter"][1]["range"]["published_at"]["to"], json!(null));
    assert_eq!(
        body["must_not"][0],
        json!({"terms": {"tags": ["spam", "nsfw"], "boost": 1.0}})
    );
    assert_eq!(body["should"][0]["match_phrase"]["body"]["slop"], json!(2));
    assert_eq!(body["minimum_should_match"], json!("0"));
    assert_eq!(body["adjust_pure_negative"], json!(true));

    let text = query.json_pretty()?;
    assert!(text.starts_with("{\n  \"bool\""));
    Ok(())
}

#[test]
fn test_term_boost_only() {
    let query = term("status", "active", |t| t.boost = Some(2.0));

    assert_eq!(
        query.to_json(),
        json!({"term": {"status": {"value": "active", "boost": 2.0}}})
    );
}

#[test]
fn test_bool_must_and_should_only() {
    let query = bool_query(|b| {
        b.must(term("user", "kimchy", |_| {}));
        b.should(term("tag", "tech", |_| {}));
    });

    assert_eq!(
        query.to_json(),
        json!({"bool": {
            "must": [{"term": {"user": {"value": "kimchy", "boost": 1.0}}}],
            "should": [{"term": {"tag": {"value": "tech", "boost": 1.0}}}],
            "adjust_pure_negative": true,
            "boost": 1.0
        }})
    );
}

#[test]
fn test_nested_bool_inside_nested_query() -> Result<()> {
    let inner = bool_query(|b| {
        b.must(match_query("comments.author", "alice", |_| {}));
        b.must(range("comments.stars", |r| {
            r.gt(3);
        }));
    });
    let query = nested("comments", inner, |n| {
        n.score_mode = ScoreMode::Max;
        n.inner_hits = Some(InnerHits {
            size: Some(2),
            ..InnerHits::new()
        });
    });

    let json = query.to_json();
    assert_eq!(json["nested"]["path"], json!("comments"));
    assert_eq!(json["nested"]["score_mode"], json!("max"));
    assert_eq!(json["nested"]["inner_hits"], json!({"size": 2}));

    let inner = query
        .query()
        .as_any()
        .downcast_ref::<BoolQuery>()
        .expect("inner bool query");
    assert_eq!(inner.clauses_by_occur(Occur::Must).len(), 2);
    Ok(())
}

#[test]
fn test_has_child_rejects_inverted_bounds() {
    let result = has_child("answer", match_all(|_| {}), |h| {
        h.min_children = 3;
        h.max_children = 2;
    });

    assert!(matches!(result, Err(QueryDslError::InvalidArgument(_))));
}

#[test]
fn test_function_score_popularity() {
    let query = function_score(|f| {
        f.query(match_query("title", "rust", |_| {}));
        f.filtered_function(term("featured", true, |_| {}), ScoreFunction::Weight(2.0));
        f.field_value_factor = Some(FieldValueFactorFunction::new("votes").with_missing(1.0));
        f.score_mode = Some(FunctionScoreMode::Sum);
    });

    let json = query.to_json();
    let functions = &json["function_score"]["functions"];
    assert_eq!(
        functions[0],
        json!({"field_value_factor": {"field": "votes", "factor": 1.0, "modifier": "none", "missing": 1.0}})
    );
    assert_eq!(
        functions[1],
        json!({
            "filter": {"term": {"featured": {"value": true, "boost": 1.0}}},
            "weight": 2.0
        })
    );
    assert_eq!(json["function_score"]["score_mode"], json!("sum"));
    assert_eq!(json["function_score"]["boost_mode"], json!("multiply"));
}

#[test]
fn test_nested_aggregation_with_terms() {
    let agg = nested_aggregation("resellers", "resellers", |n| {
        n.sub_aggregation(terms_aggregation("by_name", "resellers.name", |t| {
            t.size = Some(5);
            t.sub_aggregations.push(Box::new(metric_aggregation(
                MetricKind::Min,
                "min_price",
                "resellers.price",
            )));
        }));
    });

    assert_eq!(
        agg.to_json(),
        json!({"resellers": {
            "nested": {"path": "resellers"},
            "aggregations": {
                "by_name": {
                    "terms": {"field": "resellers.name", "size": 5, "min_doc_count": 1},
                    "aggregations": {"min_price": {"min": {"field": "resellers.price"}}}
                }
            }
        }})
    );
}

#[test]
fn test_field_boost_parsing() {
    let title: FieldBoost = "title^2".parse().unwrap();
    assert_eq!((title.field.as_str(), title.boost), ("title", 2.0));

    let body: FieldBoost = "body".parse().unwrap();
    assert_eq!((body.field.as_str(), body.boost), ("body", 1.0));

    let err = multi_match("x", ["title^two"], |_| {}).unwrap_err();
    assert!(matches!(err, QueryDslError::InvalidFieldBoost(_)));
}

#[test]
fn test_query_string_patterns() {
    let starts = query_string("name", StringPattern::StartsWith("jo".into()), |_| {});
    let ends = query_string("name", StringPattern::EndsWith("hn".into()), |_| {});

    assert_eq!(starts.to_json()["query_string"]["query"], json!("jo*"));
    assert_eq!(ends.to_json()["query_string"]["query"], json!("*hn"));
    assert_eq!(
        starts.to_json()["query_string"]["fields"],
        json!(["name"])
    );
}
