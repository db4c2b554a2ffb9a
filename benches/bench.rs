//! Criterion benchmarks for building and rendering queries.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use query_dsl::dsl::*;
use query_dsl::query::{BoolQuery, Operator, Query};

/// Build a bool query with `clauses` filter clauses plus a scored match.
fn build_search_query(clauses: usize) -> BoolQuery {
    bool_query(|b| {
        b.must(match_query("title", "fast full text search", |m| {
            m.operator = Some(Operator::And);
            m.boost = Some(2.0);
        }));
        for i in 0..clauses {
            b.filter(term(format!("field_{i}"), i as u64, |_| {}));
        }
        b.should(range("published_at", |r| {
            r.gte("now-30d/d");
        }));
        b.minimum_should_match = Some(1);
    })
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    group.bench_function("bool_query_small", |b| {
        b.iter(|| black_box(build_search_query(black_box(4))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("bool_query_100_filters", |b| {
        b.iter(|| black_box(build_search_query(black_box(100))))
    });

    group.bench_function("multi_match_field_boosts", |b| {
        let fields = ["title^3", "subtitle^2", "body", "tags^1.5"];
        b.iter(|| black_box(multi_match("rust", black_box(fields), |_| {})))
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let query = build_search_query(100);

    group.throughput(Throughput::Elements(100));
    group.bench_function("to_json", |b| b.iter(|| black_box(query.to_json())));
    group.bench_function("json_text", |b| b.iter(|| black_box(query.json())));

    group.finish();
}

criterion_group!(benches, bench_build, bench_render);
criterion_main!(benches);
