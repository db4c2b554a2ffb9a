//! Command implementations for the query-dsl CLI.

use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::Value;

use crate::cli::args::*;
use crate::cli::output::output_result;
use crate::dsl::{self, StringPattern};
use crate::error::QueryDslError;
use crate::query::{Query, TermQuery};

/// Execute a CLI command.
pub fn execute_command(args: QueryDslArgs) -> Result<()> {
    let query = build_query(&args.command)?;
    info!("built {} query", query.kind());
    output_result(query.as_ref(), &args).context("failed to write query")?;
    Ok(())
}

/// Build the query described by a command.
pub fn build_query(command: &Command) -> Result<Box<dyn Query>> {
    let query: Box<dyn Query> = match command {
        Command::Match(args) => Box::new(build_match(args)),
        Command::MultiMatch(args) => Box::new(build_multi_match(args)?),
        Command::Term(args) => Box::new(build_term(args)),
        Command::Range(args) => Box::new(build_range(args)),
        Command::String(args) => Box::new(build_string(args)),
        Command::Bool(args) => Box::new(build_bool(args)?),
    };
    Ok(query)
}

fn build_match(args: &MatchArgs) -> crate::query::MatchQuery {
    dsl::match_query(args.field.as_str(), args.query.as_str(), |m| {
        m.operator = args.operator;
        m.fuzziness = args.fuzziness;
        m.analyzer = args.analyzer.clone();
        m.minimum_should_match = args.minimum_should_match.clone();
        m.zero_terms_query = args.zero_terms_query;
        m.boost = args.boost;
    })
}

fn build_multi_match(args: &MultiMatchArgs) -> Result<crate::query::MultiMatchQuery> {
    let query = dsl::multi_match(args.query.as_str(), &args.fields, |m| {
        m.match_type = args.match_type;
        m.operator = args.operator;
        m.tie_breaker = args.tie_breaker;
        m.boost = args.boost;
    })
    .with_context(|| format!("invalid --field in {:?}", args.fields))?;
    Ok(query)
}

fn build_term(args: &TermArgs) -> TermQuery {
    dsl::term(args.field.as_str(), parse_value(&args.value), |t| {
        t.boost = args.boost;
        t.query_name = args.name.clone();
    })
}

fn build_range(args: &RangeArgs) -> crate::query::RangeQuery {
    dsl::range(args.field.as_str(), |r| {
        if let Some(gt) = &args.gt {
            r.gt(parse_value(gt));
        }
        if let Some(gte) = &args.gte {
            r.gte(parse_value(gte));
        }
        if let Some(lt) = &args.lt {
            r.lt(parse_value(lt));
        }
        if let Some(lte) = &args.lte {
            r.lte(parse_value(lte));
        }
        r.format = args.format.clone();
        r.time_zone = args.time_zone.clone();
        r.boost = args.boost;
    })
}

fn build_string(args: &StringArgs) -> crate::query::QueryStringQuery {
    let text = args.text.clone();
    let pattern = match args.pattern {
        PatternKind::StartsWith => StringPattern::StartsWith(text),
        PatternKind::EndsWith => StringPattern::EndsWith(text),
        PatternKind::Equals => StringPattern::EqualsTo(text),
        PatternKind::Contains => StringPattern::Contains(text),
    };
    dsl::query_string(args.field.as_str(), pattern, |s| {
        if let Some(operator) = args.default_operator {
            s.default_operator = operator;
        }
    })
}

fn build_bool(args: &BoolArgs) -> Result<crate::query::BoolQuery> {
    let must = parse_clauses(&args.must).context("invalid --must clause")?;
    let filter = parse_clauses(&args.filter).context("invalid --filter clause")?;
    let should = parse_clauses(&args.should).context("invalid --should clause")?;
    let must_not = parse_clauses(&args.must_not).context("invalid --must-not clause")?;

    Ok(dsl::bool_query(|b| {
        b.must.extend(must);
        b.filter.extend(filter);
        b.should.extend(should);
        b.must_not.extend(must_not);
        b.minimum_should_match = args.minimum_should_match;
        b.boost = args.boost;
    }))
}

fn parse_clauses(clauses: &[String]) -> crate::error::Result<Vec<Box<dyn Query>>> {
    clauses
        .iter()
        .map(|clause| parse_term_clause(clause).map(|q| Box::new(q) as Box<dyn Query>))
        .collect()
}

/// Parse a `field:value` clause into a term query. Only the first `:`
/// separates the field, so values may contain colons.
pub fn parse_term_clause(clause: &str) -> crate::error::Result<TermQuery> {
    let (field, value) = clause.split_once(':').ok_or_else(|| {
        QueryDslError::invalid_argument(format!("expected field:value, got {clause:?}"))
    })?;
    if field.is_empty() {
        return Err(QueryDslError::invalid_argument(format!(
            "missing field name in {clause:?}"
        )));
    }
    debug!("clause {clause:?} -> term {field}={value:?}");
    Ok(dsl::term(field, parse_value(value), |_| {}))
}

/// Interpret a command line value: JSON numbers and booleans keep their
/// type, anything else is a string.
pub fn parse_value(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ (Value::Number(_) | Value::Bool(_))) => value,
        _ => Value::from(raw),
    }
}
