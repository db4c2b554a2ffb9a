//! Command line argument parsing for the query-dsl CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};

use crate::query::{Fuzziness, MultiMatchType, Operator, ZeroTermsQuery};

/// query-dsl - Build search engine queries from the command line
#[derive(Parser, Debug, Clone)]
#[command(name = "query-dsl")]
#[command(about = "Build search engine JSON queries from the command line")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct QueryDslArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "json")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, env = "QUERY_DSL_PRETTY")]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl QueryDslArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a match query
    Match(MatchArgs),

    /// Build a multi_match query
    #[command(name = "multi-match")]
    MultiMatch(MultiMatchArgs),

    /// Build a term query
    Term(TermArgs),

    /// Build a range query
    Range(RangeArgs),

    /// Build a query_string query matching a pattern in one field
    String(StringArgs),

    /// Build a bool query from field:value term clauses
    Bool(BoolArgs),
}

/// Arguments for a match query
#[derive(Parser, Debug, Clone)]
pub struct MatchArgs {
    /// Field to search
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Text to analyze and match
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Operator between analyzed terms (and, or)
    #[arg(long)]
    pub operator: Option<Operator>,

    /// Fuzziness (AUTO, AUTO:low,high, 0, 1, 2)
    #[arg(long)]
    pub fuzziness: Option<Fuzziness>,

    /// Analyzer to use for the query text
    #[arg(long)]
    pub analyzer: Option<String>,

    /// Minimum number or percentage of terms that must match
    #[arg(long)]
    pub minimum_should_match: Option<String>,

    /// What to match when analysis removes every term (none, all)
    #[arg(long)]
    pub zero_terms_query: Option<ZeroTermsQuery>,

    /// Query boost
    #[arg(long)]
    pub boost: Option<f32>,
}

/// Arguments for a multi_match query
#[derive(Parser, Debug, Clone)]
pub struct MultiMatchArgs {
    /// Text to analyze and match
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Fields to search, optionally boosted (title^2)
    #[arg(long = "field", value_name = "FIELD", required = true)]
    pub fields: Vec<String>,

    /// Execution type (best_fields, most_fields, cross_fields, phrase, phrase_prefix)
    #[arg(long = "type")]
    pub match_type: Option<MultiMatchType>,

    /// Operator between analyzed terms (and, or)
    #[arg(long)]
    pub operator: Option<Operator>,

    /// Weight of non-best fields in the score
    #[arg(long)]
    pub tie_breaker: Option<f32>,

    /// Query boost
    #[arg(long)]
    pub boost: Option<f32>,
}

/// Arguments for a term query
#[derive(Parser, Debug, Clone)]
pub struct TermArgs {
    /// Field to match
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Exact value (JSON numbers and booleans are kept as such)
    #[arg(value_name = "VALUE")]
    pub value: String,

    /// Query boost
    #[arg(long)]
    pub boost: Option<f32>,

    /// Query name reported with matches
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments for a range query
#[derive(Parser, Debug, Clone)]
pub struct RangeArgs {
    /// Field to bound
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Greater than
    #[arg(long, conflicts_with = "gte")]
    pub gt: Option<String>,

    /// Greater than or equal
    #[arg(long)]
    pub gte: Option<String>,

    /// Less than
    #[arg(long, conflicts_with = "lte")]
    pub lt: Option<String>,

    /// Less than or equal
    #[arg(long)]
    pub lte: Option<String>,

    /// Date format of the bounds
    #[arg(long)]
    pub format: Option<String>,

    /// Time zone of date bounds
    #[arg(long)]
    pub time_zone: Option<String>,

    /// Query boost
    #[arg(long)]
    pub boost: Option<f32>,
}

/// Arguments for a query_string pattern query
#[derive(Parser, Debug, Clone)]
pub struct StringArgs {
    /// Field to search
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Search text
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// How the text is anchored in the field
    #[arg(long, default_value = "equals")]
    pub pattern: PatternKind,

    /// Default operator (and, or)
    #[arg(long)]
    pub default_operator: Option<Operator>,
}

/// Arguments for a bool query
#[derive(Parser, Debug, Clone)]
pub struct BoolArgs {
    /// Clause that must match (field:value)
    #[arg(long, value_name = "FIELD:VALUE")]
    pub must: Vec<String>,

    /// Clause that must match without scoring (field:value)
    #[arg(long, value_name = "FIELD:VALUE")]
    pub filter: Vec<String>,

    /// Clause that should match (field:value)
    #[arg(long, value_name = "FIELD:VALUE")]
    pub should: Vec<String>,

    /// Clause that must not match (field:value)
    #[arg(long, value_name = "FIELD:VALUE")]
    pub must_not: Vec<String>,

    /// Minimum number of should clauses that must match
    #[arg(long)]
    pub minimum_should_match: Option<i32>,

    /// Query boost
    #[arg(long)]
    pub boost: Option<f32>,
}

/// Anchoring of the text of a `string` command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// text*
    StartsWith,
    /// *text
    EndsWith,
    /// text
    Equals,
    /// *text*
    Contains,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}
