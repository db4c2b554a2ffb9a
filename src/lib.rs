//! # query-dsl
//!
//! Builders for search-engine query trees in the engine's JSON query DSL.
//!
//! ## Features
//!
//! - Typed query and aggregation object model with engine defaults
//! - Configuration-record builders (`dsl`) that only touch what you set
//! - Boolean, full-text, term-level, joining and scoring queries
//! - Nested, terms and metric aggregations
//! - A `query-dsl` command line tool printing rendered queries

pub mod aggregation;
pub mod cli;
pub mod dsl;
pub mod error;
pub mod query;

pub mod prelude {
    pub use crate::aggregation::{Aggregation, MetricKind};
    pub use crate::dsl::*;
    pub use crate::error::{QueryDslError, Result};
    pub use crate::query::{
        Fuzziness, InnerHits, MultiMatchType, Operator, Query, ScoreFunction, ScoreMode,
        ZeroTermsQuery,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
