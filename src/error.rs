//! Error types for the query DSL.
//!
//! Most builders cannot fail: required values are taken as arguments and every
//! option is typed. The few places that parse caller text (field boost
//! expressions, option names) or validate combinations of values report a
//! [`QueryDslError`].
//!
//! # Examples
//!
//! ```
//! use query_dsl::error::{QueryDslError, Result};
//!
//! fn check(min: u32, max: u32) -> Result<()> {
//!     if min > max {
//!         return Err(QueryDslError::invalid_argument("min must not exceed max"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(1, 2).is_ok());
//! assert!(check(3, 2).is_err());
//! ```

use thiserror::Error;

/// The main error type for query DSL operations.
#[derive(Error, Debug)]
pub enum QueryDslError {
    /// An option string that does not name a known variant.
    #[error("Invalid {kind} option: {value:?}")]
    InvalidOption {
        /// The option being parsed (`operator`, `zero_terms_query`, ...).
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// A `field^boost` expression whose boost is not a number.
    #[error("Invalid field boost: {0}")]
    InvalidFieldBoost(String),

    /// A value the query cannot be built without.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A value outside the range the query accepts.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with QueryDslError.
pub type Result<T> = std::result::Result<T, QueryDslError>;

impl QueryDslError {
    /// Create a new invalid option error.
    pub fn invalid_option<S: Into<String>>(kind: &'static str, value: S) -> Self {
        QueryDslError::InvalidOption {
            kind,
            value: value.into(),
        }
    }

    /// Create a new invalid field boost error.
    pub fn invalid_field_boost<S: Into<String>>(expr: S) -> Self {
        QueryDslError::InvalidFieldBoost(expr.into())
    }

    /// Create a new missing field error.
    pub fn missing_field<S: Into<String>>(msg: S) -> Self {
        QueryDslError::MissingField(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        QueryDslError::InvalidArgument(msg.into())
    }
}
