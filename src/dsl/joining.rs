//! Joining builders: nested documents and parent/child relations.

use crate::error::Result;
use crate::query::join::{DEFAULT_MAX_CHILDREN, DEFAULT_MIN_CHILDREN};
use crate::query::{HasChildQuery, InnerHits, NestedQuery, Query, ScoreMode};

/// Options of a `nested` query.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedData {
    /// Defaults to [`ScoreMode::Avg`].
    pub score_mode: ScoreMode,
    pub boost: Option<f32>,
    pub inner_hits: Option<InnerHits>,
}

impl Default for NestedData {
    fn default() -> Self {
        NestedData {
            score_mode: ScoreMode::Avg,
            boost: None,
            inner_hits: None,
        }
    }
}

/// Build a `nested` query running `query` against the objects at `path`.
pub fn nested<P, Q>(path: P, query: Q, init: impl FnOnce(&mut NestedData)) -> NestedQuery
where
    P: Into<String>,
    Q: Query + 'static,
{
    let mut params = NestedData::default();
    init(&mut params);

    let mut nested = NestedQuery::new(path, Box::new(query), params.score_mode);
    if let Some(boost) = params.boost {
        nested.set_boost(boost);
    }
    if let Some(inner_hits) = params.inner_hits {
        nested = nested.with_inner_hits(inner_hits);
    }
    nested
}

/// Options of a `has_child` query.
#[derive(Debug, Clone, PartialEq)]
pub struct HasChildData {
    /// Defaults to [`ScoreMode::None`].
    pub score_mode: ScoreMode,
    pub boost: Option<f32>,
    pub min_children: u32,
    pub max_children: u32,
    pub inner_hits: Option<InnerHits>,
}

impl Default for HasChildData {
    fn default() -> Self {
        HasChildData {
            score_mode: ScoreMode::None,
            boost: None,
            min_children: DEFAULT_MIN_CHILDREN,
            max_children: DEFAULT_MAX_CHILDREN,
            inner_hits: None,
        }
    }
}

/// Build a `has_child` query matching parents whose `child_type` children
/// match `query`.
///
/// Fails with [`QueryDslError::InvalidArgument`](crate::error::QueryDslError::InvalidArgument)
/// when `min_children` exceeds `max_children`.
pub fn has_child<T, Q>(
    child_type: T,
    query: Q,
    init: impl FnOnce(&mut HasChildData),
) -> Result<HasChildQuery>
where
    T: Into<String>,
    Q: Query + 'static,
{
    let mut params = HasChildData::default();
    init(&mut params);

    let mut has_child = HasChildQuery::new(child_type, Box::new(query), params.score_mode)
        .with_min_max_children(params.min_children, params.max_children)?;
    if let Some(boost) = params.boost {
        has_child.set_boost(boost);
    }
    if let Some(inner_hits) = params.inner_hits {
        has_child = has_child.with_inner_hits(inner_hits);
    }
    Ok(has_child)
}
