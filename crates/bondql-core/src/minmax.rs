//! Module: minmax
//! Responsibility: pinned-value queries around an externally computed
//! field extremum.
//! Does not own: the aggregation itself, which the search backend runs.
//! Boundary: `MinMaxSource` is the single blocking call the compiler makes.

use crate::{
    error::QueryError,
    model::{BondOperator, Extremum, Queryable, ValueKind},
    query::{BoolQuery, Query},
    translate::range_query,
};
use std::error::Error as StdError;

///
/// MinMaxSource
///
/// Backend capability computing the minimum or maximum of `field` over
/// the documents matched by `scope`.
///

pub trait MinMaxSource {
    type Error: StdError + Send + Sync + 'static;

    fn find_min_max_value(&self, scope: &Query, field: &str, max: bool)
    -> Result<f64, Self::Error>;
}

/// Query pinning `field` to its extremum within `scope`.
///
/// The lookup runs over `scope` (every document when absent). The result is
/// `must(scope, field == extremum)`, or the pinned clause alone without a
/// scope. Date extrema are truncated to whole timestamps.
pub fn min_max_value_query<M>(
    source: &M,
    scope: Option<Query>,
    field: &str,
    extremum: Extremum,
    is_date: bool,
) -> Result<Query, QueryError>
where
    M: MinMaxSource + ?Sized,
{
    let value = lookup(source, scope.as_ref().unwrap_or(&Query::MatchAll), field, extremum)?;
    let literal = extremum_literal(field, value, is_date)?;

    tracing::trace!(field, ?extremum, value, %literal, "pinning discovered extremum");

    let kind = if is_date {
        ValueKind::Date
    } else {
        ValueKind::Double
    };
    let pinned = range_query(
        &Queryable::new(field.to_string(), kind),
        BondOperator::Equal,
        &literal,
    )?;

    Ok(match scope {
        Some(scope) => BoolQuery::new().must(scope).must(pinned).into_query(),
        None => pinned,
    })
}

/// Query pinning the resource timestamp to its extremum.
///
/// With `source_id` the lookup is limited to that source.
pub fn resource_time_stamp_query<M>(
    source: &M,
    source_id: Option<&str>,
    extremum: Extremum,
) -> Result<Query, QueryError>
where
    M: MinMaxSource + ?Sized,
{
    let scope = match source_id {
        Some(id) => Query::match_phrase(Queryable::SOURCE_ID.name(), id),
        None => Query::match_all(),
    };

    min_max_value_query(
        source,
        Some(scope),
        Queryable::RESOURCE_TIME_STAMP.name(),
        extremum,
        true,
    )
}

#[tracing::instrument(level = "debug", skip(source, scope))]
fn lookup<M>(source: &M, scope: &Query, field: &str, extremum: Extremum) -> Result<f64, QueryError>
where
    M: MinMaxSource + ?Sized,
{
    let value = source
        .find_min_max_value(scope, field, extremum.is_max())
        .map_err(|err| QueryError::min_max_lookup(field, err))?;

    if !value.is_finite() {
        return Err(QueryError::NonFiniteExtremum {
            field: field.to_string(),
            value,
        });
    }

    Ok(value)
}

// 2^63; every truncated date must lie in `[-2^63, 2^63)`.
const TIMESTAMP_BOUND: f64 = 9_223_372_036_854_775_808.0;

// Shortest text that round-trips the value; dates are stored as integers.
fn extremum_literal(field: &str, value: f64, is_date: bool) -> Result<String, QueryError> {
    if !is_date {
        return Ok(value.to_string());
    }

    let whole = value.trunc();
    if !(-TIMESTAMP_BOUND..TIMESTAMP_BOUND).contains(&whole) {
        return Err(QueryError::ExtremumOutOfRange {
            field: field.to_string(),
            value,
        });
    }

    #[expect(clippy::cast_possible_truncation)]
    let timestamp = whole as i64;

    Ok(timestamp.to_string())
}
