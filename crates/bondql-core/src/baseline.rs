//! Module: baseline
//! Responsibility: the always-applied backbone of a compiled search
//! (soft-delete visibility plus the simulated ranking dimensions).
//! Does not own: per-dimension bucket simulation (see `ranking`).
//! Boundary: `QueryBuilder::build` conjoins the caller's tree with this.

use crate::{
    model::Queryable,
    query::{BoolQuery, Query},
    ranking::{RankingStrategy, data_core_weight_query, level_weight_query},
};

/// Soft-delete visibility: the delete marker is absent or `"false"`.
#[must_use]
pub fn deleted_excluded_query() -> Query {
    let deleted = Queryable::IS_DELETED;
    let marker = deleted.name();

    BoolQuery::new()
        .should(Query::not_exists(marker))
        .should(Query::match_phrase(marker, "false"))
        .minimum_should_match(1)
        .into_query()
}

/// The baseline query.
///
/// Search mode ORs `match_all` with the four weight groups so the
/// disjunction can never empty the result set. The soft-delete clause joins
/// the same disjunction when deleted records are hidden, so there it only
/// adds score.
///
/// Count mode drops the weight groups, leaving the visibility clause alone.
/// That clause is applied whether or not deleted records were requested.
#[must_use]
pub fn basic_query<R>(ranking: &R, deleted_included: bool, count: bool) -> Query
where
    R: RankingStrategy + ?Sized,
{
    if count {
        if deleted_included {
            tracing::debug!("count mode applies deleted-record exclusion despite deleted_included");
        }

        return deleted_excluded_query();
    }

    let mut node = BoolQuery::new()
        .should(Query::match_all())
        .should(data_core_weight_query(ranking))
        .should(level_weight_query(ranking, &Queryable::METADATA_QUALITY))
        .should(level_weight_query(ranking, &Queryable::ESSENTIAL_VARS_QUALITY))
        .should(level_weight_query(ranking, &Queryable::ACCESS_QUALITY));

    if !deleted_included {
        node = node.should(deleted_excluded_query());
    }

    node.minimum_should_match(1).into_query()
}
