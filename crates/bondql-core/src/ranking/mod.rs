//! Module: ranking
//! Responsibility: ranking policy and its simulation through boosted clauses.
//! Does not own: the baseline composition that applies the simulated weights.
//! Boundary: translators and the baseline filter read weights only through
//! `RankingStrategy`.
//!
//! The compiled query expresses relevance solely through per-clause boosts,
//! so a continuous quality score is approximated by one boosted phrase match
//! per discrete level.

mod strategy;


pub use strategy::{RankingStrategy, Unranked, WeightedRanking};

use crate::{
    model::Queryable,
    query::{BoolQuery, Query},
};

/// Upper bound of the discrete quality levels, which run `1..=MAX_VARIABLE_VALUE`.
pub const MAX_VARIABLE_VALUE: u32 = 5;

/// Score-only disjunction over the quality levels of `property`.
///
/// No `minimum_should_match`: the baseline places this group beside
/// `match_all`, so a document matching no level scores nothing from this
/// dimension but is never excluded by it.
#[must_use]
pub fn level_weight_query<R>(ranking: &R, property: &Queryable) -> Query
where
    R: RankingStrategy + ?Sized,
{
    let levels = (1..=MAX_VARIABLE_VALUE).map(|level| {
        Query::match_phrase_weighted(
            property.name(),
            level.to_string(),
            ranking.range_weight(property, level),
        )
    });

    BoolQuery::new().shoulds(levels).into_query()
}

/// Data-core flag weighting.
///
/// Either branch matches every flagged document, so `minimum_should_match`
/// excludes nothing flagged while the `true` branch scores higher.
#[must_use]
pub fn data_core_weight_query<R>(ranking: &R) -> Query
where
    R: RankingStrategy + ?Sized,
{
    let flag = Queryable::IS_DATA_CORE;

    BoolQuery::new()
        .should(Query::match_phrase(flag.name(), "false"))
        .should(Query::match_phrase_weighted(
            flag.name(),
            "true",
            ranking.property_weight(&flag),
        ))
        .minimum_should_match(1)
        .into_query()
}
