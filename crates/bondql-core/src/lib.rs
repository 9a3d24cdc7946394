//! Core of bondql: lowers typed filter bonds into the boolean query tree a
//! document search engine executes, and layers bucketed relevance ranking
//! on top of raw filtering.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod baseline;
pub mod batch;
pub mod builder;
pub mod error;
pub mod fields;
pub mod minmax;
pub mod model;
pub mod query;
pub mod ranking;
pub mod templates;
pub mod translate;

// test
#[cfg(test)]
pub(crate) mod test_support;

pub use bondql_config as config;

///
/// Prelude
///
/// Domain vocabulary plus the compile entry points.
///

pub mod prelude {
    pub use crate::{
        builder::{BoolGroup, CompiledQuery, QueryBuilder},
        error::QueryError,
        minmax::MinMaxSource,
        model::{
            Bond, BondOperator, DataFolderMap, Extremum, Queryable, SpatialBond, SpatialExtent,
            ValueKind, ViewVisibility,
        },
        query::{BoolQuery, Query},
        ranking::{RankingStrategy, Unranked, WeightedRanking},
    };
    pub use bondql_config::{CompilerConfig, DataCoreConfig, IndexCatalog};
}
