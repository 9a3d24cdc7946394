//! Module: builder
//! Responsibility: incremental assembly of a search tree and its
//! conjunction with the baseline query.
//! Does not own: leaf lowering (see `translate`) or baseline policy.
//! Boundary: groups are owned values, so an unbalanced or half-written tree
//! cannot be expressed; the only finalize failure is an empty builder.

#[cfg(test)]
mod tests;

use crate::{
    baseline::basic_query,
    error::QueryError,
    minmax::{self, MinMaxSource},
    model::{Bond, BondOperator, DataFolderMap, Extremum, Queryable, SpatialBond},
    query::{BoolQuery, Query},
    ranking::RankingStrategy,
    templates, translate,
};
use derive_more::Deref;
use serde::Serialize;

///
/// GroupKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GroupKind {
    Must,
    Should,
    MustNot,
}

///
/// BoolGroup
///
/// Open boolean group collecting sibling clauses until `close`.
///

#[derive(Clone, Debug, PartialEq)]
pub struct BoolGroup {
    kind: GroupKind,
    clauses: Vec<Query>,
}

impl BoolGroup {
    #[must_use]
    pub const fn must() -> Self {
        Self::open(GroupKind::Must)
    }

    #[must_use]
    pub const fn should() -> Self {
        Self::open(GroupKind::Should)
    }

    #[must_use]
    pub const fn must_not() -> Self {
        Self::open(GroupKind::MustNot)
    }

    const fn open(kind: GroupKind) -> Self {
        Self {
            kind,
            clauses: Vec::new(),
        }
    }

    /// Append a sibling clause.
    #[must_use]
    pub fn push(mut self, query: Query) -> Self {
        self.clauses.push(query);
        self
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.clauses.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Close the group into a boolean node.
    ///
    /// `minimum_should_match` sets the node's threshold to 1.
    #[must_use]
    pub fn close(self, minimum_should_match: bool) -> Query {
        let node = match self.kind {
            GroupKind::Must => BoolQuery::new().musts(self.clauses),
            GroupKind::Should => BoolQuery::new().shoulds(self.clauses),
            GroupKind::MustNot => BoolQuery::new().must_nots(self.clauses),
        };

        if minimum_should_match {
            node.minimum_should_match(1).into_query()
        } else {
            node.into_query()
        }
    }
}

impl Extend<Query> for BoolGroup {
    fn extend<I: IntoIterator<Item = Query>>(&mut self, iter: I) {
        self.clauses.extend(iter);
    }
}

///
/// CompiledQuery
///
/// Finalized tree: the caller's search conjoined with the baseline.
/// Serializes as the bare query object.
///

#[derive(Clone, Debug, Deref, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CompiledQuery(Query);

impl CompiledQuery {
    #[must_use]
    pub fn into_inner(self) -> Query {
        self.0
    }
}

impl From<CompiledQuery> for Query {
    fn from(compiled: CompiledQuery) -> Self {
        compiled.0
    }
}

///
/// QueryBuilder
///
/// Single-use accumulator for one compiled search. Appended clauses are
/// conjoined in order; `build` consumes the builder.
///

pub struct QueryBuilder<'a, R: ?Sized> {
    ranking: &'a R,
    data_folders: &'a DataFolderMap,
    deleted_included: bool,
    clauses: Vec<Query>,
}

impl<'a, R> QueryBuilder<'a, R>
where
    R: RankingStrategy + ?Sized,
{
    #[must_use]
    pub const fn new(ranking: &'a R, data_folders: &'a DataFolderMap, deleted_included: bool) -> Self {
        Self {
            ranking,
            data_folders,
            deleted_included,
            clauses: Vec::new(),
        }
    }

    /// Conjoin `query` with everything appended so far.
    #[must_use]
    pub fn append(mut self, query: Query) -> Self {
        self.clauses.push(query);
        self
    }

    /// Append every clause of `queries`, in order.
    #[must_use]
    pub fn append_all<I>(mut self, queries: I) -> Self
    where
        I: IntoIterator<Item = Query>,
    {
        self.clauses.extend(queries);
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Finalize as `must(search, baseline)`.
    pub fn build(self, count: bool) -> Result<CompiledQuery, QueryError> {
        let mut clauses = self.clauses;
        let clause_count = clauses.len();
        let search = if clause_count > 1 {
            BoolQuery::new().musts(clauses).into_query()
        } else {
            clauses.pop().ok_or(QueryError::EmptyAssembly)?
        };

        tracing::debug!(
            clauses = clause_count,
            count,
            deleted_included = self.deleted_included,
            "finalized compiled query"
        );

        let baseline = basic_query(self.ranking, self.deleted_included, count);

        Ok(CompiledQuery(
            BoolQuery::new().must(search).must(baseline).into_query(),
        ))
    }

    // ------------------------------------------------------------------
    // Context helpers
    // ------------------------------------------------------------------

    /// Lower a non-spatial bond with this builder's ranking.
    pub fn translate(&self, bond: &Bond) -> Result<Query, QueryError> {
        translate::translate(self.ranking, bond)
    }

    /// Lower a spatial bond.
    pub fn geo_shape_query(&self, bond: &SpatialBond) -> Result<Query, QueryError> {
        translate::geo_shape_query(bond)
    }

    /// Records of the source named by `bond`.
    ///
    /// Resolution goes through this builder's data-folder map.
    #[must_use]
    pub fn source_id_query(&self, bond: &Bond) -> Query {
        templates::source_id_query(self.data_folders, &bond.value)
    }

    pub fn metadata_element_query(
        &self,
        property: &Queryable,
        operator: BondOperator,
        value: &str,
    ) -> Result<Query, QueryError> {
        translate::metadata_element_query(self.ranking, property, operator, value)
    }

    pub fn subject_query(&self, operator: BondOperator, value: &str) -> Result<Query, QueryError> {
        translate::subject_query(self.ranking, operator, value)
    }

    pub fn min_max_value_query<M>(
        &self,
        source: &M,
        scope: Option<Query>,
        field: &str,
        extremum: Extremum,
        is_date: bool,
    ) -> Result<Query, QueryError>
    where
        M: MinMaxSource + ?Sized,
    {
        minmax::min_max_value_query(source, scope, field, extremum, is_date)
    }
}
