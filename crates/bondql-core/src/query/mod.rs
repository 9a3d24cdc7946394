//! Module: query
//! Responsibility: the compiled boolean query tree and its leaf clauses.
//! Does not own: bond semantics, ranking policy, or index naming.
//! Boundary: every compiler stage emits `Query` values; `wire` renders them
//! in the engine's JSON query DSL.

mod boolean;
mod geo;
mod leaf;
mod range;
mod wire;


pub use boolean::BoolQuery;
pub use geo::{Envelope, ShapeRelation};
pub use leaf::{
    ExistsQuery, GeoShapeQuery, MatchPhraseQuery, TermQuery, TermsQuery, WildcardQuery,
};
pub use range::{RangeBound, RangeQuery, RangeValue};

use std::ops::{BitAnd, BitOr, Not};

/// Boost to record for a ranking weight; weights of 1 or less mean no boost.
#[must_use]
pub(crate) fn weighted(weight: f32) -> Option<f32> {
    (weight > 1.0).then_some(weight)
}

///
/// Query
///
/// Recursive query tree: leaf clauses plus the boolean node that nests them.
///
/// Leaf clauses carry an optional boost; `None` is the engine default of 1.
/// Composition semantics live entirely in [`BoolQuery`].
///

#[derive(Clone, Debug, PartialEq)]
pub enum Query {
    MatchAll,
    MatchNone,
    MatchPhrase(MatchPhraseQuery),
    Range(RangeQuery),
    Wildcard(WildcardQuery),
    Exists(ExistsQuery),
    Term(TermQuery),
    Terms(TermsQuery),
    GeoShape(GeoShapeQuery),
    Bool(BoolQuery),
}

impl Query {
    // --- Constants ---

    #[must_use]
    pub const fn match_all() -> Self {
        Self::MatchAll
    }

    #[must_use]
    pub const fn match_none() -> Self {
        Self::MatchNone
    }

    // --- Phrase ---

    /// Unboosted phrase match: `field == value`.
    #[must_use]
    pub fn match_phrase(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MatchPhrase(MatchPhraseQuery {
            field: field.into(),
            query: value.into(),
            boost: None,
        })
    }

    /// Phrase match boosted by a ranking weight.
    #[must_use]
    pub fn match_phrase_weighted(
        field: impl Into<String>,
        value: impl Into<String>,
        weight: f32,
    ) -> Self {
        Self::MatchPhrase(MatchPhraseQuery {
            field: field.into(),
            query: value.into(),
            boost: weighted(weight),
        })
    }

    // --- Presence ---

    #[must_use]
    pub fn exists(field: impl Into<String>) -> Self {
        Self::Exists(ExistsQuery {
            field: field.into(),
        })
    }

    #[must_use]
    pub fn not_exists(field: impl Into<String>) -> Self {
        Self::negate(Self::exists(field))
    }

    // --- Range / pattern ---

    #[must_use]
    pub fn range(field: impl Into<String>, bound: RangeBound, value: RangeValue) -> Self {
        Self::Range(RangeQuery {
            field: field.into(),
            bound,
            value,
        })
    }

    #[must_use]
    pub fn wildcard(field: impl Into<String>, pattern: impl Into<String>, weight: f32) -> Self {
        Self::Wildcard(WildcardQuery {
            field: field.into(),
            value: pattern.into(),
            boost: weighted(weight),
        })
    }

    // --- Exact terms ---

    #[must_use]
    pub fn term(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Term(TermQuery {
            field: field.into(),
            value: value.into(),
        })
    }

    #[must_use]
    pub fn terms<I>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::Terms(TermsQuery {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        })
    }

    // --- Spatial ---

    /// Shape relation against an envelope, with the engine's explicit unit boost.
    #[must_use]
    pub fn geo_shape(field: impl Into<String>, envelope: Envelope, relation: ShapeRelation) -> Self {
        Self::GeoShape(GeoShapeQuery {
            field: field.into(),
            envelope,
            relation,
            boost: 1.0,
        })
    }

    // --- Composition ---

    /// `bool.must_not(query)`.
    #[must_use]
    pub fn negate(query: Self) -> Self {
        BoolQuery::new().must_not(query).into()
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<&BoolQuery> {
        match self {
            Self::Bool(node) => Some(node),
            _ => None,
        }
    }

    /// Boost carried by a leaf clause, if any.
    #[must_use]
    pub const fn boost(&self) -> Option<f32> {
        match self {
            Self::MatchPhrase(q) => q.boost,
            Self::Wildcard(q) => q.boost,
            Self::GeoShape(q) => Some(q.boost),
            _ => None,
        }
    }
}

impl From<BoolQuery> for Query {
    fn from(node: BoolQuery) -> Self {
        Self::Bool(node)
    }
}

/// `a & b` is `must(a, b)`.
impl BitAnd for Query {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        BoolQuery::new().must(self).must(rhs).into()
    }
}

/// `a | b` is `should(a, b)` with `minimum_should_match = 1`.
impl BitOr for Query {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        BoolQuery::new()
            .should(self)
            .should(rhs)
            .minimum_should_match(1)
            .into()
    }
}

impl Not for Query {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::negate(self)
    }
}
