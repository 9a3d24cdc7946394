use crate::model::Queryable;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// BondOperator
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BondOperator {
    Equal,
    NotEqual,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    Like,
    Exists,
    NotExists,
    Bbox,
    Intersects,
    Contained,
    Contains,
    Disjoint,
    IntersectsAnyPointNotContains,
}

impl BondOperator {
    pub const ALL: [Self; 15] = [
        Self::Equal,
        Self::NotEqual,
        Self::Greater,
        Self::GreaterOrEqual,
        Self::Less,
        Self::LessOrEqual,
        Self::Like,
        Self::Exists,
        Self::NotExists,
        Self::Bbox,
        Self::Intersects,
        Self::Contained,
        Self::Contains,
        Self::Disjoint,
        Self::IntersectsAnyPointNotContains,
    ];

    /// True for operators that relate a bounding extent to a shape field.
    #[must_use]
    pub const fn is_spatial(self) -> bool {
        matches!(
            self,
            Self::Bbox
                | Self::Intersects
                | Self::Contained
                | Self::Contains
                | Self::Disjoint
                | Self::IntersectsAnyPointNotContains
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterOrEqual => "GREATER_OR_EQUAL",
            Self::Less => "LESS",
            Self::LessOrEqual => "LESS_OR_EQUAL",
            Self::Like => "LIKE",
            Self::Exists => "EXISTS",
            Self::NotExists => "NOT_EXISTS",
            Self::Bbox => "BBOX",
            Self::Intersects => "INTERSECTS",
            Self::Contained => "CONTAINED",
            Self::Contains => "CONTAINS",
            Self::Disjoint => "DISJOINT",
            Self::IntersectsAnyPointNotContains => "INTERSECTS_ANY_POINT_NOT_CONTAINS",
        }
    }
}

impl fmt::Display for BondOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// Bond
///
/// A typed predicate over a single property: `property operator value`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Bond {
    pub property: Queryable,
    pub operator: BondOperator,
    pub value: String,
}

impl Bond {
    #[must_use]
    pub fn new(property: Queryable, operator: BondOperator, value: impl Into<String>) -> Self {
        Self {
            property,
            operator,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn source_id(source_id: impl Into<String>) -> Self {
        Self::new(Queryable::SOURCE_ID, BondOperator::Equal, source_id)
    }
}

///
/// SpatialExtent
///
/// Axis-aligned rectangular envelope in degrees.
///

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct SpatialExtent {
    pub west: f64,
    pub east: f64,
    pub north: f64,
    pub south: f64,
}

impl SpatialExtent {
    #[must_use]
    pub const fn new(west: f64, east: f64, north: f64, south: f64) -> Self {
        Self {
            west,
            east,
            north,
            south,
        }
    }
}

///
/// SpatialBond
///
/// Relates the indexed bounding box to an extent. The extent cannot be
/// changed once the bond is built.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpatialBond {
    operator: BondOperator,
    extent: SpatialExtent,
}

impl SpatialBond {
    #[must_use]
    pub const fn new(operator: BondOperator, extent: SpatialExtent) -> Self {
        Self { operator, extent }
    }

    #[must_use]
    pub const fn operator(&self) -> BondOperator {
        self.operator
    }

    #[must_use]
    pub const fn extent(&self) -> &SpatialExtent {
        &self.extent
    }
}

///
/// Extremum
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Extremum {
    Min,
    Max,
}

impl Extremum {
    #[must_use]
    pub const fn is_max(self) -> bool {
        matches!(self, Self::Max)
    }
}
