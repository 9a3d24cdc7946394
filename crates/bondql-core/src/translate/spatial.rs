use crate::{
    error::QueryError,
    model::{BondOperator, Queryable, SpatialBond},
    query::{Envelope, Query, ShapeRelation},
};

/// Relation of the indexed shape to the bond's extent.
///
/// Relations are stated from the indexed shape's side: `Contained` maps to
/// `contains` and `Contains` to `within`.
pub const fn shape_relation(operator: BondOperator) -> Result<ShapeRelation, QueryError> {
    match operator {
        BondOperator::Bbox | BondOperator::Intersects => Ok(ShapeRelation::Intersects),
        BondOperator::Contained => Ok(ShapeRelation::Contains),
        BondOperator::Contains => Ok(ShapeRelation::Within),
        BondOperator::Disjoint => Ok(ShapeRelation::Disjoint),

        BondOperator::IntersectsAnyPointNotContains
        | BondOperator::Equal
        | BondOperator::NotEqual
        | BondOperator::Greater
        | BondOperator::GreaterOrEqual
        | BondOperator::Less
        | BondOperator::LessOrEqual
        | BondOperator::Like
        | BondOperator::Exists
        | BondOperator::NotExists => Err(QueryError::UnsupportedRelation { operator }),
    }
}

/// Geo-shape clause on the bounding-box field for a spatial bond.
pub fn geo_shape_query(bond: &SpatialBond) -> Result<Query, QueryError> {
    let relation = shape_relation(bond.operator())?;
    let envelope = Envelope::from(bond.extent());

    Ok(Query::geo_shape(
        Queryable::BOUNDING_BOX.name(),
        envelope,
        relation,
    ))
}
