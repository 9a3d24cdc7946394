use crate::{
    error::QueryError,
    model::{Bond, BondOperator, Queryable},
    query::{BoolQuery, Query, RangeBound, RangeValue},
    ranking::RankingStrategy,
};

/// Lower a non-spatial bond, boosting by the property's ranking weight.
pub fn translate<R>(ranking: &R, bond: &Bond) -> Result<Query, QueryError>
where
    R: RankingStrategy + ?Sized,
{
    metadata_element_query(ranking, &bond.property, bond.operator, &bond.value)
}

/// Lower `property operator value`.
///
/// Phrase and wildcard clauses carry the property's ranking weight; range
/// clauses never do.
pub fn metadata_element_query<R>(
    ranking: &R,
    property: &Queryable,
    operator: BondOperator,
    value: &str,
) -> Result<Query, QueryError>
where
    R: RankingStrategy + ?Sized,
{
    match operator {
        BondOperator::Exists => Ok(Query::exists(property.name())),
        BondOperator::NotExists => Ok(Query::not_exists(property.name())),

        BondOperator::Equal => Ok(Query::match_phrase_weighted(
            property.name(),
            value,
            ranking.property_weight(property),
        )),
        BondOperator::NotEqual => Ok(Query::negate(Query::match_phrase_weighted(
            property.name(),
            value,
            ranking.property_weight(property),
        ))),

        BondOperator::Greater
        | BondOperator::GreaterOrEqual
        | BondOperator::Less
        | BondOperator::LessOrEqual => range_query(property, operator, value),

        BondOperator::Like => Ok(Query::wildcard(
            property.name(),
            value,
            ranking.property_weight(property),
        )),

        BondOperator::Bbox
        | BondOperator::Intersects
        | BondOperator::Contained
        | BondOperator::Contains
        | BondOperator::Disjoint
        | BondOperator::IntersectsAnyPointNotContains => Err(QueryError::unsupported_operator(
            operator,
            property.name(),
        )),
    }
}

/// Unweighted comparison.
///
/// (In)equality becomes a phrase match; ordering operators become a
/// single-bound range clause.
pub fn range_query(
    property: &Queryable,
    operator: BondOperator,
    value: &str,
) -> Result<Query, QueryError> {
    let bound = match operator {
        BondOperator::Equal => return Ok(Query::match_phrase(property.name(), value)),
        BondOperator::NotEqual => {
            return Ok(Query::negate(Query::match_phrase(property.name(), value)));
        }

        BondOperator::Greater => RangeBound::Gt,
        BondOperator::GreaterOrEqual => RangeBound::Gte,
        BondOperator::Less => RangeBound::Lt,
        BondOperator::LessOrEqual => RangeBound::Lte,

        BondOperator::Like
        | BondOperator::Exists
        | BondOperator::NotExists
        | BondOperator::Bbox
        | BondOperator::Intersects
        | BondOperator::Contained
        | BondOperator::Contains
        | BondOperator::Disjoint
        | BondOperator::IntersectsAnyPointNotContains => {
            return Err(QueryError::unsupported_operator(operator, property.name()));
        }
    };

    let value = RangeValue::parse(property.name(), property.kind, value)?;

    Ok(Query::range(property.name(), bound, value))
}

/// Subject search over keywords and topic category.
///
/// The value must match either of the two.
pub fn subject_query<R>(ranking: &R, operator: BondOperator, value: &str) -> Result<Query, QueryError>
where
    R: RankingStrategy + ?Sized,
{
    let keyword = metadata_element_query(ranking, &Queryable::KEYWORD, operator, value)?;
    let topic = metadata_element_query(ranking, &Queryable::TOPIC_CATEGORY, operator, value)?;

    Ok(BoolQuery::new()
        .should(keyword)
        .should(topic)
        .minimum_should_match(1)
        .into_query())
}
