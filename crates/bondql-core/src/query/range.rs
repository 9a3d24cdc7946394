use crate::{error::QueryError, model::ValueKind};
use serde::Serialize;

///
/// RangeBound
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RangeBound {
    Gt,
    Gte,
    Lt,
    Lte,
}

impl RangeBound {
    /// Key of the bound in the engine's range clause.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
        }
    }
}

///
/// RangeValue
///
/// Range literal typed after the field it bounds.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RangeValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl RangeValue {
    /// Parse `literal` per the declared kind of `field`.
    ///
    /// Dates are integral timestamps. Text and boolean fields keep the raw
    /// literal and leave interpretation to the engine.
    pub fn parse(field: &str, kind: ValueKind, literal: &str) -> Result<Self, QueryError> {
        let invalid = || QueryError::InvalidLiteral {
            field: field.to_string(),
            kind,
            value: literal.to_string(),
        };
        let trimmed = literal.trim();

        match kind {
            ValueKind::Integer | ValueKind::Date => {
                trimmed.parse().map(Self::Integer).map_err(|_| invalid())
            }
            ValueKind::Double => match trimmed.parse::<f64>() {
                Ok(value) if value.is_finite() => Ok(Self::Float(value)),
                _ => Err(invalid()),
            },
            ValueKind::Text | ValueKind::Boolean => Ok(Self::Text(literal.to_string())),
        }
    }
}

///
/// RangeQuery
/// Single-bound range clause; range clauses carry no boost.
///

#[derive(Clone, Debug, PartialEq)]
pub struct RangeQuery {
    pub field: String,
    pub bound: RangeBound,
    pub value: RangeValue,
}
