use crate::model::{BondOperator, ValueKind};
use std::{error::Error as StdError, fmt};
use thiserror::Error as ThisError;

///
/// QueryError
///
/// Compile-time failure reported to the immediate caller.
/// Nothing here is retried; the compiler performs no I/O of its own beyond
/// the delegated min/max lookup.
///

#[derive(Debug, ThisError)]
pub enum QueryError {
    #[error("operator {operator} not supported for field {field}")]
    UnsupportedOperator {
        operator: BondOperator,
        field: String,
    },

    #[error("operator {operator} has no geo-shape relation")]
    UnsupportedRelation { operator: BondOperator },

    #[error("invalid {kind} literal '{value}' for field {field}")]
    InvalidLiteral {
        field: String,
        kind: ValueKind,
        value: String,
    },

    #[error("min/max lookup on field {field} failed: {source}")]
    MinMaxLookup {
        field: String,
        #[source]
        source: Box<dyn StdError + Send + Sync + 'static>,
    },

    #[error("min/max lookup on field {field} returned a non-finite value ({value})")]
    NonFiniteExtremum { field: String, value: f64 },

    #[error("min/max lookup on field {field} returned {value}, outside the timestamp range")]
    ExtremumOutOfRange { field: String, value: f64 },

    #[error("query builder finalized without any appended clause")]
    EmptyAssembly,
}

impl QueryError {
    pub(crate) fn unsupported_operator(operator: BondOperator, field: impl Into<String>) -> Self {
        Self::UnsupportedOperator {
            operator,
            field: field.into(),
        }
    }

    pub(crate) fn min_max_lookup<E>(field: impl Into<String>, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::MinMaxLookup {
            field: field.into(),
            source: Box::new(source),
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::UnsupportedOperator { .. } | Self::UnsupportedRelation { .. } => {
                ErrorClass::Unsupported
            }
            Self::InvalidLiteral { .. } => ErrorClass::InvalidInput,
            Self::MinMaxLookup { .. }
            | Self::NonFiniteExtremum { .. }
            | Self::ExtremumOutOfRange { .. } => ErrorClass::External,
            Self::EmptyAssembly => ErrorClass::Malformed,
        }
    }

    #[must_use]
    pub const fn origin(&self) -> ErrorOrigin {
        match self {
            Self::UnsupportedOperator { .. } | Self::InvalidLiteral { .. } => ErrorOrigin::Bond,
            Self::UnsupportedRelation { .. } => ErrorOrigin::Spatial,
            Self::MinMaxLookup { .. }
            | Self::NonFiniteExtremum { .. }
            | Self::ExtremumOutOfRange { .. } => ErrorOrigin::MinMax,
            Self::EmptyAssembly => ErrorOrigin::Assembler,
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {self}", self.origin(), self.class())
    }
}

///
/// ErrorClass
/// Error taxonomy for caller-side classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Unsupported,
    InvalidInput,
    External,
    Malformed,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unsupported => "unsupported",
            Self::InvalidInput => "invalid_input",
            Self::External => "external",
            Self::Malformed => "malformed",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Compiler stage that raised the error.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Bond,
    Spatial,
    MinMax,
    Assembler,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Bond => "bond",
            Self::Spatial => "spatial",
            Self::MinMax => "min_max",
            Self::Assembler => "assembler",
        };
        write!(f, "{label}")
    }
}
