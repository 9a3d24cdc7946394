use serde::{Deserialize, Serialize};
use std::{borrow::Cow, fmt};

///
/// ValueKind
///
/// Declared type of a property's stored values. Decides how range literals
/// are parsed; dates are stored as integral timestamps.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Text,
    Integer,
    Double,
    Date,
    Boolean,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::Date => "date",
            Self::Boolean => "boolean",
        };
        write!(f, "{label}")
    }
}

///
/// Queryable
///
/// A named, typed property a bond can constrain.
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Queryable {
    pub name: Cow<'static, str>,
    pub kind: ValueKind,
}

impl Queryable {
    // --- Resource properties ---

    pub const SOURCE_ID: Self = Self::well_known("sourceId", ValueKind::Text);
    pub const IS_DELETED: Self = Self::well_known("isDeleted", ValueKind::Boolean);
    pub const IS_DATA_CORE: Self = Self::well_known("isGEOSSDataCore", ValueKind::Boolean);
    pub const METADATA_QUALITY: Self = Self::well_known("metadataQuality", ValueKind::Integer);
    pub const ESSENTIAL_VARS_QUALITY: Self =
        Self::well_known("essentialVarsQuality", ValueKind::Integer);
    pub const ACCESS_QUALITY: Self = Self::well_known("accessQuality", ValueKind::Integer);
    pub const RESOURCE_TIME_STAMP: Self = Self::well_known("resourceTimeStamp", ValueKind::Date);

    // --- Metadata elements ---

    pub const TITLE: Self = Self::well_known("title", ValueKind::Text);
    pub const KEYWORD: Self = Self::well_known("keyword", ValueKind::Text);
    pub const TOPIC_CATEGORY: Self = Self::well_known("topicCategory", ValueKind::Text);
    pub const BOUNDING_BOX: Self = Self::well_known("bbox", ValueKind::Text);

    const fn well_known(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name: Cow::Borrowed(name),
            kind,
        }
    }

    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Queryable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
