//! Module: model
//! Responsibility: the bond vocabulary callers compile from.
//! Does not own: query construction or ranking policy.
//! Boundary: plain data consumed by translators, templates, and the builder.

mod bond;
mod queryable;

pub use bond::{Bond, BondOperator, Extremum, SpatialBond, SpatialExtent};
pub use queryable::{Queryable, ValueKind};

use derive_more::Deref;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

///
/// DataFolderMap
///
/// Source id → data folder, for sources whose records are held locally.
/// Distributed sources have no entry.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DataFolderMap(BTreeMap<String, String>);

impl DataFolderMap {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record (or replace) the data folder of a local source.
    pub fn insert(&mut self, source_id: impl Into<String>, folder: impl Into<String>) {
        self.0.insert(source_id.into(), folder.into());
    }

    #[must_use]
    pub fn folder_of(&self, source_id: &str) -> Option<&str> {
        self.0.get(source_id).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for DataFolderMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(source, folder)| (source.into(), folder.into()))
                .collect(),
        )
    }
}

///
/// ViewVisibility
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViewVisibility {
    Public,
    Private,
}

impl ViewVisibility {
    /// Stored form of the visibility, as indexed on view documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
        }
    }
}

impl fmt::Display for ViewVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
