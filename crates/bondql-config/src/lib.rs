//! Compiler configuration: index catalog, ranking weights, and data-core
//! source selection, loaded from TOML.
//!
//! Every section is optional; a missing section or key falls back to the
//! defaults below, so an empty document is a valid configuration.

mod catalog;
mod error;

#[cfg(test)]
mod tests;

pub use catalog::IndexCatalog;
pub use error::ConfigError;

use serde::Deserialize;
use std::{collections::BTreeMap, fs, path::Path};

///
/// CompilerConfig
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    pub indexes: IndexCatalog,
    pub ranking: RankingConfig,
    pub data_core: DataCoreConfig,
}

impl CompilerConfig {
    /// Parse a configuration document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.indexes.validate()?;

        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_toml_str(&input)?;
        tracing::debug!(
            path = %path.display(),
            known_indexes = config.indexes.known.len(),
            weighted_properties = config.ranking.weights.len(),
            "loaded compiler configuration"
        );

        Ok(config)
    }
}

///
/// RankingConfig
///
/// Per-property ranking weights keyed by property name.
/// Properties without an entry weigh 1 (no boost).
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RankingConfig {
    pub weights: BTreeMap<String, f32>,
}

///
/// DataCoreConfig
///
/// Sources whose records participate in the data-core subset.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DataCoreConfig {
    pub selected_sources: Vec<String>,
}
