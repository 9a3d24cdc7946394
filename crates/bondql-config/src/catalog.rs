use crate::ConfigError;
use serde::Deserialize;

///
/// IndexCatalog
///
/// Names of the engine indexes the compiler scopes queries to.
/// `known` is the set unioned over by folder and view lookups.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct IndexCatalog {
    pub data_folder: String,
    pub meta_folder: String,
    pub folder_registry: String,
    pub known: Vec<String>,
    pub agg_field_suffix: String,
}

impl IndexCatalog {
    pub const DEFAULT_DATA_FOLDER: &str = "data-folder-index";
    pub const DEFAULT_META_FOLDER: &str = "meta-folder-index";
    pub const DEFAULT_FOLDER_REGISTRY: &str = "folder-registry-index";
    pub const DEFAULT_VIEWS: &str = "views-index";
    pub const DEFAULT_AGG_FIELD_SUFFIX: &str = "_agg";

    /// Name of the keyword sub-field used for aggregations over `field`.
    #[must_use]
    pub fn agg_field(&self, field: &str) -> String {
        format!("{field}{}", self.agg_field_suffix)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("data_folder", &self.data_folder),
            ("meta_folder", &self.meta_folder),
            ("folder_registry", &self.folder_registry),
        ];

        for (key, name) in named {
            if name.trim().is_empty() {
                return Err(ConfigError::Catalog(format!("'{key}' must not be empty")));
            }
        }

        if self.known.is_empty() {
            return Err(ConfigError::Catalog(
                "'known' must list at least one index".to_string(),
            ));
        }

        if let Some(blank) = self.known.iter().position(|index| index.trim().is_empty()) {
            return Err(ConfigError::Catalog(format!(
                "'known' entry {blank} must not be empty"
            )));
        }

        Ok(())
    }
}

impl Default for IndexCatalog {
    fn default() -> Self {
        let known = [
            Self::DEFAULT_DATA_FOLDER,
            Self::DEFAULT_META_FOLDER,
            Self::DEFAULT_FOLDER_REGISTRY,
            Self::DEFAULT_VIEWS,
        ]
        .map(str::to_string)
        .to_vec();

        Self {
            data_folder: Self::DEFAULT_DATA_FOLDER.to_string(),
            meta_folder: Self::DEFAULT_META_FOLDER.to_string(),
            folder_registry: Self::DEFAULT_FOLDER_REGISTRY.to_string(),
            known,
            agg_field_suffix: Self::DEFAULT_AGG_FIELD_SUFFIX.to_string(),
        }
    }
}
