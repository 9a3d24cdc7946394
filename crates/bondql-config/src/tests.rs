use super::*;

#[test]
fn empty_document_yields_defaults() {
    let config = CompilerConfig::from_toml_str("").expect("empty config should parse");

    assert_eq!(config, CompilerConfig::default());
    assert_eq!(config.indexes.data_folder, IndexCatalog::DEFAULT_DATA_FOLDER);
    assert_eq!(config.indexes.known.len(), 4);
}

#[test]
fn sections_override_defaults() {
    let config = CompilerConfig::from_toml_str(
        r#"
        [indexes]
        data_folder = "df"
        known = ["df", "meta"]

        [ranking.weights]
        isGEOSSDataCore = 4.0
        metadataQuality = 2.5

        [data_core]
        selected_sources = ["src-a", "src-b"]
        "#,
    )
    .expect("config should parse");

    assert_eq!(config.indexes.data_folder, "df");
    assert_eq!(
        config.indexes.meta_folder,
        IndexCatalog::DEFAULT_META_FOLDER
    );
    assert_eq!(config.indexes.known, vec!["df", "meta"]);
    assert!(
        config
            .ranking
            .weights
            .get("isGEOSSDataCore")
            .is_some_and(|weight| (weight - 4.0).abs() < f32::EPSILON)
    );
    assert!(!config.ranking.weights.contains_key("accessQuality"));
    assert_eq!(config.data_core.selected_sources, vec!["src-a", "src-b"]);
}

#[test]
fn agg_field_appends_suffix() {
    let catalog = IndexCatalog::default();

    assert_eq!(catalog.agg_field("title"), "title_agg");
}

#[test]
fn unknown_keys_are_rejected() {
    let err = CompilerConfig::from_toml_str("[indexes]\nbogus = 1\n")
        .expect_err("unknown key should fail");

    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn empty_known_indexes_are_rejected() {
    let err = CompilerConfig::from_toml_str("[indexes]\nknown = []\n")
        .expect_err("empty known list should fail");

    assert!(matches!(err, ConfigError::Catalog(_)));
}

#[test]
fn blank_index_name_is_rejected() {
    let err = CompilerConfig::from_toml_str("[indexes]\nfolder_registry = \"  \"\n")
        .expect_err("blank index name should fail");

    assert!(err.to_string().contains("folder_registry"));
}

#[test]
fn missing_file_reports_path() {
    let err = CompilerConfig::load("/nonexistent/bondql.toml").expect_err("load should fail");

    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/bondql.toml"));
}

#[test]
fn views_key_is_not_a_catalog_entry() {
    let err = CompilerConfig::from_toml_str("[indexes]\nviews = \"v\"\n")
        .expect_err("views is listed through known");

    assert!(matches!(err, ConfigError::Parse(_)));
}
