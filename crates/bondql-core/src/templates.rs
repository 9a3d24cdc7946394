//! Module: templates
//! Responsibility: canned filter-only compositions for folder, registry,
//! view, data-folder, and generic field lookups.
//! Does not own: ranking or soft-delete policy; none of these carry scoring
//! intent.
//! Boundary: pure functions over the index catalog and caller inputs.


use crate::{
    fields,
    model::{DataFolderMap, Queryable, ViewVisibility},
    query::{BoolQuery, Query},
};
use bondql_config::{DataCoreConfig, IndexCatalog};

// ------------------------------------------------------------------
// Folder / registry / view lookups
// ------------------------------------------------------------------

/// All entries of `folder_name` in `database_id`, across the known indexes.
#[must_use]
pub fn search_entries_query(catalog: &IndexCatalog, database_id: &str, folder_name: &str) -> Query {
    BoolQuery::new()
        .filter(database_id_query(database_id))
        .filter(Query::match_phrase(fields::FOLDER_NAME, folder_name))
        .shoulds(known_indexes(catalog))
        .minimum_should_match(1)
        .into_query()
}

/// Folder-registry documents of `database_id`.
#[must_use]
pub fn search_registry_query(catalog: &IndexCatalog, database_id: &str) -> Query {
    BoolQuery::new()
        .filter(database_id_query(database_id))
        .filter(index_query(&catalog.folder_registry))
        .into_query()
}

/// Views of `database_id`; each supplied attribute narrows the match.
#[must_use]
pub fn search_views_query(
    catalog: &IndexCatalog,
    database_id: &str,
    creator: Option<&str>,
    owner: Option<&str>,
    visibility: Option<ViewVisibility>,
) -> Query {
    let optional = [
        creator.map(|c| Query::match_phrase(fields::VIEW_CREATOR, c)),
        owner.map(|o| Query::match_phrase(fields::VIEW_OWNER, o)),
        visibility.map(|v| Query::match_phrase(fields::VIEW_VISIBILITY, v.as_str())),
    ];

    BoolQuery::new()
        .filters(optional.into_iter().flatten())
        .filter(database_id_query(database_id))
        .shoulds(known_indexes(catalog))
        .minimum_should_match(1)
        .into_query()
}

// ------------------------------------------------------------------
// Source resolution
// ------------------------------------------------------------------

/// Records of `source_id`.
///
/// A locally held source is further restricted to its data folder; a
/// distributed source has no mapping and matches on the id alone.
#[must_use]
pub fn source_id_query(data_folders: &DataFolderMap, source_id: &str) -> Query {
    match data_folders.folder_of(source_id) {
        Some(folder) => BoolQuery::new()
            .filter(Query::match_phrase(fields::SOURCE_ID, source_id))
            .filter(Query::match_phrase(fields::DATA_FOLDER, folder))
            .into_query(),
        None => Query::match_phrase(fields::SOURCE_ID, source_id),
    }
}

/// Meta-folder documents of `database_id` naming a data folder.
///
/// Only folders of one of `source_ids` match.
#[must_use]
pub fn data_folder_query<I>(catalog: &IndexCatalog, database_id: &str, source_ids: I) -> Query
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let ids = source_ids
        .into_iter()
        .map(|id| Query::match_phrase(fields::SOURCE_ID, id.as_ref()));

    BoolQuery::new()
        .filter(database_id_query(database_id))
        .filter(Query::exists(fields::DATA_FOLDER))
        .filter(index_query(&catalog.meta_folder))
        .filter(
            BoolQuery::new()
                .shoulds(ids)
                .minimum_should_match(1)
                .into_query(),
        )
        .into_query()
}

/// Data-folder records of `source_id`; the scope for its min/max lookups.
#[must_use]
pub fn min_max_scope_query(catalog: &IndexCatalog, source_id: &str) -> Query {
    BoolQuery::new()
        .filter(Query::match_phrase(Queryable::SOURCE_ID.name(), source_id))
        .filter(index_query(&catalog.data_folder))
        .into_query()
}

/// Data-core membership check.
///
/// The flag must equal `value` and the record must belong to one of the
/// configured data-core sources.
// Membership is any-of over the selected sources, not all-of.
#[must_use]
pub fn data_core_query(data_core: &DataCoreConfig, value: &str) -> Query {
    let mut node =
        BoolQuery::new().filter(Query::match_phrase(Queryable::IS_DATA_CORE.name(), value));

    if !data_core.selected_sources.is_empty() {
        let sources = data_core
            .selected_sources
            .iter()
            .map(|id| Query::match_phrase(Queryable::SOURCE_ID.name(), id.as_str()));

        node = node.filter(
            BoolQuery::new()
                .shoulds(sources)
                .minimum_should_match(1)
                .into_query(),
        );
    }

    node.into_query()
}

// ------------------------------------------------------------------
// Generic database searches
// ------------------------------------------------------------------

/// Every entry of `database_id`.
#[must_use]
pub fn search_query(database_id: &str) -> Query {
    BoolQuery::new()
        .filter(database_id_query(database_id))
        .into_query()
}

/// Every entry of `database_id` in `index`.
#[must_use]
pub fn search_index_query(database_id: &str, index: &str) -> Query {
    BoolQuery::new()
        .filter(database_id_query(database_id))
        .filter(index_query(index))
        .into_query()
}

/// Entries of `database_id` whose `field` matches one of `values`.
#[must_use]
pub fn search_field_query<I>(database_id: &str, field: &str, values: I) -> Query
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    BoolQuery::new()
        .filter(database_id_query(database_id))
        .shoulds(field_values(field, values))
        .minimum_should_match(1)
        .into_query()
}

/// Entries of `database_id` in `index` whose `field` matches one of `values`.
#[must_use]
pub fn search_index_field_query<I>(database_id: &str, index: &str, field: &str, values: I) -> Query
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    BoolQuery::new()
        .filter(database_id_query(database_id))
        .filter(index_query(index))
        .shoulds(field_values(field, values))
        .minimum_should_match(1)
        .into_query()
}

// ------------------------------------------------------------------
// Helpers
// ------------------------------------------------------------------

fn database_id_query(database_id: &str) -> Query {
    Query::match_phrase(fields::DATABASE_ID, database_id)
}

fn index_query(index: &str) -> Query {
    Query::match_phrase(fields::INDEX, index)
}

fn known_indexes(catalog: &IndexCatalog) -> impl Iterator<Item = Query> + '_ {
    catalog.known.iter().map(|index| index_query(index))
}

fn field_values<I>(field: &str, values: I) -> impl Iterator<Item = Query>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let field = field.to_string();
    values
        .into_iter()
        .map(move |value| Query::match_phrase(field.clone(), value.as_ref()))
}
