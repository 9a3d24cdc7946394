//! Module: batch
//! Responsibility: one existence probe per candidate value, for the backend
//! to run as a batched multi-search.
//! Does not own: executing the batch or reading its responses.

use crate::{model::Queryable, query::Query};
use bondql_config::IndexCatalog;
use serde::Serialize;

///
/// ProbeRequest
///
/// Single batched search item: the target index plus a one-hit body.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProbeRequest {
    pub index: String,
    pub body: ProbeBody,
}

///
/// ProbeBody
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProbeBody {
    pub size: u32,
    pub query: Query,
}

/// One existence probe per value of `target`.
///
/// Probes run against the data-folder index and match the field's
/// aggregation copy.
#[must_use]
pub fn distinct_values_items<I>(
    catalog: &IndexCatalog,
    values: I,
    target: &Queryable,
) -> Vec<ProbeRequest>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let field = catalog.agg_field(target.name());

    values
        .into_iter()
        .map(|value| ProbeRequest {
            index: catalog.data_folder.clone(),
            body: ProbeBody {
                size: 1,
                query: Query::match_phrase(field.as_str(), value.as_ref()),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn one_probe_per_value_in_order() {
        let catalog = IndexCatalog::default();

        let items = distinct_values_items(&catalog, ["ocean", "lake"], &Queryable::KEYWORD);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].index, IndexCatalog::DEFAULT_DATA_FOLDER);
        assert_eq!(items[0].body.size, 1);
        assert_eq!(
            items[1].body.query,
            Query::match_phrase("keyword_agg", "lake")
        );
    }

    #[test]
    fn probe_serializes_as_batch_item() {
        let items = distinct_values_items(&IndexCatalog::default(), ["ocean"], &Queryable::KEYWORD);

        assert_eq!(
            serde_json::to_value(&items[0]).unwrap(),
            json!({
                "index": "data-folder-index",
                "body": {
                    "size": 1,
                    "query": { "match_phrase": { "keyword_agg": { "query": "ocean" } } }
                }
            })
        );
    }

    #[test]
    fn catalog_overrides_index_and_suffix() {
        let catalog = IndexCatalog {
            data_folder: "records".to_string(),
            agg_field_suffix: ".raw".to_string(),
            ..IndexCatalog::default()
        };

        let items = distinct_values_items(&catalog, vec!["x".to_string()], &Queryable::TITLE);

        assert_eq!(items[0].index, "records");
        assert_eq!(items[0].body.query, Query::match_phrase("title.raw", "x"));
    }

    #[test]
    fn no_values_no_probes() {
        let items = distinct_values_items(&IndexCatalog::default(), Vec::<&str>::new(), &Queryable::TITLE);

        assert!(items.is_empty());
    }
}
