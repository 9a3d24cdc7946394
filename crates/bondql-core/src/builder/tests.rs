use super::*;
use crate::{
    baseline::deleted_excluded_query,
    error::ErrorClass,
    ranking::{Unranked, WeightedRanking},
    test_support::{Doc, matches},
};
use serde_json::json;
use std::convert::Infallible;

struct Fixed(f64);

impl MinMaxSource for Fixed {
    type Error = Infallible;

    fn find_min_max_value(&self, _: &Query, _: &str, _: bool) -> Result<f64, Self::Error> {
        Ok(self.0)
    }
}

fn folders() -> DataFolderMap {
    let mut folders = DataFolderMap::new();
    folders.insert("src-local", "folder-a");
    folders
}

// ------------------------------------------------------------------
// BoolGroup
// ------------------------------------------------------------------

#[test]
fn groups_close_into_their_own_slot() {
    let a = Query::match_phrase("title", "a");
    let b = Query::match_phrase("title", "b");

    let must = BoolGroup::must().push(a.clone()).push(b.clone()).close(false);
    let should = BoolGroup::should().push(a.clone()).push(b.clone()).close(true);
    let must_not = BoolGroup::must_not().push(a.clone()).close(false);

    assert_eq!(must, a.clone() & b.clone());
    assert_eq!(should, a.clone() | b);
    assert_eq!(must_not, !a);
}

#[test]
fn groups_nest_as_values() {
    let mut inner = BoolGroup::should();
    inner.extend([
        Query::match_phrase("keyword", "ocean"),
        Query::match_phrase("topicCategory", "ocean"),
    ]);
    assert_eq!(inner.len(), 2);

    let outer = BoolGroup::must()
        .push(Query::exists("title"))
        .push(inner.close(true))
        .close(false);

    let doc = Doc::new().with("title", "t").with("topicCategory", "ocean");
    assert!(matches(&outer, &doc));
    assert!(!matches(&outer, &Doc::new().with("title", "t")));
}

#[test]
fn should_group_without_threshold_records_none() {
    let query = BoolGroup::should()
        .push(Query::match_phrase("title", "a"))
        .close(false);

    assert_eq!(query.as_bool().unwrap().minimum_should_match, None);
}

// ------------------------------------------------------------------
// QueryBuilder
// ------------------------------------------------------------------

#[test]
fn empty_builder_fails_to_build() {
    let folders = folders();
    let builder = QueryBuilder::new(&Unranked, &folders, false);

    assert!(builder.is_empty());

    let err = builder.build(false).unwrap_err();
    assert!(matches!(err, QueryError::EmptyAssembly));
    assert_eq!(err.class(), ErrorClass::Malformed);
}

#[test]
fn single_clause_becomes_the_search_root() {
    let folders = folders();
    let search = Query::match_phrase("title", "Ocean");

    let compiled = QueryBuilder::new(&Unranked, &folders, false)
        .append(search.clone())
        .build(true)
        .unwrap();

    assert_eq!(*compiled, search & deleted_excluded_query());
}

#[test]
fn later_clauses_are_conjoined() {
    let folders = folders();
    let a = Query::match_phrase("title", "a");
    let b = Query::exists("keyword");
    let c = Query::match_phrase("topicCategory", "c");

    let compiled = QueryBuilder::new(&Unranked, &folders, true)
        .append(a.clone())
        .append_all([b.clone(), c.clone()])
        .build(true)
        .unwrap();

    let root = compiled.as_bool().unwrap();
    assert_eq!(root.must.len(), 2);
    assert_eq!(
        root.must[0],
        BoolQuery::new().must(a).must(b).must(c).into_query()
    );
}

#[test]
fn search_mode_conjoins_weighted_baseline() {
    let folders = folders();
    let ranking = WeightedRanking::new().with_weight(&Queryable::ACCESS_QUALITY, 2.0);

    let compiled = QueryBuilder::new(&ranking, &folders, false)
        .append(Query::match_phrase("title", "Ocean"))
        .build(false)
        .unwrap();

    assert_eq!(
        compiled.as_bool().unwrap().must[1],
        basic_query(&ranking, false, false)
    );
}

#[test]
fn count_mode_excludes_deleted_records() {
    let folders = folders();

    let compiled = QueryBuilder::new(&Unranked, &folders, false)
        .append(Query::match_phrase("title", "Ocean"))
        .build(true)
        .unwrap();

    let live = Doc::new().with("title", "Ocean");
    assert!(matches(&compiled, &live));
    assert!(matches(&compiled, &live.clone().with("isDeleted", "false")));
    assert!(!matches(&compiled, &live.with("isDeleted", "true")));
}

#[test]
fn compiled_query_serializes_transparently() {
    let folders = folders();

    let compiled = QueryBuilder::new(&Unranked, &folders, false)
        .append(Query::exists("title"))
        .build(true)
        .unwrap();

    assert_eq!(
        serde_json::to_value(&compiled).unwrap(),
        json!({
            "bool": {
                "must": [
                    { "exists": { "field": "title" } },
                    {
                        "bool": {
                            "should": [
                                { "bool": { "must_not": [{ "exists": { "field": "isDeleted" } }] } },
                                { "match_phrase": { "isDeleted": { "query": "false" } } }
                            ],
                            "minimum_should_match": "1"
                        }
                    }
                ]
            }
        })
    );
    assert_eq!(
        serde_json::to_value(compiled.clone().into_inner()).unwrap(),
        serde_json::to_value(&compiled).unwrap()
    );
}

// ------------------------------------------------------------------
// Context helpers
// ------------------------------------------------------------------

#[test]
fn source_id_helper_uses_builder_folders() {
    let folders = folders();
    let builder = QueryBuilder::new(&Unranked, &folders, false);

    assert_eq!(
        builder.source_id_query(&Bond::source_id("src-local")),
        templates::source_id_query(&folders, "src-local")
    );
    assert_eq!(
        builder.source_id_query(&Bond::source_id("src-remote")),
        Query::match_phrase("sourceId", "src-remote")
    );
}

#[test]
fn metadata_helpers_use_builder_ranking() {
    let folders = folders();
    let ranking = WeightedRanking::new().with_weight(&Queryable::TITLE, 4.0);
    let builder = QueryBuilder::new(&ranking, &folders, false);

    let title = builder
        .metadata_element_query(&Queryable::TITLE, BondOperator::Equal, "Ocean")
        .unwrap();
    assert_eq!(title.boost(), Some(4.0));

    let bond = Bond::new(Queryable::TITLE, BondOperator::Like, "Oce*");
    assert_eq!(builder.translate(&bond).unwrap().boost(), Some(4.0));

    let subject = builder.subject_query(BondOperator::Equal, "ocean").unwrap();
    assert_eq!(subject.as_bool().unwrap().should.len(), 2);
}

#[test]
fn unsupported_operator_surfaces_through_helpers() {
    let folders = folders();
    let builder = QueryBuilder::new(&Unranked, &folders, false);

    let err = builder
        .metadata_element_query(&Queryable::TITLE, BondOperator::Bbox, "x")
        .unwrap_err();

    assert_eq!(err.class(), ErrorClass::Unsupported);
}

#[test]
fn min_max_helper_pins_extremum() {
    let folders = folders();
    let builder = QueryBuilder::new(&Unranked, &folders, false);

    let query = builder
        .min_max_value_query(&Fixed(3.0), None, "depth", Extremum::Max, false)
        .unwrap();

    assert_eq!(query, Query::match_phrase("depth", "3"));
}

// ------------------------------------------------------------------
// Configured compile
// ------------------------------------------------------------------

#[test]
fn configured_search_compiles_end_to_end() {
    let config = bondql_config::CompilerConfig::from_toml_str(
        r"
        [ranking.weights]
        title = 3.0
        metadataQuality = 2.0
        ",
    )
    .unwrap();
    let ranking = WeightedRanking::from(&config.ranking);
    let folders = folders();
    let builder = QueryBuilder::new(&ranking, &folders, false);

    let title = builder
        .translate(&Bond::new(Queryable::TITLE, BondOperator::Equal, "Ocean"))
        .unwrap();
    let source = builder.source_id_query(&Bond::source_id("src-local"));
    let compiled = builder.append(title).append(source).build(false).unwrap();

    let record = Doc::new()
        .with("title", "Ocean")
        .with("sourceId", "src-local")
        .with("dataFolder", "folder-a");
    assert!(matches(&compiled, &record));

    let elsewhere = Doc::new()
        .with("title", "Ocean")
        .with("sourceId", "src-local")
        .with("dataFolder", "folder-b");
    assert!(!matches(&compiled, &elsewhere));

    let search = compiled.as_bool().unwrap().must[0].as_bool().unwrap();
    assert_eq!(search.must[0].boost(), Some(3.0));
}
