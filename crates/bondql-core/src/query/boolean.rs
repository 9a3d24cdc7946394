use crate::query::Query;
use serde::{Serialize, Serializer};

///
/// BoolQuery
///
/// Boolean node of the query tree.
///
/// - `filter` constrains inclusion and never contributes to score
/// - `must` constrains inclusion; scoring is whatever the engine defaults to
/// - `must_not` excludes
/// - `should` only scores, unless `minimum_should_match` is set, in which
///   case at least that many branches must match
///

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BoolQuery {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub must: Vec<Query>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub should: Vec<Query>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub must_not: Vec<Query>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter: Vec<Query>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "minimum_should_match_text"
    )]
    pub minimum_should_match: Option<u32>,
}

impl BoolQuery {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            must: Vec::new(),
            should: Vec::new(),
            must_not: Vec::new(),
            filter: Vec::new(),
            minimum_should_match: None,
        }
    }

    #[must_use]
    pub fn must(mut self, query: Query) -> Self {
        self.must.push(query);
        self
    }

    #[must_use]
    pub fn musts(mut self, queries: impl IntoIterator<Item = Query>) -> Self {
        self.must.extend(queries);
        self
    }

    #[must_use]
    pub fn should(mut self, query: Query) -> Self {
        self.should.push(query);
        self
    }

    #[must_use]
    pub fn shoulds(mut self, queries: impl IntoIterator<Item = Query>) -> Self {
        self.should.extend(queries);
        self
    }

    #[must_use]
    pub fn must_not(mut self, query: Query) -> Self {
        self.must_not.push(query);
        self
    }

    #[must_use]
    pub fn must_nots(mut self, queries: impl IntoIterator<Item = Query>) -> Self {
        self.must_not.extend(queries);
        self
    }

    #[must_use]
    pub fn filter(mut self, query: Query) -> Self {
        self.filter.push(query);
        self
    }

    #[must_use]
    pub fn filters(mut self, queries: impl IntoIterator<Item = Query>) -> Self {
        self.filter.extend(queries);
        self
    }

    #[must_use]
    pub const fn minimum_should_match(mut self, count: u32) -> Self {
        self.minimum_should_match = Some(count);
        self
    }

    #[must_use]
    pub fn into_query(self) -> Query {
        Query::Bool(self)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.must.is_empty()
            && self.should.is_empty()
            && self.must_not.is_empty()
            && self.filter.is_empty()
    }
}

// The engine accepts the count as a string ("1"), the form it echoes back.
// `serialize_with` fixes the by-reference signature.
#[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref)]
fn minimum_should_match_text<S: Serializer>(
    value: &Option<u32>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(count) => serializer.collect_str(count),
        None => serializer.serialize_none(),
    }
}
