//! Reference evaluator used by tests to check inclusion semantics of a
//! compiled tree against in-memory documents. Scoring is not modelled.

use crate::query::{BoolQuery, Query, RangeBound, RangeQuery, RangeValue};
use std::{cmp::Ordering, collections::BTreeMap};

///
/// Doc
/// Field name → indexed values (fields may be multi-valued).
///

#[derive(Clone, Debug, Default)]
pub(crate) struct Doc {
    fields: BTreeMap<String, Vec<String>>,
}

impl Doc {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, field: &str, value: &str) -> Self {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(value.to_string());
        self
    }

    fn values(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Whether the engine would include `doc` for `query`.
pub(crate) fn matches(query: &Query, doc: &Doc) -> bool {
    match query {
        Query::MatchAll => true,
        Query::MatchNone => false,
        Query::MatchPhrase(q) => doc.values(&q.field).iter().any(|v| *v == q.query),
        Query::Exists(q) => !doc.values(&q.field).is_empty(),
        Query::Term(q) => doc.values(&q.field).iter().any(|v| *v == q.value),
        Query::Terms(q) => doc
            .values(&q.field)
            .iter()
            .any(|v| q.values.contains(v)),
        Query::Wildcard(q) => doc
            .values(&q.field)
            .iter()
            .any(|v| wildcard_match(q.value.as_bytes(), v.as_bytes())),
        Query::Range(q) => doc.values(&q.field).iter().any(|v| range_match(q, v)),
        Query::GeoShape(_) => panic!("geo-shape evaluation is not modelled"),
        Query::Bool(node) => bool_match(node, doc),
    }
}

fn bool_match(node: &BoolQuery, doc: &Doc) -> bool {
    let required = node.must.iter().chain(&node.filter).all(|q| matches(q, doc));
    let excluded = node.must_not.iter().any(|q| matches(q, doc));

    // Engine default: a should-only node needs one branch, otherwise none.
    let minimum = node.minimum_should_match.unwrap_or_else(|| {
        u32::from(node.must.is_empty() && node.filter.is_empty() && !node.should.is_empty())
    });
    let matched = node.should.iter().filter(|q| matches(q, doc)).count();

    required && !excluded && matched >= minimum as usize
}

fn range_match(range: &RangeQuery, stored: &str) -> bool {
    let ordering = match &range.value {
        RangeValue::Integer(bound) => stored.parse::<i64>().ok().map(|v| v.cmp(bound)),
        RangeValue::Float(bound) => stored.parse::<f64>().ok().and_then(|v| v.partial_cmp(bound)),
        RangeValue::Text(bound) => Some(stored.cmp(bound.as_str())),
    };

    ordering.is_some_and(|ordering| match range.bound {
        RangeBound::Gt => ordering == Ordering::Greater,
        RangeBound::Gte => ordering != Ordering::Less,
        RangeBound::Lt => ordering == Ordering::Less,
        RangeBound::Lte => ordering != Ordering::Greater,
    })
}

fn wildcard_match(pattern: &[u8], text: &[u8]) -> bool {
    match (pattern.first(), text.first()) {
        (None, None) => true,
        (Some(b'*'), _) => {
            wildcard_match(&pattern[1..], text)
                || (!text.is_empty() && wildcard_match(pattern, &text[1..]))
        }
        (Some(b'?'), Some(_)) => wildcard_match(&pattern[1..], &text[1..]),
        (Some(p), Some(t)) if p == t => wildcard_match(&pattern[1..], &text[1..]),
        _ => false,
    }
}
