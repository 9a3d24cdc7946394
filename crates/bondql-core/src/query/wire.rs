//! Rendering of the query tree in the engine's JSON query DSL.
//!
//! Each node serializes as a single-key object naming the clause type,
//! e.g. `{"match_phrase": {"title": {"query": "Ocean"}}}`.

use crate::query::{Envelope, GeoShapeQuery, Query, RangeQuery, ShapeRelation};
use serde::{Serialize, Serializer, ser::SerializeMap};

/// Empty body used by `match_all` / `match_none`.
#[derive(Serialize)]
struct Empty {}

/// `{ key: value }`
struct Keyed<'a, T>(&'a str, T);

impl<T: Serialize> Serialize for Keyed<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0, &self.1)?;
        map.end()
    }
}

#[derive(Serialize)]
struct PhraseBody<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    boost: Option<f32>,
}

#[derive(Serialize)]
struct ValueBody<'a> {
    value: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    boost: Option<f32>,
}

#[derive(Serialize)]
struct ExistsBody<'a> {
    field: &'a str,
}

#[derive(Serialize)]
struct ShapeBody<'a> {
    shape: &'a Envelope,
    relation: ShapeRelation,
}

struct RangeBody<'a>(&'a RangeQuery);

impl Serialize for RangeBody<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let range = self.0;
        Keyed(&range.field, Keyed(range.bound.key(), &range.value)).serialize(serializer)
    }
}

struct GeoShapeBody<'a>(&'a GeoShapeQuery);

impl Serialize for GeoShapeBody<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let geo = self.0;
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(
            &geo.field,
            &ShapeBody {
                shape: &geo.envelope,
                relation: geo.relation,
            },
        )?;
        map.serialize_entry("boost", &geo.boost)?;
        map.end()
    }
}

impl Serialize for Query {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::MatchAll => Keyed("match_all", Empty {}).serialize(serializer),
            Self::MatchNone => Keyed("match_none", Empty {}).serialize(serializer),
            Self::MatchPhrase(q) => Keyed(
                "match_phrase",
                Keyed(
                    &q.field,
                    PhraseBody {
                        query: &q.query,
                        boost: q.boost,
                    },
                ),
            )
            .serialize(serializer),
            Self::Range(q) => Keyed("range", RangeBody(q)).serialize(serializer),
            Self::Wildcard(q) => Keyed(
                "wildcard",
                Keyed(
                    &q.field,
                    ValueBody {
                        value: &q.value,
                        boost: q.boost,
                    },
                ),
            )
            .serialize(serializer),
            Self::Exists(q) => {
                Keyed("exists", ExistsBody { field: &q.field }).serialize(serializer)
            }
            Self::Term(q) => Keyed(
                "term",
                Keyed(
                    &q.field,
                    ValueBody {
                        value: &q.value,
                        boost: None,
                    },
                ),
            )
            .serialize(serializer),
            Self::Terms(q) => Keyed("terms", Keyed(&q.field, &q.values)).serialize(serializer),
            Self::GeoShape(q) => Keyed("geo_shape", GeoShapeBody(q)).serialize(serializer),
            Self::Bool(node) => Keyed("bool", node).serialize(serializer),
        }
    }
}
