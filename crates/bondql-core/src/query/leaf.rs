use crate::query::{Envelope, ShapeRelation};

///
/// MatchPhraseQuery
///

#[derive(Clone, Debug, PartialEq)]
pub struct MatchPhraseQuery {
    pub field: String,
    pub query: String,
    pub boost: Option<f32>,
}

///
/// WildcardQuery
///

#[derive(Clone, Debug, PartialEq)]
pub struct WildcardQuery {
    pub field: String,
    pub value: String,
    pub boost: Option<f32>,
}

///
/// ExistsQuery
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExistsQuery {
    pub field: String,
}

///
/// TermQuery
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TermQuery {
    pub field: String,
    pub value: String,
}

///
/// TermsQuery
/// Multi-term membership: the field holds any of `values`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TermsQuery {
    pub field: String,
    pub values: Vec<String>,
}

///
/// GeoShapeQuery
///

#[derive(Clone, Debug, PartialEq)]
pub struct GeoShapeQuery {
    pub field: String,
    pub envelope: Envelope,
    pub relation: ShapeRelation,
    pub boost: f32,
}
