use crate::model::SpatialExtent;
use serde::{Serialize, Serializer, ser::SerializeStruct};

///
/// ShapeRelation
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeRelation {
    Intersects,
    Contains,
    Within,
    Disjoint,
}

///
/// Envelope
///
/// Rectangle given by its upper-left `[west, north]` and lower-right
/// `[east, south]` corners, as `[lon, lat]` pairs.
///

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    pub upper_left: [f64; 2],
    pub lower_right: [f64; 2],
}

impl From<&SpatialExtent> for Envelope {
    fn from(extent: &SpatialExtent) -> Self {
        Self {
            upper_left: [extent.west, extent.north],
            lower_right: [extent.east, extent.south],
        }
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut shape = serializer.serialize_struct("Envelope", 2)?;
        shape.serialize_field("type", "envelope")?;
        shape.serialize_field("coordinates", &[self.upper_left, self.lower_right])?;
        shape.end()
    }
}
