//! Module: translate
//! Responsibility: lowering bonds to query clauses.
//! Does not own: boolean composition beyond single-bond negation, or the
//! baseline ranking backbone.
//! Boundary: the only place operator semantics are decided; every operator
//! resolves to exactly one rule or a hard error.

mod bond;
mod spatial;


pub use bond::{metadata_element_query, range_query, subject_query, translate};
pub use spatial::{geo_shape_query, shape_relation};
