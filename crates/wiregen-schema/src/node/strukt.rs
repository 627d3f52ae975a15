use crate::prelude::*;
use serde::Serialize;

///
/// Strukt
/// A concrete struct in the catalogue. Candidates for interface
/// implementations, and the shape the target aggregate must have.
///

#[derive(Clone, Debug, Serialize)]
pub struct Strukt {
    pub def: Def,
    pub annotations: AnnotationSet,
    pub ty: Type,
    pub fields: Vec<Field>,
}
