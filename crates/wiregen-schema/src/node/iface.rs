use crate::prelude::*;
use serde::Serialize;

///
/// Iface
/// An abstract capability type. Binding selects the one constructor
/// that realizes it.
///

#[derive(Clone, Debug, Serialize)]
pub struct Iface {
    pub def: Def,
    pub annotations: AnnotationSet,
    pub ty: Type,
}
