pub mod annotation;
pub mod def;
pub mod field;
pub mod func;
pub mod iface;
pub mod strukt;

pub use annotation::{Annotation, AnnotationSet};
pub use def::Def;
pub use field::Field;
pub use func::Func;
pub use iface::Iface;
pub use strukt::Strukt;

use crate::prelude::*;
use serde::Serialize;

///
/// Node
///
/// One catalogue entry. A closed union: the resolution pipeline
/// matches exhaustively on the three shapes.
///

#[derive(Clone, Debug, Serialize)]
pub enum Node {
    Func(Func),
    Iface(Iface),
    Strukt(Strukt),
}

impl Node {
    #[must_use]
    pub const fn def(&self) -> &Def {
        match self {
            Self::Func(node) => &node.def,
            Self::Iface(node) => &node.def,
            Self::Strukt(node) => &node.def,
        }
    }

    #[must_use]
    pub const fn func(&self) -> Option<&Func> {
        match self {
            Self::Func(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub const fn iface(&self) -> Option<&Iface> {
        match self {
            Self::Iface(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub const fn strukt(&self) -> Option<&Strukt> {
        match self {
            Self::Strukt(node) => Some(node),
            _ => None,
        }
    }
}
