use crate::types::Type;
use serde::Serialize;

///
/// Field
/// A data member of the target aggregate. Fields are always
/// derivable: the value already exists on the struct being wired.
///

#[derive(Clone, Debug, Serialize)]
pub struct Field {
    pub ident: String,
    pub ty: Type,
}

impl Field {
    #[must_use]
    pub fn new(ident: impl Into<String>, ty: Type) -> Self {
        Self {
            ident: ident.into(),
            ty,
        }
    }
}
