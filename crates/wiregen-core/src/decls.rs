use convert_case::{Case, Casing};
use serde::Serialize;
use wiregen_schema::prelude::*;

///
/// Derivation
///
/// How one required parameter type is satisfied: pulled off the
/// aggregate directly, or produced by a derived private constructor.
/// A closed sum; every consumer matches exhaustively.
///

#[derive(Clone, Debug, Serialize)]
pub enum Derivation {
    Field { ident: String, ty: Type },
    Private { func: String, ty: Type },
}

///
/// PrivateDecl
///
/// Generated intermediate constructor realizing a bound interface.
/// Exists only once all of its parameters had derivations.
///

#[derive(Clone, Debug, Serialize)]
pub struct PrivateDecl {
    pub iface: Iface,
    pub func: Func,
    pub params: Vec<Derivation>,
}

impl PrivateDecl {
    /// Generated method name: flattened interface package plus the
    /// interface identifier.
    #[must_use]
    pub fn func_name(&self) -> String {
        format!(
            "{}_{}",
            self.iface.def.sanitized_pkg(),
            self.iface.def.ident.to_case(Case::Snake)
        )
    }

    /// A private declaration yields the interface type, so it can
    /// satisfy other pending bindings.
    #[must_use]
    pub const fn return_type(&self) -> Type {
        self.iface.ty
    }
}

///
/// PublicDecl
/// Generated top-level constructor wrapping an eligible catalogue
/// function directly.
///

#[derive(Clone, Debug, Serialize)]
pub struct PublicDecl {
    pub func: Func,
    pub params: Vec<Derivation>,
}

impl PublicDecl {
    #[must_use]
    pub fn func_name(&self) -> String {
        format!("resolve_{}", self.func.def.ident.to_case(Case::Snake))
    }
}
