use crate::types::sanitize_pkg;
use serde::Serialize;

///
/// Def
/// Identity of a catalogue entry: owning package path plus identifier.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Def {
    pub pkg: String,
    pub ident: String,
    pub exported: bool,
}

impl Def {
    #[must_use]
    pub fn new(pkg: impl Into<String>, ident: impl Into<String>) -> Self {
        Self {
            pkg: pkg.into(),
            ident: ident.into(),
            exported: true,
        }
    }

    /// Fully qualified route, used as the error/trace key.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}::{}", self.pkg, self.ident)
    }

    /// Package path flattened into a valid identifier segment.
    #[must_use]
    pub fn sanitized_pkg(&self) -> String {
        sanitize_pkg(&self.pkg)
    }
}
