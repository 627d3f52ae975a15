//! Catalogue and type table for wiregen.
//!
//! This crate is the "world" side of the generator: entity nodes,
//! structured annotations, the type oracle, and the JSON manifest
//! front end. The resolution core consumes it read-only.

pub mod catalogue;
pub mod error;
pub mod manifest;
pub mod node;
pub mod types;
pub mod validate;

use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        catalogue::{Catalogue, CatalogueBuilder},
        err,
        error::ErrorTree,
        node::*,
        node::annotation::AnnotationError,
        types::{Type, TypeKind, TypeOracle, TypeTable},
    };
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("catalogue construction failed:\n{0}")]
    Build(error::ErrorTree),

    #[error("manifest is not valid JSON: {0}")]
    Manifest(#[from] serde_json::Error),
}

impl From<error::ErrorTree> for Error {
    fn from(errs: error::ErrorTree) -> Self {
        Self::Build(errs)
    }
}
