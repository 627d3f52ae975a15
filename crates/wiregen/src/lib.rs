//! Umbrella crate tying the wiregen pipeline together.
//!
//! Manifest JSON goes in one end; generated Rust source comes out the
//! other. The stages stay independently usable: `wiregen-schema`
//! builds the catalogue, `wiregen-core` resolves it, `wiregen-build`
//! renders the result.

pub use wiregen_build as build;
pub use wiregen_core as engine;
pub use wiregen_schema as schema;

use thiserror::Error as ThisError;
use wiregen_core::trace::ResolveTraceSink;
use wiregen_schema::manifest::Manifest;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] wiregen_schema::Error),

    #[error(transparent)]
    Resolve(#[from] wiregen_core::error::Error),

    #[error(transparent)]
    Render(#[from] wiregen_build::RenderError),
}

/// Run the full pipeline: parse and build the catalogue, resolve the
/// target aggregate, render the source. Any stage failing aborts the
/// run; there is no partial output.
pub fn generate_source(
    manifest_json: &str,
    library: &str,
    target: &str,
    sink: &dyn ResolveTraceSink,
) -> Result<String, Error> {
    let manifest = Manifest::from_json(manifest_json).map_err(wiregen_schema::Error::from)?;
    let catalogue = manifest.build().map_err(wiregen_schema::Error::from)?;
    let data = wiregen_core::resolve(&catalogue, library, target, sink)?;

    Ok(wiregen_build::generate(&data)?)
}

pub mod prelude {
    pub use crate::{Error, generate_source};
    pub use wiregen_build::{RenderError, generate};
    pub use wiregen_core::data::{Arg, Data, FuncData};
    pub use wiregen_core::error::{ResolveError, ResolveErrors};
    pub use wiregen_core::resolve;
    pub use wiregen_core::trace::{
        MemorySink, NullTraceSink, ResolveTraceEvent, ResolveTraceSink, SkipReason,
    };
    pub use wiregen_schema::manifest::Manifest;
    pub use wiregen_schema::prelude::*;
}
