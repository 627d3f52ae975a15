//! Resolution pipeline.
//!
//! A run is a strict linear sequence over an immutable catalogue:
//!
//! 1. bind every eligible interface to exactly one constructor,
//! 2. derive private constructors to a fixpoint,
//! 3. resolve every eligible public constructor,
//! 4. assemble the deterministic output `Data`.
//!
//! No phase re-enters an earlier one. A phase that accumulated errors
//! stops the run; there is no partial output.

use crate::decls::{Derivation, PrivateDecl};
use crate::error::{Error, ResolveError};
use crate::trace::{ResolveTraceEvent, ResolveTraceSink};
use wiregen_schema::prelude::*;

/// Run the full pipeline for one target aggregate.
pub fn resolve(
    catalogue: &Catalogue,
    library: &str,
    target: &str,
    sink: &dyn ResolveTraceSink,
) -> Result<crate::data::Data, Error> {
    let target_struct = load_target(catalogue, library, target)?;

    let mut resolver = Resolver::new(catalogue, library, target_struct, sink);
    resolver.setup_bindings().map_err(Error::resolution)?;
    resolver.derive_interfaces()?;
    let publics = resolver.resolve_public_funcs().map_err(Error::resolution)?;

    Ok(resolver.assemble(&publics))
}

fn load_target(catalogue: &Catalogue, library: &str, target: &str) -> Result<Strukt, Error> {
    let path = format!("{library}::{target}");
    let Some(node) = catalogue.lookup(library, target) else {
        return Err(Error::resolution(vec![ResolveError::TargetNotFound {
            path,
        }]));
    };
    node.strukt().cloned().ok_or_else(|| {
        Error::resolution(vec![ResolveError::TargetNotAStruct { path }])
    })
}

///
/// Resolver
/// Per-run state. Mutated only by the currently-running phase.
///

pub(crate) struct Resolver<'a> {
    pub(crate) catalogue: &'a Catalogue,
    pub(crate) library: String,
    pub(crate) target: Strukt,
    pub(crate) fields: Vec<Field>,
    pub(crate) bindings: Vec<(Iface, Func)>,
    pub(crate) decls: Vec<PrivateDecl>,
    pub(crate) sink: &'a dyn ResolveTraceSink,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(
        catalogue: &'a Catalogue,
        library: &str,
        target: Strukt,
        sink: &'a dyn ResolveTraceSink,
    ) -> Self {
        let fields = target.fields.clone();
        Self {
            catalogue,
            library: library.to_string(),
            target,
            fields,
            bindings: Vec::new(),
            decls: Vec::new(),
            sink,
        }
    }

    /// Find the derivation for one required type: fields first (an
    /// assignable field may satisfy a broader requirement than its
    /// declared type), then private declarations by strict identity.
    pub(crate) fn find_derivation(&self, t: Type) -> Result<Derivation, String> {
        let types = self.catalogue.types();

        if types.is_empty_interface(t) {
            return Err(format!(
                "the type {} is an empty interface",
                types.qualified_name(t)
            ));
        }

        let matches: Vec<&Field> = self
            .fields
            .iter()
            .filter(|f| types.assignable(f.ty, t))
            .collect();
        if let Some(first) = matches.first() {
            if matches.len() > 1 {
                self.sink.on_event(ResolveTraceEvent::FieldAmbiguity {
                    required: types.qualified_name(t),
                    chosen: first.ident.clone(),
                    also: matches[1..].iter().map(|f| f.ident.clone()).collect(),
                });
            }
            return Ok(Derivation::Field {
                ident: first.ident.clone(),
                ty: first.ty,
            });
        }

        for decl in &self.decls {
            if types.identical(decl.return_type(), t) {
                return Ok(Derivation::Private {
                    func: decl.func_name(),
                    ty: decl.return_type(),
                });
            }
        }

        Err(format!(
            "no derivation found for {}",
            types.qualified_name(t)
        ))
    }

    /// Derive every parameter of a function, accumulating the reason
    /// for each one that fails.
    pub(crate) fn find_params(&self, func: &Func) -> Result<Vec<Derivation>, Vec<String>> {
        let mut params = Vec::new();
        let mut errs = Vec::new();
        for &t in &func.params {
            match self.find_derivation(t) {
                Ok(derivation) => params.push(derivation),
                Err(e) => errs.push(e),
            }
        }
        if errs.is_empty() { Ok(params) } else { Err(errs) }
    }
}
