//! Binding phase.
//!
//! Walks the catalogue's interfaces in declaration order and pairs
//! each eligible one with exactly one constructor. Ambiguity is never
//! broken by a tiebreak: it is reported, and the author disambiguates
//! with a resolve override.

use crate::error::{NameList, ResolveError};
use crate::resolver::Resolver;
use crate::trace::{ResolveTraceEvent, SkipReason};
use wiregen_schema::prelude::*;

impl Resolver<'_> {
    pub(crate) fn setup_bindings(&mut self) -> Result<(), Vec<ResolveError>> {
        let catalogue = self.catalogue;
        let sink = self.sink;
        let types = catalogue.types();
        let mut errs = Vec::new();

        for iface in catalogue.ifaces() {
            if iface.annotations.is_excluded() {
                sink.on_event(ResolveTraceEvent::InterfaceSkipped {
                    iface: iface.def.path(),
                    reason: SkipReason::Excluded,
                });
                continue;
            }
            if types.is_empty_interface(iface.ty) {
                sink.on_event(ResolveTraceEvent::InterfaceSkipped {
                    iface: iface.def.path(),
                    reason: SkipReason::EmptyInterface,
                });
                continue;
            }
            if !iface.def.exported {
                sink.on_event(ResolveTraceEvent::InterfaceSkipped {
                    iface: iface.def.path(),
                    reason: SkipReason::Unexported,
                });
                continue;
            }

            // An override short-circuits discovery entirely.
            if let Some((pkg, name)) = iface.annotations.resolve_override() {
                let pkg = pkg.unwrap_or(iface.def.pkg.as_str()).to_string();
                let target = format!("{pkg}::{name}");
                match catalogue.lookup(&pkg, name) {
                    None => errs.push(ResolveError::OverrideTargetNotFound {
                        iface: iface.def.path(),
                        target,
                    }),
                    Some(node) => match node.func() {
                        None => errs.push(ResolveError::OverrideTargetNotAFunction {
                            iface: iface.def.path(),
                            target,
                        }),
                        Some(func) => {
                            sink.on_event(ResolveTraceEvent::BindingChosen {
                                iface: iface.def.path(),
                                func: func.def.path(),
                            });
                            self.bindings.push((iface.clone(), func.clone()));
                        }
                    },
                }
                continue;
            }

            let impls = catalogue.implementations_of(iface);
            if impls.is_empty() {
                sink.on_event(ResolveTraceEvent::InterfaceSkipped {
                    iface: iface.def.path(),
                    reason: SkipReason::NoImplementation,
                });
                continue;
            }
            if impls.len() > 1 {
                errs.push(ResolveError::AmbiguousImplementation {
                    iface: iface.def.path(),
                    candidates: NameList(
                        impls.iter().map(|&t| types.qualified_name(t)).collect(),
                    ),
                });
                continue;
            }
            let impl_ty = impls[0];

            let ctors: Vec<&Func> = catalogue
                .funcs()
                .filter(|f| {
                    f.is_bindable()
                        && f.result().is_some_and(|r| types.identical(r, impl_ty))
                })
                .collect();
            match ctors.as_slice() {
                [] => sink.on_event(ResolveTraceEvent::InterfaceSkipped {
                    iface: iface.def.path(),
                    reason: SkipReason::NoConstructor,
                }),
                [func] => {
                    sink.on_event(ResolveTraceEvent::BindingChosen {
                        iface: iface.def.path(),
                        func: func.def.path(),
                    });
                    self.bindings.push((iface.clone(), (*func).clone()));
                }
                many => errs.push(ResolveError::AmbiguousConstructor {
                    iface: iface.def.path(),
                    impl_ty: types.qualified_name(impl_ty),
                    candidates: NameList(many.iter().map(|f| f.def.path()).collect()),
                }),
            }
        }

        if errs.is_empty() { Ok(()) } else { Err(errs) }
    }
}
