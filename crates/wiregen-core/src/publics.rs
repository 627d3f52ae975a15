//! Public resolution phase.
//!
//! Every exported constructor outside the library package gets a
//! resolver method if its parameters are all derivable. One that is
//! not is silently skipped (with a trace event), unless the author
//! marked it must-resolve, in which case the gap is fatal.

use crate::decls::PublicDecl;
use crate::error::{NameList, ResolveError};
use crate::trace::ResolveTraceEvent;

impl crate::resolver::Resolver<'_> {
    pub(crate) fn resolve_public_funcs(&self) -> Result<Vec<PublicDecl>, Vec<ResolveError>> {
        let mut publics = Vec::new();
        let mut errs = Vec::new();

        for func in self.catalogue.funcs() {
            if func.def.pkg == self.library {
                continue;
            }
            if !func.should_try_to_resolve() {
                continue;
            }
            match self.find_params(func) {
                Ok(params) => {
                    self.sink.on_event(ResolveTraceEvent::PublicResolved {
                        func: func.def.path(),
                    });
                    publics.push(PublicDecl {
                        func: func.clone(),
                        params,
                    });
                }
                Err(details) => {
                    if func.annotations.must_resolve() {
                        errs.push(ResolveError::UnresolvedRequiredConstructor {
                            func: func.def.path(),
                            unresolved: NameList(details),
                        });
                    } else {
                        self.sink.on_event(ResolveTraceEvent::PublicSkipped {
                            func: func.def.path(),
                            detail: details.join("; "),
                        });
                    }
                }
            }
        }

        if errs.is_empty() { Ok(publics) } else { Err(errs) }
    }
}
