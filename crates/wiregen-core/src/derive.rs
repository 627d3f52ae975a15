//! Derivation phase.
//!
//! Repeatedly sweeps the bindings, minting a private constructor for
//! every interface whose constructor parameters are all derivable from
//! the target's fields or from previously minted constructors. Each
//! round can only unlock more interfaces, so the sweep monotonically
//! grows and must settle within bindings + 1 rounds. A sweep that does
//! not is a bug in this engine, not in the author's catalogue.

use crate::decls::PrivateDecl;
use crate::error::InternalError;
use crate::trace::ResolveTraceEvent;
use std::collections::BTreeSet;

impl crate::resolver::Resolver<'_> {
    pub(crate) fn derive_interfaces(&mut self) -> Result<(), InternalError> {
        let cap = self.bindings.len() + 1;
        let bindings = self.bindings.clone();
        let mut derived: BTreeSet<String> = BTreeSet::new();

        for round in 0..=cap {
            let mut new = 0;
            for (iface, func) in &bindings {
                if derived.contains(&iface.def.path()) {
                    continue;
                }
                let Ok(params) = self.find_params(func) else {
                    continue;
                };
                self.sink.on_event(ResolveTraceEvent::PrivateDerived {
                    iface: iface.def.path(),
                    func: func.def.path(),
                });
                derived.insert(iface.def.path());
                self.decls.push(PrivateDecl {
                    iface: iface.clone(),
                    func: func.clone(),
                    params,
                });
                new += 1;
            }
            self.sink.on_event(ResolveTraceEvent::DerivationRound {
                round,
                derived: new,
            });
            if new == 0 {
                return Ok(());
            }
        }

        Err(InternalError::invariant_violation(format!(
            "derivation did not settle within {cap} rounds over {} bindings",
            bindings.len()
        )))
    }
}
