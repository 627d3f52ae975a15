//! Assembly phase.
//!
//! Flattens the declarations into `Data`, the renderer's only input.
//! Everything here is ordered: functions grouped per package in
//! `BTreeMap`s, each group sorted by name, imports deduped and sorted.
//! Two runs over the same catalogue produce byte-identical `Data`.

use crate::data::{Arg, Data, FuncData};
use crate::decls::{Derivation, PrivateDecl, PublicDecl};
use std::collections::{BTreeMap, BTreeSet};
use wiregen_schema::prelude::*;
use wiregen_schema::types::sanitize_pkg;

impl crate::resolver::Resolver<'_> {
    pub(crate) fn assemble(&self, publics: &[PublicDecl]) -> Data {
        let types = self.catalogue.types();
        let receiver = format!("&{}", self.target.def.ident);

        let mut private_funcs: BTreeMap<String, Vec<FuncData>> = BTreeMap::new();
        for decl in &self.decls {
            let data = self.private_func_data(decl, &receiver);
            private_funcs.entry(decl.iface.def.pkg.clone()).or_default().push(data);
        }

        let mut public_funcs: BTreeMap<String, Vec<FuncData>> = BTreeMap::new();
        for decl in publics {
            let ret = decl.func.result().map_or_else(String::new, |r| {
                types.render_name(r, &self.library)
            });
            let data = FuncData {
                imports: vec![decl.func.def.pkg.clone()],
                pkg: decl.func.def.pkg.clone(),
                name: decl.func_name(),
                ret,
                call: self.call_path(&decl.func),
                receiver: receiver.clone(),
                args: self.args_of(&decl.params),
            };
            public_funcs.entry(decl.func.def.pkg.clone()).or_default().push(data);
        }

        for group in private_funcs.values_mut().chain(public_funcs.values_mut()) {
            group.sort_by(|a, b| a.name.cmp(&b.name));
        }

        let imports: BTreeSet<String> = private_funcs
            .values()
            .chain(public_funcs.values())
            .flatten()
            .flat_map(|f| f.imports.iter())
            .filter(|pkg| !pkg.is_empty() && **pkg != self.library)
            .cloned()
            .collect();

        let package = self
            .library
            .rsplit("::")
            .next()
            .unwrap_or(&self.library)
            .to_string();

        Data {
            package,
            target: self.target.def.ident.clone(),
            imports: imports.into_iter().collect(),
            publics: public_funcs,
            privates: private_funcs,
        }
    }

    fn private_func_data(&self, decl: &PrivateDecl, receiver: &str) -> FuncData {
        let types = self.catalogue.types();
        FuncData {
            imports: vec![decl.iface.def.pkg.clone(), decl.func.def.pkg.clone()],
            pkg: decl.iface.def.pkg.clone(),
            name: decl.func_name(),
            ret: types.render_name(decl.return_type(), &self.library),
            call: self.call_path(&decl.func),
            receiver: receiver.to_string(),
            args: self.args_of(&decl.params),
        }
    }

    // The callee keeps its declared ident; only the package prefix is
    // sanitized to match the aliased imports the renderer emits.
    fn call_path(&self, func: &Func) -> String {
        if func.def.pkg == self.library {
            func.def.ident.clone()
        } else {
            format!("{}::{}", sanitize_pkg(&func.def.pkg), func.def.ident)
        }
    }

    fn args_of(&self, params: &[Derivation]) -> Vec<Arg> {
        let types = self.catalogue.types();
        params
            .iter()
            .map(|p| match p {
                Derivation::Field { ident, ty } => Arg::Field {
                    comment: types.qualified_name(*ty),
                    ident: ident.clone(),
                },
                Derivation::Private { func, ty } => Arg::Call {
                    comment: types.qualified_name(*ty),
                    func: func.clone(),
                },
            })
            .collect()
    }
}
