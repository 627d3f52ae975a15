//! JSON manifest front end.
//!
//! The manifest is how an external scanner hands wiregen its world: a
//! flat description of structs, interfaces, and functions with type
//! references by qualified name. Named types unify nominally, so
//! declaration order between entries does not matter; a reference to
//! an undeclared `pkg::Ident` still interns as an opaque named type.

use crate::catalogue::{Catalogue, CatalogueBuilder};
use crate::prelude::*;
use serde::Deserialize;
use std::collections::BTreeMap;

///
/// Manifest
///

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub structs: Vec<StruktDef>,

    #[serde(default)]
    pub interfaces: Vec<IfaceDef>,

    #[serde(default)]
    pub functions: Vec<FuncDef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StruktDef {
    pub pkg: String,
    pub ident: String,

    #[serde(default = "default_true")]
    pub exported: bool,

    #[serde(default)]
    pub doc: Vec<String>,

    #[serde(default)]
    pub fields: Vec<FieldDef>,

    #[serde(default)]
    pub methods: Vec<MethodDef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct IfaceDef {
    pub pkg: String,
    pub ident: String,

    #[serde(default = "default_true")]
    pub exported: bool,

    #[serde(default)]
    pub doc: Vec<String>,

    #[serde(default)]
    pub methods: Vec<MethodDef>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FuncDef {
    pub pkg: String,
    pub ident: String,

    #[serde(default = "default_true")]
    pub exported: bool,

    #[serde(default)]
    pub doc: Vec<String>,

    #[serde(default)]
    pub params: Vec<String>,

    #[serde(default)]
    pub results: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FieldDef {
    pub ident: String,
    pub ty: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MethodDef {
    pub ident: String,

    #[serde(default)]
    pub params: Vec<String>,

    #[serde(default)]
    pub results: Vec<String>,

    #[serde(default)]
    pub pointer_receiver: bool,
}

impl Manifest {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Build the catalogue. All construction and annotation problems
    /// are reported together.
    pub fn build(&self) -> Result<Catalogue, ErrorTree> {
        let mut builder = CatalogueBuilder::new();

        for def in &self.structs {
            let route = format!("{}::{}", def.pkg, def.ident);
            let table = builder.types_mut();
            let ty = table.named(&def.pkg, &def.ident);

            let fields: Vec<Field> = def
                .fields
                .iter()
                .map(|f| Field::new(&f.ident, resolve_ref(table, &f.ty)))
                .collect();
            let underlying = table.intern(TypeKind::Struct {
                fields: fields.iter().map(|f| (f.ident.clone(), f.ty)).collect(),
            });
            table.set_underlying(ty, underlying);

            for method in &def.methods {
                let sig = method_sig(table, method);
                table.add_method(ty, &method.ident, sig, method.pointer_receiver);
            }

            let (annotations, errs) = AnnotationSet::parse_doc(&def.doc);
            builder.add_annotation_errors(&route, errs);

            let mut node_def = Def::new(&def.pkg, &def.ident);
            node_def.exported = def.exported;
            builder.add_strukt(Strukt {
                def: node_def,
                annotations,
                ty,
                fields,
            });
        }

        for def in &self.interfaces {
            let route = format!("{}::{}", def.pkg, def.ident);
            let table = builder.types_mut();
            let ty = table.named(&def.pkg, &def.ident);

            let mut methods = BTreeMap::new();
            for method in &def.methods {
                let sig = method_sig(table, method);
                methods.insert(method.ident.clone(), sig);
            }
            let underlying = table.intern(TypeKind::Interface { methods });
            table.set_underlying(ty, underlying);

            let (annotations, errs) = AnnotationSet::parse_doc(&def.doc);
            builder.add_annotation_errors(&route, errs);

            let mut node_def = Def::new(&def.pkg, &def.ident);
            node_def.exported = def.exported;
            builder.add_iface(Iface {
                def: node_def,
                annotations,
                ty,
            });
        }

        for def in &self.functions {
            let route = format!("{}::{}", def.pkg, def.ident);
            let table = builder.types_mut();

            let params: Vec<Type> = def.params.iter().map(|p| resolve_ref(table, p)).collect();
            let results: Vec<Type> = def.results.iter().map(|r| resolve_ref(table, r)).collect();
            let ty = table.func(params.clone(), results.clone());

            let (annotations, errs) = AnnotationSet::parse_doc(&def.doc);
            builder.add_annotation_errors(&route, errs);

            let mut node_def = Def::new(&def.pkg, &def.ident);
            node_def.exported = def.exported;
            builder.add_func(Func {
                def: node_def,
                annotations,
                ty,
                params,
                results,
            });
        }

        builder.finish()
    }
}

// `&T` is a pointer form, `pkg::Ident` a named type, anything else a
// builtin leaf.
fn resolve_ref(table: &mut TypeTable, text: &str) -> Type {
    let text = text.trim();
    if let Some(rest) = text.strip_prefix('&') {
        let elem = resolve_ref(table, rest);
        return table.pointer(elem);
    }
    match text.rsplit_once("::") {
        Some((pkg, ident)) => table.named(pkg, ident),
        None => table.opaque(text),
    }
}

fn method_sig(table: &mut TypeTable, method: &MethodDef) -> Type {
    let params: Vec<Type> = method.params.iter().map(|p| resolve_ref(table, p)).collect();
    let results: Vec<Type> = method
        .results
        .iter()
        .map(|r| resolve_ref(table, r))
        .collect();
    table.func(params, results)
}

const fn default_true() -> bool {
    true
}
