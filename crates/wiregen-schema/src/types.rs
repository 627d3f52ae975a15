use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

///
/// Type
///
/// Opaque interned handle. Resolution code never inspects type
/// structure directly; it goes through the `TypeOracle` predicates.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Type(u32);

///
/// TypeOracle
///
/// The comparison contract the resolution core consumes. `TypeTable`
/// is the in-tree implementation; an external front end with its own
/// type checker can provide another.
///

pub trait TypeOracle {
    /// Strict type equality.
    fn identical(&self, a: Type, b: Type) -> bool;

    /// Does a value of type `a` satisfy a requirement of type `b`?
    fn assignable(&self, a: Type, b: Type) -> bool;

    /// True for interface types with an empty method set.
    fn is_empty_interface(&self, t: Type) -> bool;

    /// Human-readable name, used in diagnostics and argument comments.
    fn qualified_name(&self, t: Type) -> String;
}

///
/// NamedMethod
/// A method attached to a named type.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct NamedMethod {
    pub sig: Type,
    pub pointer_receiver: bool,
}

///
/// TypeKind
///
/// Named types are nominal (identity is `pkg::Ident`); everything
/// else is structural and deduplicated by interning.
///

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[remain::sorted]
pub enum TypeKind {
    Func {
        params: Vec<Type>,
        results: Vec<Type>,
    },
    Interface {
        methods: BTreeMap<String, Type>,
    },
    Named {
        pkg: String,
        ident: String,
    },
    Opaque {
        ident: String,
    },
    Pointer {
        elem: Type,
    },
    Struct {
        fields: Vec<(String, Type)>,
    },
}

///
/// TypeTable
///
/// Hand-rolled symbol table backing the oracle. Underlying shapes and
/// method sets of named types live in side tables so that mutually
/// referential declarations can be registered in any order.
///

#[derive(Clone, Debug, Default)]
pub struct TypeTable {
    kinds: Vec<TypeKind>,
    index: HashMap<TypeKind, u32>,
    underlying: HashMap<Type, Type>,
    methods: HashMap<Type, BTreeMap<String, NamedMethod>>,
}

impl TypeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a kind, returning the canonical handle for it.
    pub fn intern(&mut self, kind: TypeKind) -> Type {
        if let Some(&idx) = self.index.get(&kind) {
            return Type(idx);
        }
        let idx = u32::try_from(self.kinds.len()).expect("type table overflow");
        self.kinds.push(kind.clone());
        self.index.insert(kind, idx);
        Type(idx)
    }

    pub fn named(&mut self, pkg: impl Into<String>, ident: impl Into<String>) -> Type {
        self.intern(TypeKind::Named {
            pkg: pkg.into(),
            ident: ident.into(),
        })
    }

    pub fn opaque(&mut self, ident: impl Into<String>) -> Type {
        self.intern(TypeKind::Opaque {
            ident: ident.into(),
        })
    }

    pub fn pointer(&mut self, elem: Type) -> Type {
        self.intern(TypeKind::Pointer { elem })
    }

    pub fn func(&mut self, params: Vec<Type>, results: Vec<Type>) -> Type {
        self.intern(TypeKind::Func { params, results })
    }

    /// Lookup-only pointer form; `None` if it was never interned.
    #[must_use]
    pub fn pointer_of(&self, elem: Type) -> Option<Type> {
        self.index.get(&TypeKind::Pointer { elem }).map(|&i| Type(i))
    }

    pub fn set_underlying(&mut self, named: Type, underlying: Type) {
        self.underlying.insert(named, underlying);
    }

    pub fn add_method(
        &mut self,
        named: Type,
        ident: impl Into<String>,
        sig: Type,
        pointer_receiver: bool,
    ) {
        self.methods.entry(named).or_default().insert(
            ident.into(),
            NamedMethod {
                sig,
                pointer_receiver,
            },
        );
    }

    #[must_use]
    pub fn kind(&self, t: Type) -> &TypeKind {
        &self.kinds[t.0 as usize]
    }

    #[must_use]
    pub fn underlying(&self, t: Type) -> Option<Type> {
        self.underlying.get(&t).copied()
    }

    /// Required method set if `t` is (or names) an interface.
    #[must_use]
    pub fn interface_methods(&self, t: Type) -> Option<&BTreeMap<String, Type>> {
        match self.kind(t) {
            TypeKind::Interface { methods } => Some(methods),
            TypeKind::Named { .. } => self.underlying(t).and_then(|u| self.interface_methods(u)),
            _ => None,
        }
    }

    /// Provided method set of a concrete type. The value form carries
    /// only value-receiver methods; the pointer form carries all.
    #[must_use]
    pub fn method_set(&self, t: Type) -> BTreeMap<String, Type> {
        match self.kind(t) {
            TypeKind::Named { .. } => {
                if let Some(methods) = self.interface_methods(t) {
                    return methods.clone();
                }
                self.methods
                    .get(&t)
                    .map(|m| {
                        m.iter()
                            .filter(|(_, method)| !method.pointer_receiver)
                            .map(|(name, method)| (name.clone(), method.sig))
                            .collect()
                    })
                    .unwrap_or_default()
            }
            TypeKind::Pointer { elem } => self
                .methods
                .get(elem)
                .map(|m| {
                    m.iter()
                        .map(|(name, method)| (name.clone(), method.sig))
                        .collect()
                })
                .unwrap_or_default(),
            TypeKind::Interface { methods } => methods.clone(),
            _ => BTreeMap::new(),
        }
    }

    /// Alias-qualified name as emitted by the renderer. Types local to
    /// `library` stay bare.
    #[must_use]
    pub fn render_name(&self, t: Type, library: &str) -> String {
        match self.kind(t) {
            TypeKind::Named { pkg, ident } if pkg == library => ident.clone(),
            TypeKind::Named { pkg, ident } => {
                format!("{}::{ident}", sanitize_pkg(pkg))
            }
            TypeKind::Opaque { ident } => ident.clone(),
            TypeKind::Pointer { elem } => format!("&{}", self.render_name(*elem, library)),
            _ => self.qualified_name(t),
        }
    }
}

impl TypeOracle for TypeTable {
    fn identical(&self, a: Type, b: Type) -> bool {
        a == b
    }

    fn assignable(&self, a: Type, b: Type) -> bool {
        if a == b {
            return true;
        }
        let Some(required) = self.interface_methods(b) else {
            return false;
        };
        if required.is_empty() {
            return true;
        }
        let provided = self.method_set(a);
        required
            .iter()
            .all(|(name, sig)| provided.get(name).is_some_and(|s| s == sig))
    }

    fn is_empty_interface(&self, t: Type) -> bool {
        self.interface_methods(t).is_some_and(BTreeMap::is_empty)
    }

    fn qualified_name(&self, t: Type) -> String {
        match self.kind(t) {
            TypeKind::Func { params, results } => {
                let params = params
                    .iter()
                    .map(|p| self.qualified_name(*p))
                    .collect::<Vec<_>>()
                    .join(", ");
                match results.as_slice() {
                    [] => format!("fn({params})"),
                    [result] => format!("fn({params}) -> {}", self.qualified_name(*result)),
                    many => {
                        let results = many
                            .iter()
                            .map(|r| self.qualified_name(*r))
                            .collect::<Vec<_>>()
                            .join(", ");
                        format!("fn({params}) -> ({results})")
                    }
                }
            }
            TypeKind::Interface { methods } => {
                let names = methods.keys().cloned().collect::<Vec<_>>().join(", ");
                format!("interface {{ {names} }}")
            }
            TypeKind::Named { pkg, ident } => format!("{pkg}::{ident}"),
            TypeKind::Opaque { ident } => ident.clone(),
            TypeKind::Pointer { elem } => format!("&{}", self.qualified_name(*elem)),
            TypeKind::Struct { fields } => {
                let names = fields
                    .iter()
                    .map(|(name, _)| name.clone())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("struct {{ {names} }}")
            }
        }
    }
}

/// Flatten an import path into a stable identifier segment.
#[must_use]
pub fn sanitize_pkg(pkg: &str) -> String {
    pkg.replace("::", "_").replace(['.', '/', '-', ':'], "_")
}
