use crate::prelude::*;
use std::collections::BTreeMap;

///
/// Catalogue
///
/// Immutable, queryable collection of entities available to a
/// resolution run. Built once, then shared read-only; independent
/// runs may query it concurrently.
///

#[derive(Clone, Debug, Default)]
pub struct Catalogue {
    types: TypeTable,
    nodes: Vec<Node>,
    index: BTreeMap<(String, String), usize>,
}

impl Catalogue {
    #[must_use]
    pub const fn types(&self) -> &TypeTable {
        &self.types
    }

    /// All interfaces, in declaration order.
    pub fn ifaces(&self) -> impl Iterator<Item = &Iface> {
        self.nodes.iter().filter_map(Node::iface)
    }

    /// All functions, in declaration order.
    pub fn funcs(&self) -> impl Iterator<Item = &Func> {
        self.nodes.iter().filter_map(Node::func)
    }

    /// All structs, in declaration order.
    pub fn strukts(&self) -> impl Iterator<Item = &Strukt> {
        self.nodes.iter().filter_map(Node::strukt)
    }

    #[must_use]
    pub fn lookup(&self, pkg: &str, ident: &str) -> Option<&Node> {
        self.index
            .get(&(pkg.to_string(), ident.to_string()))
            .map(|&i| &self.nodes[i])
    }

    /// Concrete struct types assignable to an interface, checking
    /// both value and pointer forms.
    #[must_use]
    pub fn implementations_of(&self, iface: &Iface) -> Vec<Type> {
        let mut found = Vec::new();
        for strukt in self.strukts() {
            if self.types.assignable(strukt.ty, iface.ty) {
                found.push(strukt.ty);
                continue;
            }
            if let Some(ptr) = self.types.pointer_of(strukt.ty) {
                if self.types.assignable(ptr, iface.ty) {
                    found.push(ptr);
                }
            }
        }
        found
    }
}

///
/// CatalogueBuilder
///
/// Front-end facing construction API. Problems accumulate in an
/// [`ErrorTree`]; `finish` reports them all at once.
///

#[derive(Debug, Default)]
pub struct CatalogueBuilder {
    types: TypeTable,
    nodes: Vec<Node>,
    index: BTreeMap<(String, String), usize>,
    errs: ErrorTree,
}

impl CatalogueBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn types_mut(&mut self) -> &mut TypeTable {
        &mut self.types
    }

    pub fn add_strukt(&mut self, strukt: Strukt) {
        // Pre-intern the pointer form so implementation lookup can
        // stay immutable.
        self.types.pointer(strukt.ty);
        self.add_node(Node::Strukt(strukt));
    }

    pub fn add_iface(&mut self, iface: Iface) {
        self.add_node(Node::Iface(iface));
    }

    pub fn add_func(&mut self, func: Func) {
        self.add_node(Node::Func(func));
    }

    pub fn add_annotation_errors(&mut self, route: &str, errs: Vec<AnnotationError>) {
        for e in errs {
            err!(self.errs, route, "{e}");
        }
    }

    pub fn finish(mut self) -> Result<Catalogue, ErrorTree> {
        crate::validate::validate_nodes(&self.nodes, &mut self.errs);
        self.errs.result()?;

        Ok(Catalogue {
            types: self.types,
            nodes: self.nodes,
            index: self.index,
        })
    }

    fn add_node(&mut self, node: Node) {
        let def = node.def();
        let key = (def.pkg.clone(), def.ident.clone());
        if self.index.contains_key(&key) {
            err!(self.errs, def.path(), "duplicate catalogue entry");
            return;
        }
        self.index.insert(key, self.nodes.len());
        self.nodes.push(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iface_with_method(builder: &mut CatalogueBuilder, pkg: &str, ident: &str) -> Iface {
        let table = builder.types_mut();
        let text = table.opaque("Text");
        let sig = table.func(vec![], vec![text]);
        let ty = table.named(pkg, ident);
        let underlying = table.intern(TypeKind::Interface {
            methods: [("get".to_string(), sig)].into_iter().collect(),
        });
        table.set_underlying(ty, underlying);
        Iface {
            def: Def::new(pkg, ident),
            annotations: AnnotationSet::new(),
            ty,
        }
    }

    #[test]
    fn duplicate_entries_are_rejected_together() {
        let mut builder = CatalogueBuilder::new();
        let iface = iface_with_method(&mut builder, "app", "Store");
        builder.add_iface(iface.clone());
        builder.add_iface(iface);

        let errs = builder.finish().unwrap_err();
        assert_eq!(errs.len(), 1);
        assert!(errs.to_string().contains("duplicate catalogue entry"));
    }

    #[test]
    fn implementations_include_pointer_forms() {
        let mut builder = CatalogueBuilder::new();
        let iface = iface_with_method(&mut builder, "app", "Store");

        let table = builder.types_mut();
        let text = table.opaque("Text");
        let sig = table.func(vec![], vec![text]);
        let sql = table.named("app::store", "SqlStore");
        table.add_method(sql, "get", sig, true);

        builder.add_iface(iface.clone());
        builder.add_strukt(Strukt {
            def: Def::new("app::store", "SqlStore"),
            annotations: AnnotationSet::new(),
            ty: sql,
            fields: vec![],
        });

        let catalogue = builder.finish().unwrap();
        let impls = catalogue.implementations_of(&iface);
        assert_eq!(impls.len(), 1);
        assert_eq!(
            catalogue.types().qualified_name(impls[0]),
            "&app::store::SqlStore"
        );
    }

    #[test]
    fn lookup_finds_nodes_by_qualified_name() {
        let mut builder = CatalogueBuilder::new();
        let iface = iface_with_method(&mut builder, "app", "Store");
        builder.add_iface(iface);

        let catalogue = builder.finish().unwrap();
        assert!(catalogue.lookup("app", "Store").is_some());
        assert!(catalogue.lookup("app", "Missing").is_none());
    }
}
