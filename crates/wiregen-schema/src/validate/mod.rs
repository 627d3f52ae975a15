//! Catalogue validation, staged and deterministic.
//!
//! Runs after construction, before any resolution. All findings
//! accumulate; nothing fails fast.

use crate::prelude::*;

pub(crate) fn validate_nodes(nodes: &[Node], errs: &mut ErrorTree) {
    for node in nodes {
        validate_annotations(node, errs);
    }
}

// Annotation combinations that can never mean anything.
fn validate_annotations(node: &Node, errs: &mut ErrorTree) {
    match node {
        Node::Func(func) => {
            if func.annotations.is_excluded() && func.annotations.must_resolve() {
                err!(
                    errs,
                    func.def.path(),
                    "a function cannot be both excluded and must_resolve"
                );
            }
            if func.annotations.resolve_override().is_some() {
                err!(
                    errs,
                    func.def.path(),
                    "resolve overrides apply to interfaces, not functions"
                );
            }
        }
        Node::Iface(iface) => {
            if iface.annotations.must_resolve() {
                err!(
                    errs,
                    iface.def.path(),
                    "must_resolve applies to constructor functions, not interfaces"
                );
            }
        }
        Node::Strukt(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::CatalogueBuilder;

    #[test]
    fn excluded_must_resolve_conflict_is_reported() {
        let mut builder = CatalogueBuilder::new();
        let table = builder.types_mut();
        let text = table.opaque("Text");
        let ty = table.func(vec![text], vec![text]);

        let mut annotations = AnnotationSet::new();
        annotations.push(Annotation::Excluded);
        annotations.push(Annotation::MustResolve);

        builder.add_func(Func {
            def: Def::new("app", "NewThing"),
            annotations,
            ty,
            params: vec![text],
            results: vec![text],
        });

        let errs = builder.finish().unwrap_err();
        assert!(errs.to_string().contains("excluded and must_resolve"));
    }
}
