use crate::prelude::*;
use serde::Serialize;

///
/// Func
/// A free function in the catalogue, potentially usable as a
/// constructor.
///

#[derive(Clone, Debug, Serialize)]
pub struct Func {
    pub def: Def,
    pub annotations: AnnotationSet,
    pub ty: Type,
    pub params: Vec<Type>,
    pub results: Vec<Type>,
}

impl Func {
    /// A constructor takes at least one argument and returns exactly
    /// one value.
    #[must_use]
    pub fn is_constructor(&self) -> bool {
        self.results.len() == 1 && !self.params.is_empty()
    }

    /// Eligible for public resolution: exported, not excluded, and a
    /// constructor.
    #[must_use]
    pub fn should_try_to_resolve(&self) -> bool {
        self.def.exported && !self.annotations.is_excluded() && self.is_constructor()
    }

    /// Eligible as a binding target. Zero-parameter functions qualify
    /// only when explicitly marked bindable.
    #[must_use]
    pub fn is_bindable(&self) -> bool {
        if self.results.len() != 1 {
            return false;
        }
        !self.params.is_empty() || self.annotations.is_bindable()
    }

    /// The single constructor result, when there is exactly one.
    #[must_use]
    pub fn result(&self) -> Option<Type> {
        match self.results.as_slice() {
            [result] => Some(*result),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeTable;

    fn func(params: usize, results: usize) -> Func {
        let mut table = TypeTable::new();
        let t = table.opaque("Text");
        let params = vec![t; params];
        let results = vec![t; results];
        let ty = table.func(params.clone(), results.clone());
        Func {
            def: Def::new("app", "NewThing"),
            annotations: AnnotationSet::new(),
            ty,
            params,
            results,
        }
    }

    #[test]
    fn constructor_needs_params_and_single_result() {
        assert!(func(1, 1).is_constructor());
        assert!(!func(0, 1).is_constructor());
        assert!(!func(1, 0).is_constructor());
        assert!(!func(1, 2).is_constructor());
    }

    #[test]
    fn zero_param_funcs_are_bindable_only_when_marked() {
        let mut f = func(0, 1);
        assert!(!f.is_bindable());
        f.annotations.push(Annotation::Bindable);
        assert!(f.is_bindable());
    }

    #[test]
    fn excluded_funcs_are_not_resolved() {
        let mut f = func(1, 1);
        assert!(f.should_try_to_resolve());
        f.annotations.push(Annotation::Excluded);
        assert!(!f.should_try_to_resolve());
    }
}
