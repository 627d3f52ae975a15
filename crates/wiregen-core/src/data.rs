use serde::Serialize;
use std::collections::BTreeMap;

///
/// Arg
/// One rendered call argument, with the provenance note a renderer
/// may surface as documentation.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Arg {
    /// Invoke a derived private constructor on the receiver.
    Call { comment: String, func: String },
    /// Read a field off the receiver.
    Field { comment: String, ident: String },
}

///
/// FuncData
/// One generated declaration, fully described: a renderer needs
/// nothing beyond this to emit the method.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FuncData {
    /// Import paths this declaration pulls in.
    pub imports: Vec<String>,
    /// Originating package, the grouping key.
    pub pkg: String,
    /// Generated method name.
    pub name: String,
    /// Rendered return type.
    pub ret: String,
    /// Rendered path of the wrapped constructor.
    pub call: String,
    /// Receiver description.
    pub receiver: String,
    /// Ordered argument derivations.
    pub args: Vec<Arg>,
}

///
/// Data
///
/// The final, immutable result of a resolution run and the sole
/// handoff to the renderer. Every collection is sorted; two runs over
/// the same catalogue produce byte-identical serializations.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Data {
    /// Last segment of the library path.
    pub package: String,
    /// Target aggregate identifier.
    pub target: String,
    /// Sorted, deduplicated import paths.
    pub imports: Vec<String>,
    /// Public declarations grouped by originating package, each group
    /// sorted by generated name.
    pub publics: BTreeMap<String, Vec<FuncData>>,
    /// Private declarations, same grouping and ordering.
    pub privates: BTreeMap<String, Vec<FuncData>>,
}

impl Data {
    /// Total number of generated declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.publics.values().map(Vec::len).sum::<usize>()
            + self.privates.values().map(Vec::len).sum::<usize>()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
