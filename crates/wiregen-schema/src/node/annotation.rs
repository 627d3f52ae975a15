use serde::Serialize;
use thiserror::Error as ThisError;

/// Marker prefix looked for in doc lines.
const MARKER: &str = "wiregen:";

///
/// AnnotationError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum AnnotationError {
    #[error(
        "resolve annotation must be `wiregen:resolve <name>` or \
         `wiregen:resolve <pkg> <name>`, got: {text}"
    )]
    MalformedResolve { text: String },

    #[error("unknown annotation directive: {text}")]
    UnknownDirective { text: String },
}

///
/// Annotation
///
/// Structured record parsed by the catalogue layer; the resolution
/// core only ever sees these variants, never raw comment text.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Annotation {
    /// `wiregen:include` — eligible as a binding target even with
    /// zero parameters.
    Bindable,
    /// `wiregen:exclude` — never considered by resolution.
    Excluded,
    /// `wiregen:must_resolve` — escalate an unresolved constructor
    /// from silent omission to a fatal error.
    MustResolve,
    /// `wiregen:resolve [<pkg>] <name>` — bind this interface to a
    /// specific constructor, bypassing automatic matching.
    ResolveOverride {
        pkg: Option<String>,
        name: String,
    },
}

impl Annotation {
    /// Parse a single doc line. Lines without the marker are `None`.
    pub fn parse_line(line: &str) -> Result<Option<Self>, AnnotationError> {
        let line = line.trim_start_matches('/').trim();
        let Some(start) = line.find(MARKER) else {
            return Ok(None);
        };
        let body = &line[start + MARKER.len()..];
        let mut tokens = body.split_whitespace();
        let directive = tokens.next().unwrap_or("");

        match directive {
            "exclude" => Ok(Some(Self::Excluded)),
            "include" => Ok(Some(Self::Bindable)),
            "must_resolve" => Ok(Some(Self::MustResolve)),
            "resolve" => {
                let rest: Vec<&str> = tokens.collect();
                match rest.as_slice() {
                    [name] => Ok(Some(Self::ResolveOverride {
                        pkg: None,
                        name: (*name).to_string(),
                    })),
                    [pkg, name] => Ok(Some(Self::ResolveOverride {
                        pkg: Some((*pkg).to_string()),
                        name: (*name).to_string(),
                    })),
                    _ => Err(AnnotationError::MalformedResolve {
                        text: line.to_string(),
                    }),
                }
            }
            _ => Err(AnnotationError::UnknownDirective {
                text: line.to_string(),
            }),
        }
    }
}

///
/// AnnotationSet
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct AnnotationSet {
    annotations: Vec<Annotation>,
}

impl AnnotationSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            annotations: Vec::new(),
        }
    }

    /// Parse every marker line of a doc block. Parsing never fails
    /// fast; all malformed lines are reported.
    pub fn parse_doc(doc: &[String]) -> (Self, Vec<AnnotationError>) {
        let mut set = Self::new();
        let mut errs = Vec::new();
        for line in doc {
            match Annotation::parse_line(line) {
                Ok(Some(annotation)) => set.annotations.push(annotation),
                Ok(None) => {}
                Err(e) => errs.push(e),
            }
        }
        (set, errs)
    }

    pub fn push(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    #[must_use]
    pub fn is_excluded(&self) -> bool {
        self.annotations.contains(&Annotation::Excluded)
    }

    #[must_use]
    pub fn must_resolve(&self) -> bool {
        self.annotations.contains(&Annotation::MustResolve)
    }

    #[must_use]
    pub fn is_bindable(&self) -> bool {
        self.annotations.contains(&Annotation::Bindable)
    }

    #[must_use]
    pub fn resolve_override(&self) -> Option<(Option<&str>, &str)> {
        self.annotations.iter().find_map(|a| match a {
            Annotation::ResolveOverride { pkg, name } => {
                Some((pkg.as_deref(), name.as_str()))
            }
            _ => None,
        })
    }
}
