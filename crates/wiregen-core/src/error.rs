use derive_more::Display;
use std::fmt;
use thiserror::Error as ThisError;

///
/// NameList
/// Candidate or detail lines rendered one per indented line, so an
/// ambiguity report reads as a numbered list.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NameList(pub Vec<String>);

impl fmt::Display for NameList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            write!(f, "\n\t{i}: {name}")?;
        }
        Ok(())
    }
}

///
/// ResolveError
///
/// Per-entity resolution failures. These accumulate across a whole
/// phase; a run reports every one of them together.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum ResolveError {
    #[error(
        "unable to determine a constructor for {iface} (implemented by {impl_ty}): \
         more than one bindable function returns this type. Use `wiregen:resolve` to \
         pick one, or `wiregen:exclude` to drop unwanted candidates. Candidates:{candidates}"
    )]
    AmbiguousConstructor {
        iface: String,
        impl_ty: String,
        candidates: NameList,
    },

    #[error(
        "unable to determine an implementation for {iface}: more than one type \
         implements this interface. Use `wiregen:resolve` to pick a constructor, or \
         `wiregen:exclude` to drop unwanted candidates. Candidates:{candidates}"
    )]
    AmbiguousImplementation {
        iface: String,
        candidates: NameList,
    },

    #[error("override target {target} referenced by {iface} is not a function")]
    OverrideTargetNotAFunction { iface: String, target: String },

    #[error("override target {target} referenced by {iface} does not exist")]
    OverrideTargetNotFound { iface: String, target: String },

    #[error("target {path} is not a struct")]
    TargetNotAStruct { path: String },

    #[error("target {path} does not exist")]
    TargetNotFound { path: String },

    #[error(
        "unable to resolve {func}, which is marked `wiregen:must_resolve`:{unresolved}"
    )]
    UnresolvedRequiredConstructor { func: String, unresolved: NameList },
}

///
/// ResolveErrors
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolveErrors(pub Vec<ResolveError>);

impl fmt::Display for ResolveErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.0 {
            writeln!(f, "{e}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ResolveErrors {}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum ErrorClass {
    Internal,
    InvariantViolation,
}

///
/// InternalError
///
/// A defect in the engine itself, never an ordinary unresolvable
/// input. Kept distinct so callers can tell "your catalogue is
/// ambiguous" apart from "the engine is broken".
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{class}: {message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub message: String,
}

impl InternalError {
    pub(crate) fn invariant_violation(message: impl Into<String>) -> Self {
        Self {
            class: ErrorClass::InvariantViolation,
            message: message.into(),
        }
    }
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Internal(#[from] InternalError),

    #[error("resolution failed:\n{0}")]
    Resolution(ResolveErrors),
}

impl Error {
    pub(crate) fn resolution(errs: Vec<ResolveError>) -> Self {
        Self::Resolution(ResolveErrors(errs))
    }

    /// The accumulated per-entity errors, when this is a resolution
    /// failure.
    #[must_use]
    pub fn resolve_errors(&self) -> Option<&[ResolveError]> {
        match self {
            Self::Resolution(errs) => Some(&errs.0),
            Self::Internal(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguity_message_lists_candidates() {
        let e = ResolveError::AmbiguousImplementation {
            iface: "app::Cache".to_string(),
            candidates: NameList(vec![
                "app::MemCache".to_string(),
                "app::RedisCache".to_string(),
            ]),
        };
        let msg = e.to_string();
        assert!(msg.contains("app::Cache"));
        assert!(msg.contains("0: app::MemCache"));
        assert!(msg.contains("1: app::RedisCache"));
    }

    #[test]
    fn internal_errors_stay_distinct_from_resolution() {
        let e = Error::from(InternalError::invariant_violation("fixpoint runaway"));
        assert!(e.resolve_errors().is_none());
        assert!(e.to_string().contains("InvariantViolation"));
    }
}
