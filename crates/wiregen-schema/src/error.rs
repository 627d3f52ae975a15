use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

///
/// ErrorTree
///
/// Route-keyed accumulation of catalogue problems. Collection never
/// fails fast: every route reports every message it gathered, in a
/// deterministic order.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ErrorTree {
    entries: BTreeMap<String, Vec<String>>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, route: impl Into<String>, message: impl Into<String>) {
        self.entries
            .entry(route.into())
            .or_default()
            .push(message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Consume the tree, failing when anything accumulated.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (route, messages) in &self.entries {
            for message in messages {
                writeln!(f, "{route}: {message}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ErrorTree {}

/// Push a formatted message onto an [`ErrorTree`] under a route.
#[macro_export]
macro_rules! err {
    ($errs:expr, $route:expr, $($arg:tt)*) => {
        $errs.add($route, format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_is_ok_when_empty() {
        assert!(ErrorTree::new().result().is_ok());
    }

    #[test]
    fn display_orders_by_route() {
        let mut errs = ErrorTree::new();
        err!(errs, "b::Second", "late");
        err!(errs, "a::First", "early");

        let rendered = errs.to_string();
        assert_eq!(rendered, "a::First: early\nb::Second: late\n");
        assert_eq!(errs.len(), 2);
    }
}
