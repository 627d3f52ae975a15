//! Resolution tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect
//! resolution semantics. Skips and progress that are not errors
//! surface here instead of through a global logger.

use derive_more::Display;
use std::sync::Mutex;

///
/// ResolveTraceSink
///

pub trait ResolveTraceSink {
    fn on_event(&self, event: ResolveTraceEvent);
}

///
/// SkipReason
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum SkipReason {
    EmptyInterface,
    Excluded,
    NoConstructor,
    NoImplementation,
    Unexported,
}

///
/// ResolveTraceEvent
///

#[derive(Clone, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum ResolveTraceEvent {
    BindingChosen {
        iface: String,
        func: String,
    },
    DerivationRound {
        round: usize,
        derived: usize,
    },
    /// Known gap: several fields are separately assignable to the
    /// same required type. Declaration order wins; this event is the
    /// only report.
    FieldAmbiguity {
        required: String,
        chosen: String,
        also: Vec<String>,
    },
    InterfaceSkipped {
        iface: String,
        reason: SkipReason,
    },
    PrivateDerived {
        iface: String,
        func: String,
    },
    PublicResolved {
        func: String,
    },
    PublicSkipped {
        func: String,
        detail: String,
    },
}

///
/// NullTraceSink
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NullTraceSink;

impl ResolveTraceSink for NullTraceSink {
    fn on_event(&self, _event: ResolveTraceEvent) {}
}

///
/// MemorySink
/// Records every event; used by tests and by callers that want to
/// render a report after the run.
///

#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<ResolveTraceEvent>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> Vec<ResolveTraceEvent> {
        self.events
            .lock()
            .expect("trace sink mutex poisoned")
            .clone()
    }
}

impl ResolveTraceSink for MemorySink {
    fn on_event(&self, event: ResolveTraceEvent) {
        self.events
            .lock()
            .expect("trace sink mutex poisoned")
            .push(event);
    }
}
