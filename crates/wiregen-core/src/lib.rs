pub mod data;
pub mod decls;
pub mod error;
pub mod trace;

mod assemble;
mod bindings;
mod derive;
mod publics;
mod resolver;

pub use resolver::resolve;

pub mod prelude {
    pub use crate::data::{Arg, Data, FuncData};
    pub use crate::error::{Error, ErrorClass, InternalError, ResolveError, ResolveErrors};
    pub use crate::resolve;
    pub use crate::trace::{
        MemorySink, NullTraceSink, ResolveTraceEvent, ResolveTraceSink, SkipReason,
    };
}
