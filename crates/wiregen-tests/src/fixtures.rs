//! Shared manifests and pipeline helpers.
//!
//! Both fixtures describe the same little application: a container
//! aggregate in `app::container` whose fields feed constructors
//! scattered across the other packages.

use wiregen::engine::error::Error;
use wiregen::prelude::*;

pub const LIBRARY: &str = "app::container";
pub const TARGET: &str = "Container";

/// One interface, one implementer, one constructor deriving its
/// single parameter from a container field.
pub const STORE: &str = r#"{
    "structs": [
        {
            "pkg": "app::container",
            "ident": "Container",
            "fields": [{ "ident": "logger", "ty": "app::log::Logger" }]
        },
        {
            "pkg": "app::store",
            "ident": "SqlStore",
            "methods": [
                { "ident": "get", "params": ["Text"], "results": ["Text"] }
            ]
        }
    ],
    "interfaces": [
        {
            "pkg": "app::store",
            "ident": "Store",
            "methods": [
                { "ident": "get", "params": ["Text"], "results": ["Text"] }
            ]
        },
        {
            "pkg": "app::log",
            "ident": "Logger",
            "methods": [{ "ident": "printf", "params": ["Text"] }]
        }
    ],
    "functions": [
        {
            "pkg": "app::store",
            "ident": "NewSqlStore",
            "params": ["app::log::Logger"],
            "results": ["app::store::SqlStore"]
        }
    ]
}"#;

/// A two-link chain: the service constructor needs the store
/// interface, which itself derives from a field. Interfaces are
/// declared dependent-first so the fixpoint needs a second round.
pub const CHAIN: &str = r#"{
    "structs": [
        {
            "pkg": "app::container",
            "ident": "Container",
            "fields": [{ "ident": "logger", "ty": "app::log::Logger" }]
        },
        {
            "pkg": "app::store",
            "ident": "SqlStore",
            "methods": [
                { "ident": "get", "params": ["Text"], "results": ["Text"] }
            ]
        },
        {
            "pkg": "app::svc",
            "ident": "UserService",
            "methods": [{ "ident": "run", "params": [], "results": ["Text"] }]
        }
    ],
    "interfaces": [
        {
            "pkg": "app::svc",
            "ident": "Service",
            "methods": [{ "ident": "run", "params": [], "results": ["Text"] }]
        },
        {
            "pkg": "app::store",
            "ident": "Store",
            "methods": [
                { "ident": "get", "params": ["Text"], "results": ["Text"] }
            ]
        },
        {
            "pkg": "app::log",
            "ident": "Logger",
            "methods": [{ "ident": "printf", "params": ["Text"] }]
        }
    ],
    "functions": [
        {
            "pkg": "app::svc",
            "ident": "NewUserService",
            "params": ["app::store::Store"],
            "results": ["app::svc::UserService"]
        },
        {
            "pkg": "app::store",
            "ident": "NewSqlStore",
            "params": ["app::log::Logger"],
            "results": ["app::store::SqlStore"]
        }
    ]
}"#;

pub fn catalogue(manifest: &str) -> Catalogue {
    Manifest::from_json(manifest)
        .expect("manifest parses")
        .build()
        .expect("catalogue builds")
}

pub fn resolve_data(manifest: &str) -> Data {
    wiregen::engine::resolve(&catalogue(manifest), LIBRARY, TARGET, &NullTraceSink)
        .expect("resolution succeeds")
}

pub fn resolve_with_trace(manifest: &str) -> (Data, Vec<ResolveTraceEvent>) {
    let sink = MemorySink::new();
    let data = wiregen::engine::resolve(&catalogue(manifest), LIBRARY, TARGET, &sink)
        .expect("resolution succeeds");
    (data, sink.events())
}

pub fn resolve_failure(manifest: &str) -> Vec<ResolveError> {
    let err = wiregen::engine::resolve(&catalogue(manifest), LIBRARY, TARGET, &NullTraceSink)
        .expect_err("resolution fails");
    match err {
        Error::Resolution(errs) => errs.0,
        Error::Internal(e) => panic!("expected resolution failure, got internal error: {e}"),
    }
}

/// All generated names in a `Data`, private then public.
pub fn decl_names(data: &Data) -> Vec<String> {
    data.privates
        .values()
        .chain(data.publics.values())
        .flatten()
        .map(|f| f.name.clone())
        .collect()
}
