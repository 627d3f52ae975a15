use crate::fixtures::{self, LIBRARY, TARGET};
use wiregen::prelude::*;

#[test]
fn store_fixture_derives_one_private_decl() {
    let data = fixtures::resolve_data(fixtures::STORE);

    let privates = &data.privates["app::store"];
    assert_eq!(privates.len(), 1);

    let decl = &privates[0];
    assert_eq!(decl.name, "app_store_store");
    assert_eq!(decl.ret, "app_store::Store");
    assert_eq!(decl.call, "app_store::NewSqlStore");
    assert_eq!(decl.receiver, "&Container");
    assert_eq!(
        decl.args,
        vec![Arg::Field {
            comment: "app::log::Logger".to_string(),
            ident: "logger".to_string(),
        }]
    );
}

#[test]
fn store_fixture_exposes_the_constructor_publicly() {
    let data = fixtures::resolve_data(fixtures::STORE);

    let publics = &data.publics["app::store"];
    assert_eq!(publics.len(), 1);
    assert_eq!(publics[0].name, "resolve_new_sql_store");
    assert_eq!(publics[0].ret, "app_store::SqlStore");
}

#[test]
fn assembly_is_grouped_and_sorted() {
    let data = fixtures::resolve_data(fixtures::STORE);

    assert_eq!(data.package, "container");
    assert_eq!(data.target, TARGET);
    assert_eq!(data.imports, vec!["app::store".to_string()]);
    assert_eq!(data.len(), 2);
}

#[test]
fn trace_reports_skips_and_progress() {
    let (_, events) = fixtures::resolve_with_trace(fixtures::STORE);

    assert!(events.contains(&ResolveTraceEvent::BindingChosen {
        iface: "app::store::Store".to_string(),
        func: "app::store::NewSqlStore".to_string(),
    }));
    // The logger interface has no implementing struct; that is a
    // skip, not an error.
    assert!(events.contains(&ResolveTraceEvent::InterfaceSkipped {
        iface: "app::log::Logger".to_string(),
        reason: SkipReason::NoImplementation,
    }));
    assert!(events.contains(&ResolveTraceEvent::PublicResolved {
        func: "app::store::NewSqlStore".to_string(),
    }));
}

#[test]
fn library_local_constructors_are_not_wrapped() {
    let manifest = r#"{
        "structs": [
            { "pkg": "app::container", "ident": "Container" }
        ],
        "functions": [
            {
                "pkg": "app::container",
                "ident": "NewContainer",
                "params": ["Text"],
                "results": ["app::container::Container"]
            }
        ]
    }"#;
    let data = fixtures::resolve_data(manifest);
    assert!(data.is_empty());
}

#[test]
fn empty_interfaces_are_never_bound() {
    let manifest = r#"{
        "structs": [
            { "pkg": "app::container", "ident": "Container" },
            { "pkg": "app::any", "ident": "Anything" }
        ],
        "interfaces": [
            { "pkg": "app::any", "ident": "Any" }
        ]
    }"#;
    let (data, events) = fixtures::resolve_with_trace(manifest);
    assert!(data.is_empty());
    assert!(events.contains(&ResolveTraceEvent::InterfaceSkipped {
        iface: "app::any::Any".to_string(),
        reason: SkipReason::EmptyInterface,
    }));
}

#[test]
fn missing_target_fails_the_run() {
    let errs = {
        let catalogue = fixtures::catalogue(r#"{}"#);
        let err = wiregen::engine::resolve(&catalogue, LIBRARY, TARGET, &NullTraceSink)
            .expect_err("no target");
        err
    };
    assert!(errs.to_string().contains("app::container::Container"));
}
