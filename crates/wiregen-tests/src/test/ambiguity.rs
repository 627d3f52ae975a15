use crate::fixtures;
use wiregen::prelude::*;

const TWO_CACHES: &str = r#"{
    "structs": [
        { "pkg": "app::container", "ident": "Container" },
        {
            "pkg": "app::cache",
            "ident": "MemCache",
            "methods": [
                { "ident": "fetch", "params": ["Text"], "results": ["Text"] }
            ]
        },
        {
            "pkg": "app::cache",
            "ident": "RedisCache",
            "methods": [
                { "ident": "fetch", "params": ["Text"], "results": ["Text"] }
            ]
        }
    ],
    "interfaces": [
        {
            "pkg": "app::cache",
            "ident": "Cache",
            "methods": [
                { "ident": "fetch", "params": ["Text"], "results": ["Text"] }
            ]
        }
    ]
}"#;

#[test]
fn two_implementers_fail_with_both_candidates() {
    let errs = fixtures::resolve_failure(TWO_CACHES);

    assert_eq!(errs.len(), 1);
    let ResolveError::AmbiguousImplementation { iface, candidates } = &errs[0] else {
        panic!("expected AmbiguousImplementation, got {:?}", errs[0]);
    };
    assert_eq!(iface, "app::cache::Cache");
    assert_eq!(
        candidates.0,
        vec![
            "app::cache::MemCache".to_string(),
            "app::cache::RedisCache".to_string(),
        ]
    );
}

#[test]
fn two_constructors_fail_with_both_signatures() {
    let manifest = r#"{
        "structs": [
            { "pkg": "app::container", "ident": "Container" },
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
            }
        ],
        "functions": [
            {
                "pkg": "app::store",
                "ident": "NewSqlStore",
                "params": ["Text"],
                "results": ["app::store::SqlStore"]
            },
            {
                "pkg": "app::store",
                "ident": "MakeSqlStore",
                "params": ["Text"],
                "results": ["app::store::SqlStore"]
            }
        ]
    }"#;
    let errs = fixtures::resolve_failure(manifest);

    assert_eq!(errs.len(), 1);
    let ResolveError::AmbiguousConstructor {
        iface,
        impl_ty,
        candidates,
    } = &errs[0]
    else {
        panic!("expected AmbiguousConstructor, got {:?}", errs[0]);
    };
    assert_eq!(iface, "app::store::Store");
    assert_eq!(impl_ty, "app::store::SqlStore");
    assert_eq!(
        candidates.0,
        vec![
            "app::store::NewSqlStore".to_string(),
            "app::store::MakeSqlStore".to_string(),
        ]
    );
}

#[test]
fn binding_errors_accumulate_across_interfaces() {
    // Duplicate the ambiguous interface under a second package; both
    // failures must surface in one run.
    let manifest = TWO_CACHES.replace(
        r#""interfaces": ["#,
        r#""interfaces": [
        {
            "pkg": "app::cache2",
            "ident": "Cache",
            "methods": [
                { "ident": "fetch", "params": ["Text"], "results": ["Text"] }
            ]
        },"#,
    );
    let errs = fixtures::resolve_failure(&manifest);
    assert_eq!(errs.len(), 2);
}

#[test]
fn ambiguity_error_text_names_the_annotations() {
    let errs = fixtures::resolve_failure(TWO_CACHES);
    let text = errs[0].to_string();
    assert!(text.contains("wiregen:resolve"));
    assert!(text.contains("wiregen:exclude"));
    assert!(text.contains("app::cache::MemCache"));
}
