use crate::fixtures;
use proptest::prelude::*;

#[test]
fn repeated_runs_serialize_identically() {
    let a = serde_json::to_string(&fixtures::resolve_data(fixtures::CHAIN)).unwrap();
    let b = serde_json::to_string(&fixtures::resolve_data(fixtures::CHAIN)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn imports_are_sorted_and_deduplicated() {
    let data = fixtures::resolve_data(fixtures::CHAIN);

    let mut sorted = data.imports.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(data.imports, sorted);
    // The library package never imports itself.
    assert!(!data.imports.contains(&fixtures::LIBRARY.to_string()));
}

#[test]
fn groups_are_sorted_by_generated_name() {
    let data = fixtures::resolve_data(fixtures::CHAIN);

    for group in data.privates.values().chain(data.publics.values()) {
        let mut sorted: Vec<&str> = group.iter().map(|f| f.name.as_str()).collect();
        sorted.sort_unstable();
        assert_eq!(
            group.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(),
            sorted
        );
    }
}

// Function declaration order must not leak into the output: each
// eligible interface has exactly one matching constructor here, and
// the assembly sorts everything else.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn function_order_does_not_change_the_output(
        perm in Just((0..function_count()).collect::<Vec<_>>()).prop_shuffle()
    ) {
        let baseline = serde_json::to_string(&fixtures::resolve_data(fixtures::CHAIN)).unwrap();
        let shuffled = serde_json::to_string(&fixtures::resolve_data(&permuted(&perm))).unwrap();
        prop_assert_eq!(baseline, shuffled);
    }
}

fn function_count() -> usize {
    let manifest: serde_json::Value = serde_json::from_str(fixtures::CHAIN).unwrap();
    manifest["functions"].as_array().unwrap().len()
}

fn permuted(order: &[usize]) -> String {
    let mut manifest: serde_json::Value = serde_json::from_str(fixtures::CHAIN).unwrap();
    let functions = manifest["functions"].as_array().unwrap().clone();
    manifest["functions"] = order
        .iter()
        .map(|&i| functions[i].clone())
        .collect::<Vec<_>>()
        .into();
    manifest.to_string()
}
