use tagnorm_core::{normalize_tag, normalize_tag_legacy, DisallowedSet, Normalizer};

#[test]
fn minus_handling_differs_between_rule_sets() {
    let legacy = normalize_tag_legacy("my-service-name");
    let fixed = normalize_tag("my-service-name");
    assert_eq!(legacy, "my_service_name");
    assert_eq!(fixed, "my-service-name");
    assert_ne!(legacy, fixed);
}

#[test]
fn legacy_rewrites_slashes_and_edge_minus() {
    assert_eq!(normalize_tag_legacy("test/with/slash"), "test_with_slash");
    assert_eq!(normalize_tag_legacy("_need-to__be_normalized-"), "need_to_be_normalized");
    assert_eq!(normalize_tag_legacy("--multiple--dashes--"), "multiple_dashes");
}

#[test]
fn rule_sets_agree_without_minus_or_slash() {
    for s in ["test with spaces", "test,with,commas", "a.b_c", "x(y)[z]{w}", "__a__"] {
        assert_eq!(normalize_tag_legacy(s), normalize_tag(s), "input {s:?}");
    }
}

#[test]
fn swapping_the_set_swaps_the_behavior() {
    let n = Normalizer::new(DisallowedSet::LEGACY);
    assert_eq!(n.normalize("a-b/c"), normalize_tag_legacy("a-b/c"));
    let n = Normalizer::new(DisallowedSet::CORRECTED);
    assert_eq!(n.normalize("a-b/c"), "a-b/c");
}
