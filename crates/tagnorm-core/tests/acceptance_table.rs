use tagnorm_core::{normalize_instance_tag, normalize_tag};

const TABLE: &[(&str, &str)] = &[
    ("_need-to__be_normalized-", "need-to_be_normalized-"),
    ("my-service", "my-service"),
    ("my,service", "my_service"),
    ("my service", "my_service"),
    ("--multiple--dashes--", "--multiple--dashes--"),
    ("__multiple__underscores__", "multiple_underscores"),
    ("api/v1/users", "api/v1/users"),
    ("", ""),
];

#[test]
fn corrected_rules_match_table() {
    for &(input, expected) in TABLE {
        assert_eq!(normalize_tag(input), expected, "input {input:?}");
    }
}

#[test]
fn valid_tag_characters_are_preserved() {
    for s in ["my_service", "my:service", "my.service", "my/service", "MyService123", "service.v1.2", "db:primary"] {
        assert_eq!(normalize_tag(s), s);
    }
}

#[test]
fn invalid_characters_become_single_underscore() {
    for s in ["my,service", "my+service", "my*service", "my service"] {
        assert_eq!(normalize_tag(s), "my_service", "input {s:?}");
    }
    for s in ["my\tservice", "my\nservice", "my\rservice", "my\x0Bservice", "my\x0Cservice"] {
        assert_eq!(normalize_tag(s), "my_service", "input {s:?}");
    }
    for s in ["my(service)", "my[service]", "my{service}"] {
        assert_eq!(normalize_tag(s), "my_service", "input {s:?}");
    }
}

#[test]
fn non_ascii_whitespace_passes_through() {
    for s in ["a\u{a0}b", "a\u{85}b", "a\u{2003}b"] {
        assert_eq!(normalize_tag(s), s, "input {s:?}");
    }
}

#[test]
fn instance_tag_uses_corrected_rules() {
    assert_eq!(normalize_instance_tag("test-instance-with-dashes"), "test-instance-with-dashes");
    assert_eq!(normalize_instance_tag("test instance with spaces"), "test_instance_with_spaces");
    assert_eq!(normalize_instance_tag("test.instance.with.dots"), "test.instance.with.dots");
}
