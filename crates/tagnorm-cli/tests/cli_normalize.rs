// crates/tagnorm-cli/tests/cli_normalize.rs

use std::fs;
use std::process::{Command, Output};

fn run_ok(cmd: &mut Command) -> Output {
    let out = cmd.output().expect("spawn command");
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    out
}

fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout).lines().map(str::to_owned).collect()
}

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tagnorm-cli"))
}

#[test]
fn normalizes_positional_tags_with_corrected_rules() {
    let out = run_ok(cli().args(["normalize", "_need-to__be_normalized-", "my service", "api/v1/users"]));
    assert_eq!(stdout_lines(&out), ["need-to_be_normalized-", "my_service", "api/v1/users"]);
}

#[test]
fn legacy_preset_reproduces_the_bug() {
    let out = run_ok(cli().args(["normalize", "--preset", "legacy", "my-service-name"]));
    assert_eq!(stdout_lines(&out), ["my_service_name"]);
}

#[test]
fn key_prefix_is_applied() {
    let out = run_ok(cli().args(["normalize", "--key", "instance", "test-instance-with-dashes"]));
    assert_eq!(stdout_lines(&out), ["instance:test-instance-with-dashes"]);
}

#[test]
fn reads_crlf_file_and_drops_bad_utf8() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tags.txt");
    fs::write(&path, b"web 01\r\ndb\xFF-primary\r\n__\r\n").expect("write tags");

    let out = run_ok(cli().args(["normalize", "--in", path.to_str().unwrap()]));
    assert_eq!(stdout_lines(&out), ["web_01", "db-primary", ""]);

    let out = run_ok(cli().args(["normalize", "--invalid-utf8", "replace", "--in", path.to_str().unwrap()]));
    assert_eq!(stdout_lines(&out)[1], "db\u{FFFD}-primary");
}

#[test]
fn reads_zstd_compressed_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("tags.txt.zst");
    let packed = zstd::stream::encode_all(&b"a,b\nc/d\n"[..], 3).expect("zstd encode");
    fs::write(&path, packed).expect("write tags");

    let out = run_ok(cli().args(["normalize", "--tsv", "--in", path.to_str().unwrap()]));
    assert_eq!(stdout_lines(&out), ["a,b\ta_b", "c/d\tc/d"]);
}

#[test]
fn empty_file_is_not_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.txt");
    fs::write(&path, b"").expect("write tags");

    let out = run_ok(cli().args(["normalize", "--in", path.to_str().unwrap()]));
    assert!(out.stdout.is_empty());
}

#[test]
fn missing_file_fails_with_path_in_message() {
    let out = cli()
        .args(["normalize", "--in", "/nonexistent/tags.txt"])
        .output()
        .expect("spawn command");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("/nonexistent/tags.txt"));
}
