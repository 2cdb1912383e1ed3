//! Integration tests for CLI behavior
//!
//! These tests verify the external behavior of the CLI tool: what it prints
//! on stdout and which exit code it returns.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a command for the nestwalk CLI
fn nestwalk_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_nestwalk"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout_lines(cmd: &mut Command) -> Vec<String> {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output)
        .expect("stdout is UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}

const CONCRETE_TREE: &str = r#"{"type":"container","children":[
    {"type":"container","children":[
        {"type":"leaf","kind":"marker","payload":"A"},
        {"type":"leaf","kind":"marker","payload":"B"}
    ]},
    {"type":"leaf","kind":"marker","payload":"C"},
    {"type":"container","children":[
        {"type":"leaf","kind":"resource-reference","payload":"https://some.link/D"}
    ]}
]}"#;

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        nestwalk_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn shows_version_with_flag() {
        nestwalk_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod flatten_command {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flattens_platoon_in_document_order() {
        let lines = stdout_lines(nestwalk_cmd().args(["flatten", "--sample", "platoon"]));

        assert_eq!(
            lines,
            vec![
                "marker\tt1",
                "marker\tt2",
                "marker\tt3",
                "marker\tt4",
                "marker\tt5",
                "marker\tt6",
            ]
        );
    }

    #[test]
    fn flattens_inline_tree() {
        let lines = stdout_lines(nestwalk_cmd().args(["flatten", "--tree", CONCRETE_TREE]));

        assert_eq!(
            lines,
            vec![
                "marker\tA",
                "marker\tB",
                "marker\tC",
                "resource-reference\thttps://some.link/D",
            ]
        );
    }

    #[test]
    fn flattens_deeply_nested_sample() {
        let lines = stdout_lines(nestwalk_cmd().args([
            "flatten", "--sample", "nested", "--depth", "50",
        ]));

        assert_eq!(lines, vec!["marker\tX"]);
    }

    #[test]
    fn prints_nothing_for_empty_subtrees() {
        let tree = r#"{"type":"container","children":[
            {"type":"container","children":[{"type":"container"}]},
            {"type":"container"}
        ]}"#;

        let lines = stdout_lines(nestwalk_cmd().args(["flatten", "--tree", tree]));
        assert!(lines.is_empty());
    }

    #[test]
    fn outputs_json() {
        let output = nestwalk_cmd()
            .args(["flatten", "--tree", CONCRETE_TREE, "--format", "json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"kind": "marker", "payload": "A"},
                {"kind": "marker", "payload": "B"},
                {"kind": "marker", "payload": "C"},
                {"kind": "resource-reference", "payload": "https://some.link/D"}
            ])
        );
    }

    #[test]
    fn rejects_leaf_root() {
        nestwalk_cmd()
            .args([
                "flatten",
                "--tree",
                r#"{"type":"leaf","kind":"marker","payload":"alone"}"#,
            ])
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        nestwalk_cmd()
            .args(["flatten", "--tree", "{not json"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid tree definition"));
    }

    #[test]
    fn flattens_nested_sample_at_maximum_depth() {
        let lines = stdout_lines(nestwalk_cmd().args([
            "flatten", "--sample", "nested", "--depth", "10000",
        ]));

        assert_eq!(lines, vec!["marker\tX"]);
    }

    #[test]
    fn rejects_depth_above_maximum() {
        nestwalk_cmd()
            .args(["flatten", "--sample", "nested", "--depth", "10001"])
            .assert()
            .failure();
    }

    #[test]
    fn rejects_zero_depth() {
        nestwalk_cmd()
            .args(["flatten", "--sample", "nested", "--depth", "0"])
            .assert()
            .failure();
    }
}

mod links_command {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn crawls_page_links() {
        let lines = stdout_lines(nestwalk_cmd().args(["links", "--sample", "page"]));

        assert_eq!(
            lines,
            vec![
                "https://some.image/1",
                "https://some.link/1",
                "https://some.image/2",
                "https://some.link/2",
                "https://some.link/3",
                "https://some.image/3",
                "https://some.image/4",
                "https://some.link/4",
            ]
        );
    }

    #[test]
    fn platoon_has_no_links() {
        let lines = stdout_lines(nestwalk_cmd().args(["links", "--sample", "platoon"]));
        assert!(lines.is_empty());
    }

    #[test]
    fn outputs_json() {
        let output = nestwalk_cmd()
            .args(["links", "--tree", CONCRETE_TREE, "-f", "json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(json, serde_json::json!(["https://some.link/D"]));
    }
}

mod check_command {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::platoon("platoon", "ok: 6 leaves")]
    #[case::page("page", "ok: 10 leaves")]
    #[case::nested("nested", "ok: 1 leaves")]
    fn protocols_agree_on_samples(#[case] sample: &str, #[case] expected: &str) {
        nestwalk_cmd()
            .args(["check", "--sample", sample])
            .assert()
            .success()
            .stdout(predicate::str::contains(expected));
    }

    #[test]
    fn protocols_agree_at_maximum_depth() {
        nestwalk_cmd()
            .args(["check", "--sample", "nested", "--depth", "10000"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("ok: 1 leaves"));
    }

    #[test]
    fn protocols_agree_on_empty_tree() {
        nestwalk_cmd()
            .args(["check", "--tree", r#"{"type":"container"}"#])
            .assert()
            .success()
            .stdout(predicate::str::contains("ok: 0 leaves"));
    }

    #[test]
    fn verbose_logging_goes_to_stderr() {
        nestwalk_cmd()
            .args(["--verbose", "check", "--sample", "page"])
            .assert()
            .success()
            .stdout(predicate::str::contains("ok: 10 leaves"))
            .stderr(predicate::str::contains("Using sample tree"));
    }
}
