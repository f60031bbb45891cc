//! Regression tests for the CLI surface: stdout contracts, exit codes, and
//! miette diagnostic rendering.

mod common;

use assert_cmd::Command;
use common::TempProject;
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn strip_with_explicit_names_prints_rewritten_source() {
    let project = TempProject::new("cli-strip");
    let file = project.write("app.js", "log(\"start\");\nvalue = 1;\nlog(\"end\");\n");

    let mut cmd = Command::cargo_bin("undebugify").unwrap();
    cmd.arg("strip").arg(&file).arg("--remove").arg("log");
    cmd.assert()
        .success()
        .stdout("\nvalue = 1;\n\n");
}

#[test]
fn strip_discovers_configuration_from_the_manifest() {
    let project = TempProject::new("cli-discover");
    project.write(
        "package.json",
        r#"{ "undebugify": { "remove": ["log"] } }"#,
    );
    let file = project.write("src/app.js", "log(1);\nwork();\n");

    let mut cmd = Command::cargo_bin("undebugify").unwrap();
    cmd.arg("strip").arg(&file);
    cmd.assert().success().stdout("\nwork();\n");
}

#[test]
fn strip_without_any_configuration_fails_with_help() {
    let project = TempProject::new("cli-noconfig");
    project.write("package.json", r#"{ "name": "app" }"#);
    let file = project.write("app.js", "log(1);\n");

    let mut cmd = Command::cargo_bin("undebugify").unwrap();
    cmd.arg("strip").arg(&file);
    cmd.assert()
        .failure()
        .stderr(contains("undebugify::config").and(contains("--remove")));
}

#[test]
fn malformed_configuration_reports_the_offending_value() {
    let project = TempProject::new("cli-badconfig");
    project.write(
        "package.json",
        r#"{ "undebugify": { "remove": "log" } }"#,
    );
    let file = project.write("app.js", "log(1);\n");

    let mut cmd = Command::cargo_bin("undebugify").unwrap();
    cmd.arg("strip").arg(&file);
    cmd.assert()
        .failure()
        .stderr(contains("undebugify::config").and(contains("\"log\"")));
}

#[test]
fn syntax_errors_render_as_parse_diagnostics() {
    let project = TempProject::new("cli-parse");
    let file = project.write("broken.js", "function (");

    let mut cmd = Command::cargo_bin("undebugify").unwrap();
    cmd.arg("strip").arg(&file).arg("--remove").arg("log");
    cmd.assert().failure().stderr(contains("undebugify::parse"));
}

#[test]
fn run_reports_a_dry_run_summary() {
    let project = TempProject::new("cli-run");
    project.write("a.js", "log(1);\nwork();\n");
    project.write("b.js", "work();\n");

    let mut cmd = Command::cargo_bin("undebugify").unwrap();
    cmd.arg("run").arg(&project.root).arg("--remove").arg("log");
    cmd.assert()
        .success()
        .stdout(contains("would strip").and(contains("1 file would change")));
}

#[test]
fn ast_dumps_the_parse_tree() {
    let project = TempProject::new("cli-ast");
    let file = project.write("app.js", "foo(1);\n");

    let mut cmd = Command::cargo_bin("undebugify").unwrap();
    cmd.arg("ast").arg(&file);
    cmd.assert()
        .success()
        .stdout(contains("expression_statement").and(contains("call_expression")));
}

#[test]
fn config_shows_provenance() {
    let project = TempProject::new("cli-config");
    project.write(
        "package.json",
        r#"{ "undebugify": { "remove": ["log", "assert"] } }"#,
    );

    let mut cmd = Command::cargo_bin("undebugify").unwrap();
    cmd.arg("config").arg(&project.root);
    cmd.assert()
        .success()
        .stdout(contains("log, assert").and(contains("package.json")));
}
