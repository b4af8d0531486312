//! `quarry run` specs
//!
//! Evaluate data sources declared in HCL manifests.

use crate::prelude::*;

const BASIC_MANIFEST: &str = r#"
data "greeting" {
  program = ["./echo-json"]

  query = {
    a = "argument"
    v = "value"
  }
}
"#;

#[test]
fn run_evaluates_a_named_source() {
    let temp = Project::empty();
    temp.script("echo-json", r#"printf '{"argument":"cheese","value":"pizza"}'"#);
    temp.file("quarry.hcl", BASIC_MANIFEST);

    temp.quarry()
        .args(&["run", "quarry.hcl", "greeting"])
        .passes()
        .stdout_has("a = cheese")
        .stdout_has("v = pizza");
}

#[test]
fn run_evaluates_all_sources_with_prefixed_keys() {
    let temp = Project::empty();
    temp.script("first-stub", r#"printf '{"color":"red"}'"#);
    temp.script("second-stub", r#"printf '{"shape":"square"}'"#);
    temp.file(
        "quarry.hcl",
        r#"
data "first" {
  program = ["./first-stub"]
  query = { color = "color" }
}

data "second" {
  program = ["./second-stub"]
  query = { shape = "shape" }
}
"#,
    );

    temp.quarry()
        .args(&["run", "quarry.hcl"])
        .passes()
        .stdout_has("first.color = red")
        .stdout_has("second.shape = square");
}

#[test]
fn run_all_sources_as_json_nests_per_source() {
    let temp = Project::empty();
    temp.script("first-stub", r#"printf '{"color":"red"}'"#);
    temp.file(
        "quarry.hcl",
        r#"
data "first" {
  program = ["./first-stub"]
  query = { color = "color" }
}
"#,
    );

    let run = temp
        .quarry()
        .args(&["run", "quarry.hcl", "--format", "json"])
        .passes();
    assert_eq!(run.stdout_json()["first"]["color"], "red");
}

#[test]
fn unknown_source_name_fails() {
    let temp = Project::empty();
    temp.script("echo-json", r#"printf '{}'"#);
    temp.file("quarry.hcl", BASIC_MANIFEST);

    temp.quarry()
        .args(&["run", "quarry.hcl", "nonexistent"])
        .fails()
        .stderr_has("no data source named \"nonexistent\"");
}

#[test]
fn missing_manifest_file_fails() {
    let temp = Project::empty();
    temp.quarry()
        .args(&["run", "absent.hcl"])
        .fails()
        .stderr_has("failed to read");
}

#[test]
fn malformed_manifest_fails() {
    let temp = Project::empty();
    temp.file("quarry.hcl", "data \"broken\" {");

    temp.quarry()
        .args(&["run", "quarry.hcl"])
        .fails()
        .stderr_has("invalid manifest");
}

#[test]
fn source_failure_names_the_source() {
    let temp = Project::empty();
    temp.script("fail-stub", r#"echo 'I was asked to fail' >&2; exit 1"#);
    temp.file(
        "quarry.hcl",
        r#"
data "doomed" {
  program = ["./fail-stub"]
  query = { fail = "'true'" }
}
"#,
    );

    temp.quarry()
        .args(&["run", "quarry.hcl"])
        .fails()
        .stderr_has("doomed")
        .stderr_has("I was asked to fail");
}
