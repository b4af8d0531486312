//! `quarry check` specs
//!
//! Static validation of manifests: parse, validate specs, compile queries.
//! Nothing is ever executed.

use crate::prelude::*;

#[test]
fn valid_manifest_passes() {
    let temp = Project::empty();
    temp.file(
        "quarry.hcl",
        r#"
data "weather" {
  program = ["curl", "-s", "wttr.in/?format=j1"]
  query = { temp = "current_condition[0].temp_C" }
}
"#,
    );

    temp.quarry()
        .args(&["check", "quarry.hcl"])
        .passes()
        .stdout_has("1 data source(s) OK");
}

#[test]
fn empty_program_list_is_rejected() {
    let temp = Project::empty();
    temp.file("quarry.hcl", r#"data "hollow" { program = [] }"#);

    temp.quarry()
        .args(&["check", "quarry.hcl"])
        .fails()
        .stderr_has("hollow")
        .stderr_has("`program`");
}

#[test]
fn malformed_query_expression_is_rejected() {
    let temp = Project::empty();
    temp.file(
        "quarry.hcl",
        r#"
data "broken" {
  program = ["true"]
  query = { oops = "items[" }
}
"#,
    );

    temp.quarry()
        .args(&["check", "quarry.hcl"])
        .fails()
        .stderr_has("broken")
        .stderr_has("oops");
}

#[test]
fn check_never_executes_the_program() {
    let temp = Project::empty();
    temp.script("side-effect", "touch ran.txt; printf '{}'");
    temp.file(
        "quarry.hcl",
        r#"data "probe" { program = ["./side-effect"] }"#,
    );

    temp.quarry().args(&["check", "quarry.hcl"]).passes();
    assert!(
        !temp.path().join("ran.txt").exists(),
        "check must not run the program"
    );
}
