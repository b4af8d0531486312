//! CLI surface specs
//!
//! Verify help output and argument validation for all subcommands.

use crate::prelude::*;

#[test]
fn quarry_help_shows_usage() {
    quarry().args(&["--help"]).passes().stdout_has("Usage:");
}

#[test]
fn quarry_help_lists_subcommands() {
    quarry()
        .args(&["--help"])
        .passes()
        .stdout_has("read")
        .stdout_has("run")
        .stdout_has("check");
}

#[test]
fn read_help_shows_flags() {
    quarry()
        .args(&["read", "--help"])
        .passes()
        .stdout_has("--program")
        .stdout_has("--working-dir")
        .stdout_has("--query");
}

#[test]
fn run_help_shows_manifest_argument() {
    quarry().args(&["run", "--help"]).passes().stdout_has("MANIFEST");
}

#[test]
fn version_prints() {
    quarry().args(&["--version"]).passes().stdout_has("0.1");
}

#[test]
fn read_requires_a_program() {
    quarry().args(&["read"]).fails().stderr_has("--program");
}

#[test]
fn read_rejects_a_malformed_query_flag() {
    quarry()
        .args(&["read", "-p", "true", "-q", "noequals"])
        .fails()
        .stderr_has("name=expression");
}

#[test]
fn unknown_subcommand_fails() {
    quarry().args(&["frobnicate"]).fails();
}
