// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `quarry read`: one ad-hoc read from command line flags.

use quarry_source::SourceSpec;

use crate::exit_error::ExitError;
use crate::output::{self, OutputFormat};

/// Parse a `name=expression` query flag.
pub fn parse_query(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, expression)) if !name.is_empty() => {
            Ok((name.to_string(), expression.to_string()))
        }
        _ => Err(format!(
            "expected name=expression, got {raw:?}"
        )),
    }
}

pub async fn run(
    program: Vec<String>,
    working_dir: String,
    query: Vec<(String, String)>,
    format: OutputFormat,
) -> Result<(), ExitError> {
    let mut spec = SourceSpec::new(program).with_working_dir(working_dir);
    for (name, expression) in query {
        spec.query.insert(name, expression);
    }

    let reading = quarry_source::read(&spec).await?;
    print!("{}", output::render_values(&reading.values, format)?);
    Ok(())
}

#[cfg(test)]
#[path = "read_tests.rs"]
mod tests;
