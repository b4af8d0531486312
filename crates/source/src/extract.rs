// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON decoding, query evaluation, and scalar coercion.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use jmespath::Variable;

use crate::error::ReadError;

/// Compile one query expression, attributing failures to the query name.
pub(crate) fn compile(
    name: &str,
    expression: &str,
) -> Result<jmespath::Expression<'static>, ReadError> {
    jmespath::compile(expression).map_err(|err| ReadError::Query {
        name: name.to_string(),
        expression: expression.to_string(),
        detail: err.to_string(),
    })
}

/// Evaluate `queries` against captured stdout and build the result map.
///
/// The document is decoded only when at least one query needs it, so a
/// program whose output is not JSON still reads cleanly when no queries are
/// configured. The first failing decode or query aborts the whole read;
/// queries whose result is null or non-scalar are skipped with a debug log
/// and their keys never appear in the map.
pub(crate) fn extract(
    program: &str,
    stdout: &[u8],
    queries: &IndexMap<String, String>,
) -> Result<BTreeMap<String, String>, ReadError> {
    let mut values = BTreeMap::new();
    if queries.is_empty() {
        return Ok(values);
    }

    let text = std::str::from_utf8(stdout).map_err(|err| ReadError::InvalidJson {
        program: program.to_string(),
        detail: err.to_string(),
    })?;
    let document = Variable::from_json(text).map_err(|detail| ReadError::InvalidJson {
        program: program.to_string(),
        detail,
    })?;

    for (name, expression) in queries {
        let compiled = compile(name, expression)?;
        let found = compiled
            .search(document.clone())
            .map_err(|err| ReadError::Query {
                name: name.clone(),
                expression: expression.clone(),
                detail: err.to_string(),
            })?;

        match &*found {
            Variable::Null => {
                tracing::debug!(name = %name, expression = %expression, "no value for query");
            }
            Variable::String(value) => {
                values.insert(name.clone(), value.clone());
            }
            Variable::Number(number) => {
                values.insert(name.clone(), coerce_number(number));
            }
            _ => {
                // Booleans and composites have no string form here; they are
                // dropped rather than rendered.
                tracing::debug!(
                    name = %name,
                    expression = %expression,
                    "query result is not a string or number, omitting"
                );
            }
        }
    }

    Ok(values)
}

/// Integers print as plain decimals. Every other number gets exactly two
/// fractional digits, halves rounded away from zero.
fn coerce_number(number: &serde_json::Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    if let Some(int) = number.as_u64() {
        return int.to_string();
    }
    format_fixed2(number.as_f64().unwrap_or(f64::NAN))
}

fn format_fixed2(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded:.2}")
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
