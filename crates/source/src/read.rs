// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The read operation: validate, invoke, extract.

use std::collections::BTreeMap;

use crate::error::ReadError;
use crate::exec;
use crate::extract;
use crate::spec::SourceSpec;

/// Identity token carried by every reading.
///
/// A data source read stands for no addressable persistent entity, so all
/// readings share one constant identity and the embedding host re-evaluates
/// the source on every cycle.
pub const SOURCE_ID: &str = "-";

/// Outcome of a successful read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// Constant identity token, always [`SOURCE_ID`].
    pub id: String,
    /// Extracted values keyed by query name. Queries that matched nothing
    /// or produced a non-scalar value are absent.
    pub values: BTreeMap<String, String>,
}

/// Run the data source once.
///
/// The program runs to completion before any query is evaluated, and the
/// first error of any kind aborts the read with no partial result. Reads
/// share no mutable state, so concurrent reads are safe; each read is
/// independent and idempotent modulo the program's own side effects.
pub async fn read(spec: &SourceSpec) -> Result<Reading, ReadError> {
    spec.validate()?;
    let stdout = exec::run_program(spec).await?;
    let values = extract::extract(spec.executable(), &stdout, &spec.query)?;
    Ok(Reading {
        id: SOURCE_ID.to_string(),
        values,
    })
}

#[cfg(test)]
#[path = "read_tests.rs"]
mod tests;
