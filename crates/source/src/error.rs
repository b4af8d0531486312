// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for data source reads.

use thiserror::Error;

/// Errors that can abort a data source read.
///
/// Any of these aborts the whole read; there are no partial results and no
/// retries. A query that merely matches nothing is not an error; its key
/// is simply absent from the result map.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The program list was empty, so there is nothing to run.
    #[error("`program` must list at least one element, the executable to run")]
    EmptyProgram,

    /// The program could not be started at all.
    #[error("failed to execute {program:?}: {source}")]
    Spawn {
        /// Executable name as configured.
        program: String,
        /// Underlying start error.
        #[source]
        source: std::io::Error,
    },

    /// The program started but exited non-zero with output on stderr.
    #[error("failed to execute {program:?}: {stderr}")]
    ProgramFailed { program: String, stderr: String },

    /// The program exited non-zero without writing anything to stderr.
    #[error("command {program:?} failed with no error message")]
    ProgramFailedSilent { program: String },

    /// The program's stdout was not a single JSON document.
    #[error("command {program:?} produced invalid JSON: {detail}")]
    InvalidJson { program: String, detail: String },

    /// A query expression was rejected or failed to evaluate.
    #[error("query {name:?} ({expression:?}) failed: {detail}")]
    Query {
        name: String,
        expression: String,
        detail: String,
    },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
