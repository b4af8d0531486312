// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed description of a data source invocation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ReadError;
use crate::extract;

/// An external program acting as a data source.
///
/// The program must print a single JSON document (object, array, or scalar)
/// on stdout and exit zero; [`read`](crate::read::read) then evaluates the
/// configured queries against that document. This is the whole protocol
/// between quarry and a compliant program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    /// Program to run. The first element is the executable and subsequent
    /// elements are its command line arguments. The program is not run
    /// through a shell, so shell metacharacters need no escaping and
    /// arguments containing spaces need no quotes.
    pub program: Vec<String>,

    /// Working directory for the program. Empty means the program runs in
    /// the caller's current directory.
    #[serde(default)]
    pub working_dir: String,

    /// Named JMESPath queries evaluated against the program's JSON output.
    /// Each name becomes a key of the result map when its query produces a
    /// string or numeric value.
    #[serde(default)]
    pub query: IndexMap<String, String>,
}

impl SourceSpec {
    /// Build a spec that runs `program` with no queries.
    pub fn new<I, S>(program: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into_iter().map(Into::into).collect(),
            working_dir: String::new(),
            query: IndexMap::new(),
        }
    }

    /// Set the working directory.
    pub fn with_working_dir(mut self, dir: impl Into<String>) -> Self {
        self.working_dir = dir.into();
        self
    }

    /// Add a named query.
    pub fn with_query(mut self, name: impl Into<String>, expression: impl Into<String>) -> Self {
        self.query.insert(name.into(), expression.into());
        self
    }

    /// Executable name, used in diagnostics.
    pub(crate) fn executable(&self) -> &str {
        self.program.first().map(String::as_str).unwrap_or_default()
    }

    /// Check that the invocation is runnable.
    ///
    /// A schema describing "list of strings" cannot express "non-empty", so
    /// the check happens here, before a process is ever spawned.
    pub fn validate(&self) -> Result<(), ReadError> {
        if self.program.is_empty() {
            return Err(ReadError::EmptyProgram);
        }
        Ok(())
    }

    /// Compile every configured query without running the program.
    ///
    /// Fails with the first expression the evaluator rejects.
    pub fn check_queries(&self) -> Result<(), ReadError> {
        for (name, expression) in &self.query {
            extract::compile(name, expression)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "spec_tests.rs"]
mod tests;
