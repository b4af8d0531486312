// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! quarry-manifest: declarative HCL manifests naming external-program data
//! sources.
//!
//! ```hcl
//! data "weather" {
//!   program = ["curl", "-s", "wttr.in/?format=j1"]
//!
//!   query = {
//!     temp = "current_condition[0].temp_C"
//!   }
//! }
//! ```

use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use quarry_source::{ReadError, SourceSpec};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading or validating a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The manifest text is not valid HCL, or its shape is wrong.
    #[error("invalid manifest: {0}")]
    Parse(#[from] hcl::Error),

    /// A declared data source fails spec-level validation.
    #[error("data source {name:?}: {source}")]
    Invalid {
        name: String,
        #[source]
        source: ReadError,
    },
}

/// A parsed manifest: named data sources in declaration order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// `data "<name>" { ... }` blocks, keyed by their label.
    #[serde(default, rename = "data")]
    pub sources: IndexMap<String, SourceSpec>,
}

impl Manifest {
    /// Load a manifest from a file.
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let input = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.display().to_string(),
            source,
        })?;
        input.parse()
    }

    /// Look up one data source by name.
    pub fn get(&self, name: &str) -> Option<&SourceSpec> {
        self.sources.get(name)
    }

    /// Validate every declared source without running anything.
    pub fn validate(&self) -> Result<(), ManifestError> {
        for (name, spec) in &self.sources {
            spec.validate().map_err(|source| ManifestError::Invalid {
                name: name.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

impl FromStr for Manifest {
    type Err = ManifestError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Ok(hcl::from_str(input)?)
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
