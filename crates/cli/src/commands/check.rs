// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `quarry check`: validate a manifest without running any program.

use std::path::Path;

use quarry_manifest::Manifest;

use crate::exit_error::ExitError;

pub fn run(manifest_path: &Path) -> Result<(), ExitError> {
    let manifest = Manifest::from_path(manifest_path)?;
    manifest.validate()?;

    for (name, spec) in &manifest.sources {
        spec.check_queries()
            .map_err(|err| ExitError::new(1, format!("data source {name:?}: {err}")))?;
    }

    println!(
        "{}: {} data source(s) OK",
        manifest_path.display(),
        manifest.sources.len()
    );
    Ok(())
}
