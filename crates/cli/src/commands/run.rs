// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `quarry run`: evaluate data sources declared in a manifest.

use std::collections::BTreeMap;
use std::path::Path;

use quarry_manifest::Manifest;

use crate::exit_error::ExitError;
use crate::output::{self, OutputFormat};

pub async fn run(
    manifest_path: &Path,
    name: Option<&str>,
    format: OutputFormat,
) -> Result<(), ExitError> {
    let manifest = Manifest::from_path(manifest_path)?;
    manifest.validate()?;

    match name {
        Some(name) => {
            let spec = manifest.get(name).ok_or_else(|| {
                ExitError::new(
                    1,
                    format!(
                        "no data source named {name:?} in {}",
                        manifest_path.display()
                    ),
                )
            })?;
            let reading = quarry_source::read(spec).await?;
            print!("{}", output::render_values(&reading.values, format)?);
        }
        None => {
            let mut groups: Vec<(String, BTreeMap<String, String>)> = Vec::new();
            for (name, spec) in &manifest.sources {
                let reading = quarry_source::read(spec)
                    .await
                    .map_err(|err| ExitError::new(1, format!("data source {name:?}: {err}")))?;
                groups.push((name.clone(), reading.values));
            }
            print!("{}", output::render_grouped(&groups, format)?);
        }
    }

    Ok(())
}
