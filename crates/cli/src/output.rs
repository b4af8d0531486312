// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Result-map rendering shared by the `read` and `run` commands.

use std::collections::BTreeMap;

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render a flat result map.
///
/// Text mode prints one `name = value` line per key; JSON mode prints the
/// map as a single object.
pub fn render_values(values: &BTreeMap<String, String>, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for (name, value) in values {
                out.push_str(name);
                out.push_str(" = ");
                out.push_str(value);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(values)?)),
    }
}

/// Render result maps for several sources.
///
/// Text mode prefixes each key with its source name; JSON mode nests one
/// object per source.
pub fn render_grouped(
    groups: &[(String, BTreeMap<String, String>)],
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for (source, values) in groups {
                for (name, value) in values {
                    out.push_str(source);
                    out.push('.');
                    out.push_str(name);
                    out.push_str(" = ");
                    out.push_str(value);
                    out.push('\n');
                }
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let mut object = serde_json::Map::new();
            for (source, values) in groups {
                object.insert(source.clone(), serde_json::to_value(values)?);
            }
            Ok(format!(
                "{}\n",
                serde_json::to_string_pretty(&serde_json::Value::Object(object))?
            ))
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
