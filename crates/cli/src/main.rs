// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! quarry: run an external program and query its JSON output.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod exit_error;
mod output;

use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "quarry",
    version,
    about = "Expose an external program's JSON output as key/value data"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a program once and evaluate queries given on the command line
    Read {
        /// Program and its arguments; repeat the flag for each element
        #[arg(short = 'p', long = "program", required = true)]
        program: Vec<String>,

        /// Working directory for the program (default: current directory)
        #[arg(short = 'C', long = "working-dir", default_value = "")]
        working_dir: String,

        /// Named query as name=expression; repeat for each query
        #[arg(short = 'q', long = "query", value_parser = commands::read::parse_query)]
        query: Vec<(String, String)>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Evaluate data sources declared in a manifest
    Run {
        /// Manifest file with `data` blocks
        manifest: PathBuf,

        /// Evaluate only this data source (default: all, in declaration order)
        name: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate a manifest without running any program
    Check {
        /// Manifest file with `data` blocks
        manifest: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Read {
            program,
            working_dir,
            query,
            format,
        } => commands::read::run(program, working_dir, query, format).await,
        Command::Run {
            manifest,
            name,
            format,
        } => commands::run::run(&manifest, name.as_deref(), format).await,
        Command::Check { manifest } => commands::check::run(&manifest),
    };

    if let Err(err) = outcome {
        eprintln!("error: {}", err.message);
        std::process::exit(err.code);
    }
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
