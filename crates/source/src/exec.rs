// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess invocation for data source reads.

use std::process::Stdio;
use std::time::Instant;

use crate::error::ReadError;
use crate::spec::SourceSpec;

/// Run the configured program to completion and capture its stdout.
///
/// Arguments are passed to the operating system exactly as configured; no
/// shell is interposed. stderr is captured for diagnostics only, stdin is
/// closed, and the working directory is overridden only when the spec names
/// one. No timeout is imposed here; the caller's own cancellation
/// mechanism, if any, governs the blocking call.
pub(crate) async fn run_program(spec: &SourceSpec) -> Result<Vec<u8>, ReadError> {
    let Some((executable, args)) = spec.program.split_first() else {
        return Err(ReadError::EmptyProgram);
    };

    let span = tracing::info_span!(
        "source.exec",
        program = %executable,
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );
    let start = Instant::now();

    let mut command = tokio::process::Command::new(executable);
    command.args(args);
    if !spec.working_dir.is_empty() {
        command.current_dir(&spec.working_dir);
    }
    command.stdin(Stdio::null());
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());

    let output = command.output().await.map_err(|source| ReadError::Spawn {
        program: executable.clone(),
        source,
    })?;

    span.record("exit_code", output.status.code().unwrap_or(-1));
    span.record("duration_ms", start.elapsed().as_millis() as u64);

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if stderr.is_empty() {
            return Err(ReadError::ProgramFailedSilent {
                program: executable.clone(),
            });
        }
        return Err(ReadError::ProgramFailed {
            program: executable.clone(),
            stderr,
        });
    }

    tracing::trace!(
        parent: &span,
        stdout = %String::from_utf8_lossy(&output.stdout),
        "captured program output"
    );

    Ok(output.stdout)
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
