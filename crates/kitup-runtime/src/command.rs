//! Thin wrappers around external tool invocations.
//!
//! Detection probes run synchronously and swallow failures into
//! `Option`/`bool`; orchestration calls run through tokio and surface
//! every failure as an explicit `ExternalCommandFailed`.

use std::path::Path;
use std::process::Stdio;

use tracing::debug;

use kitup_core::{InstallError, InstallResult};

fn display(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}

/// Run a probe command and return its stdout on success.
///
/// Used during detection where a missing tool is an answer, not an
/// error: spawn failures and non-zero exits both yield `None`.
pub fn probe_output(program: &str, args: &[&str]) -> Option<String> {
    let output = std::process::Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// True when a probe command exists and exits zero.
pub fn probe_succeeds(program: &str, args: &[&str]) -> bool {
    std::process::Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Run an orchestration command, streaming its output to the terminal.
///
/// stdout/stderr are inherited so the user watches `git` and
/// `docker compose` progress live. Any failure is fatal.
pub async fn run_passthrough(
    program: &str,
    args: &[&str],
    dir: Option<&Path>,
) -> InstallResult<()> {
    let command = display(program, args);
    debug!(command = %command, "running external tool");

    let mut builder = tokio::process::Command::new(program);
    builder.args(args).stdin(Stdio::null());
    if let Some(dir) = dir {
        builder.current_dir(dir);
    }

    let status = builder
        .status()
        .await
        .map_err(|e| InstallError::ExternalCommandFailed {
            command: command.clone(),
            detail: e.to_string(),
        })?;

    if !status.success() {
        return Err(InstallError::ExternalCommandFailed {
            command,
            detail: format!("exited with {status}"),
        });
    }
    Ok(())
}
