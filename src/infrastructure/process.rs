//! Subprocess helpers
//!
//! Every external tool goes through these functions so that spawn errors,
//! exit codes, and debug logging are handled the same way.

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::process::{Command, ExitStatus, Stdio};

use tracing::debug;

use crate::error::{PublishError, PublishResult};

/// Where a child's stdout goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Child shares the terminal
    #[default]
    Inherit,
    /// Child stdout is discarded (stdout is reserved for JSON events)
    Quiet,
}

impl OutputMode {
    pub fn from_json(json: bool) -> Self {
        if json {
            OutputMode::Quiet
        } else {
            OutputMode::Inherit
        }
    }

    pub(crate) fn apply(&self, cmd: &mut Command) {
        if *self == OutputMode::Quiet {
            cmd.stdout(Stdio::null());
        }
    }
}

/// Program name of a command, for messages
pub fn program_name(cmd: &Command) -> String {
    cmd.get_program().to_string_lossy().into_owned()
}

/// Space-joined arguments of a command, for messages
pub fn args_line(cmd: &Command) -> String {
    cmd.get_args()
        .map(OsStr::to_string_lossy)
        .collect::<Vec<_>>()
        .join(" ")
}

fn spawn_error(cmd: &Command, err: std::io::Error) -> PublishError {
    let program = program_name(cmd);
    if err.kind() == ErrorKind::NotFound {
        PublishError::CommandNotFound { program }
    } else {
        PublishError::Spawn {
            program,
            source: err,
        }
    }
}

fn failure(cmd: &Command, status: ExitStatus) -> PublishError {
    PublishError::CommandFailed {
        program: program_name(cmd),
        args: args_line(cmd),
        code: status.code(),
    }
}

/// Run a command to completion and return its exit status.
///
/// Only a failure to start the process is an error.
pub fn run_status(cmd: &mut Command) -> PublishResult<ExitStatus> {
    debug!(
        program = %program_name(cmd),
        args = %args_line(cmd),
        cwd = ?cmd.get_current_dir(),
        "running"
    );
    let status = cmd.status().map_err(|e| spawn_error(cmd, e))?;
    debug!(program = %program_name(cmd), code = ?status.code(), "exited");
    Ok(status)
}

/// Run a command and fail unless it exits successfully.
pub fn run_checked(cmd: &mut Command) -> PublishResult<()> {
    let status = run_status(cmd)?;
    if !status.success() {
        return Err(failure(cmd, status));
    }
    Ok(())
}

/// Run a command and capture its stdout; stderr stays on the terminal.
pub fn run_capture(cmd: &mut Command) -> PublishResult<String> {
    debug!(program = %program_name(cmd), args = %args_line(cmd), "capturing");
    let output = cmd
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| spawn_error(cmd, e))?;
    if !output.status.success() {
        return Err(failure(cmd, output.status));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
