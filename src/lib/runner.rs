//! Shared helpers for building the delegation command.

use std::{
    ffi::{OsStr, OsString},
    path::Path,
};

use tokio::process::Command;

/// External package runner invoked by the launcher.
pub const RUNNER_PROGRAM: &str = "uv";
/// Fixed runner arguments placed before the interpreter token.
pub const RUNNER_SUBCOMMAND: &str = "run";
/// Interpreter token handed to the runner.
pub const INTERPRETER: &str = "python";

/// Which runner to invoke and where to run it.
pub struct RunnerInvocation<'a> {
    pub program: &'a OsStr,
    pub prelude_args: &'a [&'a str],
    pub project_root: &'a Path,
}

impl<'a> RunnerInvocation<'a> {
    /// The fixed `uv run python` invocation used by the launcher binary.
    pub fn specify(project_root: &'a Path) -> Self {
        Self {
            program: OsStr::new(RUNNER_PROGRAM),
            prelude_args: &[RUNNER_SUBCOMMAND, INTERPRETER],
            project_root,
        }
    }
}

/// What to delegate: the entry point plus the caller's arguments.
pub struct DelegationRequest<'a> {
    pub entry_point: &'a Path,
    pub forwarded_args: &'a [OsString],
}

/// Build the delegation command.
///
/// The child runs with the project root as its working directory and inherits
/// the launcher's standard streams. Forwarded arguments keep their order.
pub fn build_delegation_command(
    invocation: &RunnerInvocation<'_>,
    request: &DelegationRequest<'_>,
) -> Command {
    let mut command = Command::new(invocation.program);
    command.kill_on_drop(true);
    command.current_dir(invocation.project_root);

    for arg in invocation.prelude_args {
        command.arg(arg);
    }
    command.arg(request.entry_point);
    for arg in request.forwarded_args {
        command.arg(arg);
    }

    command
}
