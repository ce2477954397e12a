//! Delegation execution: switch into the project root, run the external
//! runner, restore the caller's directory, and surface the child's exit code.

use std::process::ExitCode;

use anyhow::Error;

use crate::cli::LaunchPlan;

use super::{
    errors::LaunchError,
    runner::{build_delegation_command, DelegationRequest, RunnerInvocation, RUNNER_PROGRAM},
    telemetry::{self, DelegationSpan, LaunchTelemetry},
    workdir::WorkdirGuard,
};

/// Result of a completed delegation.
#[derive(Debug)]
pub struct DelegationOutcome {
    /// Exit code for this process, equal to the child's where one exists.
    pub exit: ExitCode,
    /// Raw exit code reported by the child, if it exited normally.
    pub raw_code: Option<i32>,
}

/// Bundles a launch failure message with an exit code for `main`.
#[derive(Debug)]
pub struct LauncherExit {
    message: String,
    exit_code: ExitCode,
}

impl LauncherExit {
    pub fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:?}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    pub fn report(self) -> ExitCode {
        eprintln!("{}", self.message);
        self.exit_code
    }
}

/// Run one delegation with the working directory scoped to the project root.
///
/// The guard is released before the child's status is inspected, so the
/// caller's directory is restored on success, child failure, and spawn
/// failure alike.
pub async fn run_delegation(
    invocation: &RunnerInvocation<'_>,
    request: &DelegationRequest<'_>,
) -> Result<DelegationOutcome, LaunchError> {
    let guard = WorkdirGuard::change_to(invocation.project_root)?;
    delegate_with_guard(guard, invocation, request).await
}

async fn delegate_with_guard(
    guard: WorkdirGuard,
    invocation: &RunnerInvocation<'_>,
    request: &DelegationRequest<'_>,
) -> Result<DelegationOutcome, LaunchError> {
    let program = invocation.program.to_string_lossy().into_owned();
    let span = DelegationSpan::start(&program, &request.entry_point.to_string_lossy());

    let run = build_delegation_command(invocation, request).status().await;
    guard.restore()?;

    match run {
        Ok(status) => {
            let raw_code = status.code();
            let label = if status.success() { "succeeded" } else { "failed" };
            span.finish(label, raw_code);
            Ok(DelegationOutcome {
                exit: exit_code_from(raw_code),
                raw_code,
            })
        }
        Err(source) => {
            span.finish("spawn_failed", None);
            Err(LaunchError::Spawn { program, source })
        }
    }
}

/// Run the fixed `uv run python` delegation described by the launch plan.
///
/// The original working directory is captured exactly once, by the guard;
/// launch telemetry reads it from there.
pub async fn run_launcher(plan: &LaunchPlan) -> Result<ExitCode, LaunchError> {
    let locations = &plan.locations;
    let invocation = RunnerInvocation::specify(&locations.project_root);
    let guard = WorkdirGuard::change_to(invocation.project_root)?;

    telemetry::emit_launch(&LaunchTelemetry {
        runner: RUNNER_PROGRAM,
        entry_point: &locations.entry_point.to_string_lossy(),
        project_root: &locations.project_root.to_string_lossy(),
        original_dir: &guard.original().to_string_lossy(),
        forwarded_args: &plan.launch_args,
    });

    let outcome = delegate_with_guard(
        guard,
        &invocation,
        &DelegationRequest {
            entry_point: &locations.entry_point,
            forwarded_args: &plan.forwarded_args,
        },
    )
    .await?;

    Ok(outcome.exit)
}

/// Map a child exit code onto this process's exit code.
///
/// A child killed by a signal reports no code and maps to plain failure.
fn exit_code_from(raw_code: Option<i32>) -> ExitCode {
    match raw_code {
        Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(u8::MAX)),
        None => ExitCode::FAILURE,
    }
}
