//! Telemetry initialization and delegation span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize `tracing` and format developer logs.
///
/// The default level is `warn` so the launcher stays silent unless asked:
/// the delegated program owns the terminal output.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of a delegated run.
pub struct DelegationSpan {
    span: Span,
    started_at: Instant,
}

impl DelegationSpan {
    /// Start a delegation span.
    pub fn start(program: &str, entry_point: &str) -> Self {
        let span = info_span!(
            target: "specify_launcher::delegate",
            "delegated_run",
            program,
            entry_point
        );
        Self {
            span,
            started_at: Instant::now(),
        }
    }

    /// Close the span while recording status and the child's exit code.
    pub fn finish(self, status: &'static str, exit_code: Option<i32>) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "specify_launcher::delegate",
            status = status,
            exit_code = exit_code,
            elapsed_ms = elapsed_ms,
            "Completed delegated run"
        );
    }
}

/// Payload for logging the resolved launch as structured telemetry.
#[derive(Debug)]
pub struct LaunchTelemetry<'a> {
    pub runner: &'a str,
    pub entry_point: &'a str,
    pub project_root: &'a str,
    pub original_dir: &'a str,
    pub forwarded_args: &'a [String],
}

/// Emit the resolved launch to `tracing`.
pub fn emit_launch(telemetry: &LaunchTelemetry<'_>) {
    info!(
        target: "specify_launcher::launch",
        runner = telemetry.runner,
        entry_point = telemetry.entry_point,
        project_root = telemetry.project_root,
        original_dir = telemetry.original_dir,
        forwarded_args = ?telemetry.forwarded_args,
        "Delegating to the Specify CLI"
    );
}
