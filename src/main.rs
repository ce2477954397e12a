//! Entry point for the Specify launcher.
use std::process::ExitCode;

use specify_launcher::{
    cli::LauncherArgs,
    lib::{
        launcher::{self, LauncherExit},
        telemetry,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(code) => code,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<ExitCode, LauncherExit> {
    telemetry::init_tracing().map_err(LauncherExit::from_error)?;
    let args = LauncherArgs::from_env();
    let plan = args.into_plan().map_err(LauncherExit::from_error)?;
    launcher::run_launcher(&plan)
        .await
        .map_err(LauncherExit::from_error)
}
