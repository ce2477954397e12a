//! CLI argument capture and `LaunchPlan` construction.
use std::{env, ffi::OsString};

use anyhow::Result;
use clap::Parser;

use crate::lib::paths::LauncherLocations;

use super::LaunchPlan;

/// Command-line arguments.
///
/// The launcher owns no flags or subcommands; clap's built-in `--help` and
/// `--version` are disabled so every token, hyphenated or not, is forwarded
/// verbatim to the delegated Specify CLI.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "specify",
    about = "Delegates to the Specify CLI via `uv run python`",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct LauncherArgs {
    /// Arguments forwarded unchanged, in order, to the Specify CLI.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub forwarded: Vec<OsString>,
}

impl LauncherArgs {
    /// Capture the process arguments verbatim.
    ///
    /// clap consumes the first `--` it sees as its escape token. A caller's
    /// literal leading `--` must reach the child, so the real argv is
    /// shielded behind an injected escape token before clap parses it.
    pub fn from_env() -> Self {
        Self::parse_from(escaped_argv(env::args_os()))
    }

    /// Resolve launcher locations and pair them with the forwarded arguments.
    pub fn into_plan(self) -> Result<LaunchPlan> {
        let locations = LauncherLocations::resolve()?;
        Ok(LaunchPlan::new(locations, self.forwarded))
    }
}

fn escaped_argv(argv: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut argv = argv.into_iter();
    let mut shielded = Vec::new();
    shielded.push(argv.next().unwrap_or_else(|| OsString::from("specify")));
    shielded.push(OsString::from("--"));
    shielded.extend(argv);
    shielded
}
