//! Resolved launch plan handed from the CLI layer to the launcher.
use std::ffi::OsString;

use crate::lib::paths::LauncherLocations;

/// Everything the launcher needs for one delegation.
#[derive(Debug, Clone)]
pub struct LaunchPlan {
    /// Absolute locations derived from the launcher executable.
    pub locations: LauncherLocations,
    /// Caller arguments, forwarded untouched and in order.
    pub forwarded_args: Vec<OsString>,
    /// Lossy rendering of the forwarded arguments for logging.
    pub launch_args: Vec<String>,
}

impl LaunchPlan {
    pub fn new(locations: LauncherLocations, forwarded_args: Vec<OsString>) -> Self {
        let launch_args = describe_forwarded_args(&forwarded_args);
        Self {
            locations,
            forwarded_args,
            launch_args,
        }
    }
}

/// Render forwarded arguments as plain strings suitable for logging.
pub fn describe_forwarded_args(args: &[OsString]) -> Vec<String> {
    args.iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
