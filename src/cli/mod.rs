//! CLI entrypoint module structure.

pub mod args;
pub mod plan;

pub use args::LauncherArgs;
pub use plan::{describe_forwarded_args, LaunchPlan};
