use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures that can occur while resolving, delegating, or cleaning up a launch.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The launcher could not determine its own executable path.
    #[error("Failed to resolve the launcher executable path: {source}")]
    ResolveLauncherPath {
        #[source]
        source: io::Error,
    },
    /// The launcher path has no containing directory to use as the project root.
    #[error("Launcher executable {path} has no parent directory")]
    MissingProjectRoot { path: PathBuf },
    /// The caller's working directory could not be read.
    #[error("Failed to read the current working directory: {source}")]
    CurrentDirUnavailable {
        #[source]
        source: io::Error,
    },
    /// Switching into the project root failed.
    #[error("Failed to change working directory to {path}: {source}")]
    ChangeDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Restoring the caller's working directory failed.
    #[error("Failed to restore working directory to {path}: {source}")]
    RestoreDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The external runner process could not be spawned or awaited.
    #[error("Failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}
