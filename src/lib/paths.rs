//! Resolution of the launcher's own location and the delegated entry point.

use std::{
    env,
    path::{Path, PathBuf},
};

use super::errors::LaunchError;

/// Fixed subpath of the delegated entry point beneath the project root.
pub const ENTRY_POINT_SUBPATH: [&str; 3] = ["src", "specify_cli", "__init__.py"];

/// Absolute locations derived from the launcher executable, fixed for the
/// lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherLocations {
    /// Absolute path of the launcher executable itself.
    pub launcher_path: PathBuf,
    /// Directory containing the launcher; the child's working directory.
    pub project_root: PathBuf,
    /// Absolute path of the delegated Python entry point.
    pub entry_point: PathBuf,
}

impl LauncherLocations {
    /// Resolve locations from the running executable.
    pub fn resolve() -> Result<Self, LaunchError> {
        let launcher_path =
            env::current_exe().map_err(|source| LaunchError::ResolveLauncherPath { source })?;
        Self::from_launcher_path(launcher_path)
    }

    /// Derive the project root and entry point from an explicit launcher path.
    ///
    /// The entry point is not checked for existence: a missing target surfaces
    /// as a failure from the spawned runner, not from an earlier check.
    pub fn from_launcher_path(launcher_path: PathBuf) -> Result<Self, LaunchError> {
        let project_root = launcher_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .ok_or_else(|| LaunchError::MissingProjectRoot {
                path: launcher_path.clone(),
            })?;

        let mut entry_point = project_root.clone();
        for segment in ENTRY_POINT_SUBPATH {
            entry_point.push(segment);
        }

        Ok(Self {
            launcher_path,
            project_root,
            entry_point,
        })
    }
}

/// Returns true if the path is non-empty and absolute.
pub fn is_nonempty_absolute(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_absolute()
}
