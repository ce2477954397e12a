//! Scoped mutation of the process working directory.
//!
//! The working directory is process-global state; the guard below captures the
//! caller's directory, switches to the project root, and guarantees the switch
//! is undone on every exit path, including spawn failures.

use std::{
    env,
    path::{Path, PathBuf},
};

use tracing::error;

use super::errors::LaunchError;

/// Guard that restores the original working directory when released.
///
/// Prefer [`WorkdirGuard::restore`] so restoration failures propagate; the
/// `Drop` implementation is the backstop for early-error paths and can only
/// log a failure.
#[derive(Debug)]
pub struct WorkdirGuard {
    original: PathBuf,
    restored: bool,
}

impl WorkdirGuard {
    /// Capture the current working directory, then switch to `target`.
    pub fn change_to(target: &Path) -> Result<Self, LaunchError> {
        let original =
            env::current_dir().map_err(|source| LaunchError::CurrentDirUnavailable { source })?;
        env::set_current_dir(target).map_err(|source| LaunchError::ChangeDir {
            path: target.to_path_buf(),
            source,
        })?;
        Ok(Self {
            original,
            restored: false,
        })
    }

    /// The directory captured before the switch.
    pub fn original(&self) -> &Path {
        &self.original
    }

    /// Restore the captured directory, surfacing any failure.
    pub fn restore(mut self) -> Result<(), LaunchError> {
        self.restored = true;
        env::set_current_dir(&self.original).map_err(|source| LaunchError::RestoreDir {
            path: self.original.clone(),
            source,
        })
    }
}

impl Drop for WorkdirGuard {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        if let Err(err) = env::set_current_dir(&self.original) {
            error!(
                target: "specify_launcher::workdir",
                original = %self.original.display(),
                error = %err,
                "Failed to restore the working directory"
            );
        }
    }
}
