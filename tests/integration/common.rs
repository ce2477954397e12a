use std::{
    env,
    ffi::{OsStr, OsString},
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use specify_launcher::lib::runner::RunnerInvocation;

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_specify");

// The working directory is process-global; every test that delegates (and so
// switches directories) must hold this lock.
pub static WORKDIR_LOCK: Mutex<()> = Mutex::new(());

/// Delegation invocation that substitutes `sh` for the real package runner so
/// tests do not depend on `uv` being installed.
pub fn sh_invocation(project_root: &Path) -> RunnerInvocation<'_> {
    RunnerInvocation {
        program: OsStr::new("sh"),
        prelude_args: &[],
        project_root,
    }
}

/// Write a shell script to act as the delegated entry point.
pub fn write_entry_script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("entry.sh");
    fs::write(&path, body).expect("can write entry script");
    path
}

pub fn os_args(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

pub fn canonical_cwd() -> PathBuf {
    env::current_dir()
        .and_then(|dir| dir.canonicalize())
        .expect("current directory should be readable")
}
