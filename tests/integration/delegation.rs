use std::fs;

use anyhow::Result;
use specify_launcher::lib::{launcher::run_delegation, runner::DelegationRequest};
use tempfile::tempdir;

use crate::common::{canonical_cwd, os_args, sh_invocation, write_entry_script, WORKDIR_LOCK};

#[tokio::test]
async fn forwarded_arguments_reach_the_child_verbatim_and_in_order() -> Result<()> {
    let _lock = WORKDIR_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    let project = tempdir()?;
    let entry = write_entry_script(project.path(), "out=\"$1\"; shift; printf '%s\\n' \"$@\" > \"$out\"\n");
    let recorded = project.path().join("recorded.txt");
    let recorded_arg = recorded.to_string_lossy().into_owned();

    let outcome = run_delegation(
        &sh_invocation(project.path()),
        &DelegationRequest {
            entry_point: &entry,
            forwarded_args: &os_args(&[recorded_arg.as_str(), "init", "--here"]),
        },
    )
    .await?;

    assert_eq!(outcome.raw_code, Some(0));
    assert_eq!(fs::read_to_string(&recorded)?, "init\n--here\n");
    Ok(())
}

#[tokio::test]
async fn child_runs_with_the_project_root_as_working_directory() -> Result<()> {
    let _lock = WORKDIR_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    let project = tempdir()?;
    let entry = write_entry_script(project.path(), "pwd > \"$1\"\n");
    let recorded = project.path().join("child_cwd.txt");
    let recorded_arg = recorded.to_string_lossy().into_owned();

    run_delegation(
        &sh_invocation(project.path()),
        &DelegationRequest {
            entry_point: &entry,
            forwarded_args: &os_args(&[recorded_arg.as_str()]),
        },
    )
    .await?;

    let child_cwd = fs::read_to_string(&recorded)?;
    assert_eq!(
        fs::canonicalize(child_cwd.trim())?,
        project.path().canonicalize()?
    );
    Ok(())
}

#[tokio::test]
async fn child_relative_paths_resolve_against_the_project_root() -> Result<()> {
    let _lock = WORKDIR_LOCK.lock().unwrap_or_else(|err| err.into_inner());
    let project = tempdir()?;
    let entry = write_entry_script(project.path(), "printf ok > relative-marker.txt\n");

    let outcome = run_delegation(
        &sh_invocation(project.path()),
        &DelegationRequest {
            entry_point: &entry,
            forwarded_args: &[],
        },
    )
    .await?;

    assert_eq!(outcome.raw_code, Some(0));
    assert!(
        project.path().join("relative-marker.txt").exists(),
        "child's relative write must land in the project root"
    );
    assert!(!canonical_cwd().join("relative-marker.txt").exists());
    Ok(())
}
