//! Shared library modules providing error types, path resolution, the working
//! directory guard, delegation command construction, and telemetry.

pub mod errors;
pub mod launcher;
pub mod paths;
pub mod runner;
pub mod telemetry;
pub mod workdir;
