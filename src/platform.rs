//! Capability gate for spawning the `REG` tool.
//!
//! Every operation checks that the host platform is Windows before building
//! a command. Callers that want to fail fast can additionally invoke
//! [`init`], which probes that the `reg` executable is actually spawnable
//! and memoizes the outcome in process-wide state; the probe runs at most
//! once per process and there is no teardown to perform. Skipping [`init`]
//! only defers capability discovery to the first real invocation, where a
//! refused spawn surfaces as [`RegError::PermissionDenied`].

use crate::error::{RegError, Result};
use std::io;
use std::process::{Command, Stdio};
use std::sync::OnceLock;
use tracing::debug;

/// Memoized outcome of the one-time availability probe.
static PROBE: OnceLock<std::result::Result<(), ProbeFailure>> = OnceLock::new();

/// Cloneable probe failure, stored in the memo and converted to
/// [`RegError`] on the way out.
#[derive(Debug, Clone)]
enum ProbeFailure {
    Unsupported(String),
    Permission(String),
    Spawn(String),
}

impl From<ProbeFailure> for RegError {
    fn from(failure: ProbeFailure) -> Self {
        match failure {
            ProbeFailure::Unsupported(os) => RegError::UnsupportedPlatform { os },
            ProbeFailure::Permission(reason) => RegError::PermissionDenied { reason },
            ProbeFailure::Spawn(reason) => {
                RegError::Io(io::Error::new(io::ErrorKind::NotFound, reason))
            }
        }
    }
}

/// Checks that the host platform can run the `REG` tool at all.
///
/// # Errors
///
/// Returns [`RegError::UnsupportedPlatform`] on any operating system other
/// than Windows.
pub fn ensure_supported() -> Result<()> {
    if cfg!(target_os = "windows") {
        Ok(())
    } else {
        Err(RegError::unsupported_platform())
    }
}

/// Explicit initialization: verifies the platform and probes that the `reg`
/// executable can be spawned.
///
/// The probe result is memoized for the lifetime of the process, so calling
/// this more than once is cheap and returns the original outcome. The probe
/// only checks spawnability; the exit status of `reg /?` is irrelevant.
///
/// # Errors
///
/// Returns [`RegError::UnsupportedPlatform`] off Windows,
/// [`RegError::PermissionDenied`] when the host refuses to spawn
/// subprocesses, and [`RegError::Io`] when the executable cannot be found
/// or started for any other reason.
pub fn init() -> Result<()> {
    let outcome = PROBE.get_or_init(probe);
    outcome.clone().map_err(RegError::from)
}

fn probe() -> std::result::Result<(), ProbeFailure> {
    if !cfg!(target_os = "windows") {
        return Err(ProbeFailure::Unsupported(std::env::consts::OS.to_string()));
    }

    debug!("probing reg executable availability");
    match Command::new("reg")
        .arg("/?")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(_) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
            Err(ProbeFailure::Permission(err.to_string()))
        }
        Err(err) => Err(ProbeFailure::Spawn(err.to_string())),
    }
}
