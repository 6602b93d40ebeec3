//! Error types for registry command operations.
//!
//! This module provides error handling for all registry operations, covering
//! pre-flight validation failures (platform, permission, key name) as well as
//! failures of the spawned `REG` process and of output parsing.

use std::io;
use thiserror::Error;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegError>;

/// Errors that can occur while building, running, or parsing a `REG` command.
#[derive(Error, Debug)]
pub enum RegError {
    /// The host operating system is not Windows.
    ///
    /// Raised synchronously before any process is spawned.
    #[error("unsupported platform: {os} (the REG utility requires Windows)")]
    UnsupportedPlatform {
        /// Operating system name as reported by `std::env::consts::OS`.
        os: String,
    },

    /// The subprocess execution capability was withheld by the host.
    #[error("subprocess execution denied: {reason}")]
    PermissionDenied {
        /// Description of the denial, usually the underlying OS error text.
        reason: String,
    },

    /// A key path failed the key-name validator.
    ///
    /// Valid paths contain at least one backslash-separated subkey segment,
    /// e.g. `HKLM\Software`. A bare hive name is rejected.
    #[error("invalid key name: {0:?}")]
    InvalidKeyName(String),

    /// The `REG` process exited with a failure status.
    ///
    /// Carries the exit code (`None` if the process was terminated without
    /// one) and the decoded standard-error text.
    #[error("REG command failed (exit code {code:?}): {stderr}")]
    CommandFailed {
        /// Exit code of the `REG` process, if any.
        code: Option<i32>,
        /// Decoded standard-error output of the process.
        stderr: String,
    },

    /// A query or compare output line survived filtering but could not be
    /// split into the expected number of fields.
    #[error("malformed output line: {line:?}")]
    MalformedOutput {
        /// The offending line, after whitespace collapsing.
        line: String,
    },

    /// I/O error while spawning the process or reading its output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl RegError {
    /// Creates an unsupported-platform error for the current host.
    pub fn unsupported_platform() -> Self {
        Self::UnsupportedPlatform {
            os: std::env::consts::OS.to_string(),
        }
    }

    /// Creates a permission-denied error from an underlying I/O error.
    pub fn permission_denied(source: &io::Error) -> Self {
        Self::PermissionDenied {
            reason: source.to_string(),
        }
    }

    /// Creates a command-failed error from an exit code and stderr text.
    pub fn command_failed(code: Option<i32>, stderr: impl Into<String>) -> Self {
        Self::CommandFailed {
            code,
            stderr: stderr.into(),
        }
    }

    /// Creates a malformed-output error for a line that could not be parsed.
    pub fn malformed_output(line: impl Into<String>) -> Self {
        Self::MalformedOutput { line: line.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = RegError::InvalidKeyName("HKLM".to_string());
        assert!(err.to_string().contains("HKLM"));

        let err = RegError::command_failed(Some(1), "ERROR: Access is denied.");
        assert!(err.to_string().contains("Access is denied"));
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: RegError = io_err.into();
        assert!(matches!(err, RegError::Io(_)));
    }

    #[test]
    fn test_permission_denied_reason() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied by policy");
        let err = RegError::permission_denied(&io_err);
        match err {
            RegError::PermissionDenied { reason } => assert!(reason.contains("denied by policy")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
