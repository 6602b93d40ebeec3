//! Shell invocation and output capture for composed `REG` command lines.
//!
//! The runner splits the command string naively on single spaces, prefixes
//! the result with a `cmd /C` shell invocation, and blocks until the process
//! exits with both output streams fully buffered. There is no timeout, no
//! retry, and no streaming; a hung `REG` process hangs the calling
//! operation. Each invocation is fully self-contained, so concurrent calls
//! are only as safe as concurrent subprocess spawning on the host.

use crate::error::{RegError, Result};
use encoding_rs::UTF_16LE;
use std::io;
use std::process::Command;
use tracing::debug;

/// Captured output of a finished `REG` process.
#[derive(Debug, Clone)]
pub(crate) struct CommandOutput {
    /// Exit code, or `None` if the process was terminated without one.
    pub status: Option<i32>,

    /// Decoded standard output.
    pub stdout: String,

    /// Decoded standard error.
    pub stderr: String,
}

/// Executes a composed command line through `cmd /C` and captures both
/// output streams.
///
/// The command string is split on single spaces into the argument vector.
/// Double-quoted values containing spaces are therefore broken across
/// arguments; the builders avoid producing such values for the flags where
/// it would matter, and the behavior is kept as-is for compatibility with
/// the command shapes this runner has always executed.
///
/// # Errors
///
/// Returns [`RegError::PermissionDenied`] when the host refuses to spawn
/// the shell, and [`RegError::Io`] for any other spawn or read failure.
pub(crate) fn run(command: &str) -> Result<CommandOutput> {
    debug!(%command, "spawning shell for REG invocation");

    let output = Command::new("cmd")
        .arg("/C")
        .args(command.split(' '))
        .output()
        .map_err(|err| match err.kind() {
            io::ErrorKind::PermissionDenied => RegError::permission_denied(&err),
            _ => RegError::Io(err),
        })?;

    let result = CommandOutput {
        status: output.status.code(),
        stdout: decode_console_text(&output.stdout),
        stderr: decode_console_text(&output.stderr),
    };
    debug!(
        status = ?result.status,
        stdout_len = result.stdout.len(),
        stderr_len = result.stderr.len(),
        "REG process finished"
    );
    Ok(result)
}

/// Decodes console output bytes to text.
///
/// `cmd /U` style output carries a UTF-16LE byte-order mark; everything
/// else is decoded as lossy UTF-8.
pub(crate) fn decode_console_text(bytes: &[u8]) -> String {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        let (decoded, _encoding, _had_errors) = UTF_16LE.decode(&bytes[2..]);
        decoded.into_owned()
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_console_text(b"plain text"), "plain text");
    }

    #[test]
    fn test_decode_utf8_lossy() {
        // Invalid UTF-8 bytes are replaced, not rejected.
        let decoded = decode_console_text(&[0x61, 0xFF, 0x62]);
        assert!(decoded.starts_with('a'));
        assert!(decoded.ends_with('b'));
    }

    #[test]
    fn test_decode_utf16_with_bom() {
        // "Hi" as UTF-16LE with a byte-order mark.
        let bytes = [0xFF, 0xFE, b'H', 0x00, b'i', 0x00];
        assert_eq!(decode_console_text(&bytes), "Hi");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_console_text(b""), "");
    }
}
