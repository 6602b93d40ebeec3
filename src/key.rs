//! Registry key-path validation.
//!
//! Key paths address a registry location as backslash-separated segments,
//! e.g. `HKEY_LOCAL_MACHINE\Software\Microsoft`. Paths are validated against
//! a fixed pattern and passed through to the `REG` tool verbatim; no
//! canonicalization or normalization is performed.

use crate::error::{RegError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Key-name pattern: one or more word characters followed by one or more
/// backslash-separated word-character segments, anchored at end of string.
///
/// A bare hive name (`HKEY_CURRENT_USER`) does not match; callers must
/// always supply at least one subkey level. The pattern carries no start
/// anchor, so validation only constrains the tail of the string.
static KEY_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+(?:\\\w+)+$").unwrap());

/// Returns true if the key path matches the key-name pattern.
pub fn is_valid_key_name(key_name: &str) -> bool {
    KEY_NAME_RE.is_match(key_name)
}

/// Validates a key path, failing with [`RegError::InvalidKeyName`] when the
/// path does not contain at least one backslash-separated subkey segment.
///
/// # Examples
///
/// ```
/// use reg_cli::key::validate_key_name;
///
/// assert!(validate_key_name(r"HKLM\Software").is_ok());
/// assert!(validate_key_name("HKLM").is_err());
/// ```
pub fn validate_key_name(key_name: &str) -> Result<()> {
    if is_valid_key_name(key_name) {
        Ok(())
    } else {
        Err(RegError::InvalidKeyName(key_name.to_string()))
    }
}
