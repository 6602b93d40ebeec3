//! Public registry operations.
//!
//! Each operation is an independent, self-contained unit of work: it checks
//! the capability gate, validates its key path(s), builds the command line,
//! runs it through the shell, and either parses the output (`query`,
//! `compare`) or returns the decoded standard output verbatim (all mutation
//! verbs). No state is shared between calls and nothing is cached.
//!
//! A non-zero exit of the `REG` process is surfaced as
//! [`RegError::CommandFailed`] carrying the captured standard error, never
//! silently returned as a success payload. The one exception is `compare`,
//! where the native tool exits 2 to report "differences found"; exit codes
//! 0 and 2 are both success there.

use crate::command::{
    add_command, compare_command, copy_command, delete_command, export_command, load_command,
    query_command, restore_command, save_command, unload_command, AddOptions, CompareOptions,
    CopyOptions, DeleteOptions, ExportOptions, LoadOptions, QueryOptions, RestoreOptions,
    SaveOptions, UnloadOptions,
};
use crate::compare::{parse_compare, CompareResult};
use crate::error::{RegError, Result};
use crate::key::validate_key_name;
use crate::platform;
use crate::process::{self, CommandOutput};
use crate::query::{parse_query, QueryResult};
use tracing::instrument;

/// Exit codes treated as success for most verbs.
const OK: &[i32] = &[0];

/// Exit codes treated as success for `COMPARE` (2 = differences found).
const OK_COMPARE: &[i32] = &[0, 2];

fn ensure_success(output: &CommandOutput, ok_codes: &[i32]) -> Result<()> {
    match output.status {
        Some(code) if ok_codes.contains(&code) => Ok(()),
        status => Err(RegError::command_failed(status, output.stderr.clone())),
    }
}

/// Queries values at the key path, returning parsed records in output
/// order.
///
/// # Errors
///
/// Returns [`RegError::UnsupportedPlatform`] off Windows,
/// [`RegError::InvalidKeyName`] for a path without a subkey segment,
/// [`RegError::CommandFailed`] when the tool exits non-zero, and
/// [`RegError::MalformedOutput`] when a result line cannot be tokenized.
#[instrument(skip(options))]
pub fn query(key_name: &str, options: &QueryOptions) -> Result<QueryResult> {
    platform::ensure_supported()?;
    validate_key_name(key_name)?;
    let output = process::run(&query_command(key_name, options))?;
    ensure_success(&output, OK)?;
    parse_query(key_name, &output.stdout)
}

/// Adds a registry entry at the key path, overwriting without a prompt.
///
/// Returns the tool's decoded standard output.
///
/// # Errors
///
/// Returns [`RegError::UnsupportedPlatform`], [`RegError::InvalidKeyName`],
/// or [`RegError::CommandFailed`] as for [`query`].
#[instrument(skip(options))]
pub fn add(key_name: &str, options: &AddOptions) -> Result<String> {
    platform::ensure_supported()?;
    validate_key_name(key_name)?;
    let output = process::run(&add_command(key_name, options))?;
    ensure_success(&output, OK)?;
    Ok(output.stdout)
}

/// Removes a registry entry at the key path, deleting without a prompt.
///
/// Returns the tool's decoded standard output.
///
/// # Errors
///
/// Returns [`RegError::UnsupportedPlatform`], [`RegError::InvalidKeyName`],
/// or [`RegError::CommandFailed`] as for [`query`].
#[instrument(skip(options))]
pub fn remove(key_name: &str, options: &DeleteOptions) -> Result<String> {
    platform::ensure_supported()?;
    validate_key_name(key_name)?;
    let output = process::run(&delete_command(key_name, options))?;
    ensure_success(&output, OK)?;
    Ok(output.stdout)
}

/// Copies a registry entry from `source` to `destination`, overwriting
/// without a prompt.
///
/// Returns the tool's decoded standard output.
///
/// # Errors
///
/// Both key paths are validated; otherwise as for [`query`].
#[instrument(skip(options))]
pub fn copy(source: &str, destination: &str, options: &CopyOptions) -> Result<String> {
    platform::ensure_supported()?;
    validate_key_name(source)?;
    validate_key_name(destination)?;
    let output = process::run(&copy_command(source, destination, options))?;
    ensure_success(&output, OK)?;
    Ok(output.stdout)
}

/// Saves the key to a hive file, overwriting the file without a prompt.
///
/// The file name is passed through to the tool unvalidated. Returns the
/// tool's decoded standard output.
///
/// # Errors
///
/// As for [`query`].
#[instrument(skip(options))]
pub fn save(key_name: &str, file_name: &str, options: &SaveOptions) -> Result<String> {
    platform::ensure_supported()?;
    validate_key_name(key_name)?;
    let output = process::run(&save_command(key_name, file_name, options))?;
    ensure_success(&output, OK)?;
    Ok(output.stdout)
}

/// Restores the key from a hive file previously written by [`save`].
///
/// Returns the tool's decoded standard output.
///
/// # Errors
///
/// As for [`query`].
#[instrument(skip(options))]
pub fn restore(key_name: &str, file_name: &str, options: &RestoreOptions) -> Result<String> {
    platform::ensure_supported()?;
    validate_key_name(key_name)?;
    let output = process::run(&restore_command(key_name, file_name, options))?;
    ensure_success(&output, OK)?;
    Ok(output.stdout)
}

/// Loads a hive file under the key path.
///
/// Returns the tool's decoded standard output.
///
/// # Errors
///
/// As for [`query`].
#[instrument(skip(options))]
pub fn load(key_name: &str, file_name: &str, options: &LoadOptions) -> Result<String> {
    platform::ensure_supported()?;
    validate_key_name(key_name)?;
    let output = process::run(&load_command(key_name, file_name, options))?;
    ensure_success(&output, OK)?;
    Ok(output.stdout)
}

/// Unloads a previously loaded hive at the key path.
///
/// The file name is carried for call-shape compatibility even though the
/// native verb ignores it. Returns the tool's decoded standard output.
///
/// # Errors
///
/// As for [`query`].
#[instrument(skip(options))]
pub fn unload(key_name: &str, file_name: &str, options: &UnloadOptions) -> Result<String> {
    platform::ensure_supported()?;
    validate_key_name(key_name)?;
    let output = process::run(&unload_command(key_name, file_name, options))?;
    ensure_success(&output, OK)?;
    Ok(output.stdout)
}

/// Compares all values under two key paths, returning parsed difference
/// records keyed by the fourth output column.
///
/// # Errors
///
/// Both key paths are validated; otherwise as for [`query`], except that
/// exit code 2 (differences found) is success.
#[instrument(skip(options))]
pub fn compare(key_name1: &str, key_name2: &str, options: &CompareOptions) -> Result<CompareResult> {
    platform::ensure_supported()?;
    validate_key_name(key_name1)?;
    validate_key_name(key_name2)?;
    let output = process::run(&compare_command(key_name1, key_name2, options))?;
    ensure_success(&output, OK_COMPARE)?;
    parse_compare(&output.stdout)
}

/// Exports the key and all subkeys to a `.reg` file, overwriting the file
/// without a prompt.
///
/// Returns the tool's decoded standard output.
///
/// # Errors
///
/// As for [`query`].
#[instrument(skip(options))]
pub fn export_key(key_name: &str, file_name: &str, options: &ExportOptions) -> Result<String> {
    platform::ensure_supported()?;
    validate_key_name(key_name)?;
    let output = process::run(&export_command(key_name, file_name, options))?;
    ensure_success(&output, OK)?;
    Ok(output.stdout)
}
