//! `REG` command-line construction.
//!
//! Each operation carries an options struct whose fields map to `REG` flags
//! through an explicit translation table: an ordered list of flag entries
//! evaluated in declared order. Flag ordering in the emitted command line is
//! therefore deterministic and independent of how the options struct was
//! built; a flag is only emitted when its field is set.
//!
//! The builders in this module are pure: they produce the exact command
//! string that [`crate::ops`] would execute, without validating key paths or
//! spawning anything. This makes them usable for dry-run logging and easy to
//! test on any host.

use crate::value::RegDataType;

/// Operation verbs understood by the `REG` tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegVerb {
    /// Query values at a key (`REG QUERY`).
    Query,

    /// Add or overwrite a value (`REG ADD`).
    Add,

    /// Delete a key or value (`REG DELETE`).
    Delete,

    /// Copy a key to another location (`REG COPY`).
    Copy,

    /// Save a key to a hive file (`REG SAVE`).
    Save,

    /// Restore a key from a hive file (`REG RESTORE`).
    Restore,

    /// Load a hive file under a key (`REG LOAD`).
    Load,

    /// Unload a previously loaded hive (`REG UNLOAD`).
    Unload,

    /// Compare two keys (`REG COMPARE`).
    Compare,

    /// Export a key to a .reg file (`REG EXPORT`).
    Export,
}

impl RegVerb {
    /// Returns the upper-case verb as written on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            RegVerb::Query => "QUERY",
            RegVerb::Add => "ADD",
            RegVerb::Delete => "DELETE",
            RegVerb::Copy => "COPY",
            RegVerb::Save => "SAVE",
            RegVerb::Restore => "RESTORE",
            RegVerb::Load => "LOAD",
            RegVerb::Unload => "UNLOAD",
            RegVerb::Compare => "COMPARE",
            RegVerb::Export => "EXPORT",
        }
    }
}

/// One entry of an operation's flag-translation table.
///
/// Entries are evaluated strictly in the order they appear in the table, so
/// the table declaration alone fixes the emitted flag order.
enum Flag<'a> {
    /// Boolean switch, emitted bare when set.
    Switch(&'static str, bool),

    /// Flag with a double-quoted textual argument. Empty values emit
    /// nothing, like unset ones.
    Quoted(&'static str, Option<&'a str>),

    /// Flag with an argument emitted verbatim, without quoting.
    Plain(&'static str, Option<String>),
}

impl<'a> Flag<'a> {
    fn switch(token: &'static str, set: bool) -> Self {
        Flag::Switch(token, set)
    }

    fn quoted(token: &'static str, value: Option<&'a str>) -> Self {
        Flag::Quoted(token, value)
    }

    fn plain(token: &'static str, value: Option<String>) -> Self {
        Flag::Plain(token, value)
    }
}

/// Space-joins the verb, operands, any baked-in flag, and the table-emitted
/// flags into the final command string.
fn compose(verb: RegVerb, operands: &[&str], baked: Option<&'static str>, table: &[Flag]) -> String {
    let mut parts = vec!["REG".to_string(), verb.as_str().to_string()];
    parts.extend(operands.iter().map(|operand| operand.to_string()));
    if let Some(flag) = baked {
        parts.push(flag.to_string());
    }
    for entry in table {
        match entry {
            Flag::Switch(token, set) => {
                if *set {
                    parts.push((*token).to_string());
                }
            }
            Flag::Quoted(token, value) => {
                if let Some(value) = value {
                    if !value.is_empty() {
                        parts.push(format!("{token} \"{value}\""));
                    }
                }
            }
            Flag::Plain(token, value) => {
                if let Some(value) = value {
                    if !value.is_empty() {
                        parts.push(format!("{token} {value}"));
                    }
                }
            }
        }
    }
    parts.join(" ")
}

/// Options for [`crate::ops::query`].
///
/// All flags default to off/absent. Field declaration order matches the
/// translation-table order of the emitted flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Queries a specific value name (`/v`). If omitted, all values at the
    /// key are queried.
    pub value_name: Option<String>,

    /// Queries the default (empty-name) value (`/ve`).
    pub default_value: bool,

    /// Queries all subkeys and values recursively (`/s`).
    pub recursive: bool,

    /// Separator character for REG_MULTI_SZ data strings (`/se`). The tool
    /// defaults to `\0` when omitted.
    pub separator: Option<char>,

    /// Data or pattern to search for (`/f`). The tool defaults to `*`.
    pub search_pattern: Option<String>,

    /// Restricts the search to key names only (`/k`).
    pub search_keynames_only: bool,

    /// Restricts the search to data only (`/d`).
    pub search_data_only: bool,

    /// Makes the search case sensitive (`/c`).
    pub case_sensitive: bool,

    /// Returns only exact matches (`/e`).
    pub exact_matches: bool,

    /// Restricts results to a value data type (`/t`).
    pub data_type: Option<RegDataType>,

    /// Shows the numeric equivalent of each value type (`/z`).
    pub numeric_type: bool,

    /// Accesses the 32-bit registry view (`/reg:32`).
    pub view_32bit: bool,

    /// Accesses the 64-bit registry view (`/reg:64`).
    pub view_64bit: bool,
}

/// Options for [`crate::ops::add`].
///
/// The verb always carries `/f`, overwriting existing entries without a
/// prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOptions {
    /// Value name to add under the key (`/v`).
    pub value_name: Option<String>,

    /// Adds the default (empty-name) value (`/ve`).
    pub default_value: bool,

    /// Value data type (`/t`). The tool assumes REG_SZ when omitted.
    pub data_type: Option<RegDataType>,

    /// Separator character for REG_MULTI_SZ data strings (`/s`).
    pub separator: Option<char>,

    /// Data to assign to the value (`/d`).
    ///
    /// Spaces are stripped from the data before emission and the result is
    /// not quoted, so multi-word data reaches the registry with its spaces
    /// removed. The emitted command line is pinned to this shape for
    /// compatibility; quoting cannot be expressed through this field.
    pub data: Option<String>,

    /// Accesses the 32-bit registry view (`/reg:32`).
    pub view_32bit: bool,

    /// Accesses the 64-bit registry view (`/reg:64`).
    pub view_64bit: bool,
}

/// Options for [`crate::ops::remove`].
///
/// The verb always carries `/f`, deleting without a prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteOptions {
    /// Value name to delete (`/v`). When omitted the key itself is deleted
    /// with all of its subkeys and values.
    pub value_name: Option<String>,

    /// Deletes the default (empty-name) value (`/ve`).
    pub default_value: bool,

    /// Deletes all values under the key (`/va`).
    pub all_values: bool,

    /// Accesses the 32-bit registry view (`/reg:32`).
    pub view_32bit: bool,

    /// Accesses the 64-bit registry view (`/reg:64`).
    pub view_64bit: bool,
}

/// Options for [`crate::ops::copy`].
///
/// The verb always carries `/f`, overwriting the destination without a
/// prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyOptions {
    /// Copies all subkeys and values (`/s`).
    pub recursive: bool,

    /// Accesses the 32-bit registry view (`/reg:32`).
    pub view_32bit: bool,

    /// Accesses the 64-bit registry view (`/reg:64`).
    pub view_64bit: bool,
}

/// Options for [`crate::ops::save`].
///
/// The verb always carries `/y`, overwriting the target file without a
/// prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveOptions {
    /// Saves all subkeys and values (`/s`).
    pub recursive: bool,

    /// Accesses the 32-bit registry view (`/reg:32`).
    pub view_32bit: bool,

    /// Accesses the 64-bit registry view (`/reg:64`).
    pub view_64bit: bool,
}

/// Options for [`crate::ops::restore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreOptions {
    /// Accesses the 32-bit registry view (`/reg:32`).
    pub view_32bit: bool,

    /// Accesses the 64-bit registry view (`/reg:64`).
    pub view_64bit: bool,
}

/// Options for [`crate::ops::load`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Accesses the 32-bit registry view (`/reg:32`).
    pub view_32bit: bool,

    /// Accesses the 64-bit registry view (`/reg:64`).
    pub view_64bit: bool,
}

/// Options for [`crate::ops::unload`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnloadOptions {
    /// Accesses the 32-bit registry view (`/reg:32`).
    pub view_32bit: bool,

    /// Accesses the 64-bit registry view (`/reg:64`).
    pub view_64bit: bool,
}

/// Options for [`crate::ops::compare`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Compares a specific value name (`/v`).
    pub value_name: Option<String>,

    /// Compares the default (empty-name) value (`/ve`).
    pub default_value: bool,

    /// Compares all subkeys and values recursively (`/s`).
    pub recursive: bool,

    /// Accesses the 32-bit registry view (`/reg:32`).
    pub view_32bit: bool,

    /// Accesses the 64-bit registry view (`/reg:64`).
    pub view_64bit: bool,
}

/// Options for [`crate::ops::export_key`].
///
/// The verb always carries `/y`, overwriting the target file without a
/// prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Accesses the 32-bit registry view (`/reg:32`).
    pub view_32bit: bool,

    /// Accesses the 64-bit registry view (`/reg:64`).
    pub view_64bit: bool,
}

/// Builds the command line for a `REG QUERY` invocation.
pub fn query_command(key_name: &str, options: &QueryOptions) -> String {
    compose(
        RegVerb::Query,
        &[key_name],
        None,
        &[
            Flag::quoted("/v", options.value_name.as_deref()),
            Flag::switch("/ve", options.default_value),
            Flag::switch("/s", options.recursive),
            Flag::plain("/se", options.separator.map(String::from)),
            Flag::quoted("/f", options.search_pattern.as_deref()),
            Flag::switch("/k", options.search_keynames_only),
            Flag::switch("/d", options.search_data_only),
            Flag::switch("/c", options.case_sensitive),
            Flag::switch("/e", options.exact_matches),
            Flag::quoted("/t", options.data_type.as_ref().map(RegDataType::name)),
            Flag::switch("/z", options.numeric_type),
            Flag::switch("/reg:32", options.view_32bit),
            Flag::switch("/reg:64", options.view_64bit),
        ],
    )
}

/// Builds the command line for a `REG ADD` invocation.
pub fn add_command(key_name: &str, options: &AddOptions) -> String {
    compose(
        RegVerb::Add,
        &[key_name],
        Some("/f"),
        &[
            Flag::quoted("/v", options.value_name.as_deref()),
            Flag::switch("/ve", options.default_value),
            Flag::quoted("/t", options.data_type.as_ref().map(RegDataType::name)),
            Flag::plain("/s", options.separator.map(String::from)),
            Flag::plain("/d", options.data.as_deref().map(|data| data.replace(' ', ""))),
            Flag::switch("/reg:32", options.view_32bit),
            Flag::switch("/reg:64", options.view_64bit),
        ],
    )
}

/// Builds the command line for a `REG DELETE` invocation.
pub fn delete_command(key_name: &str, options: &DeleteOptions) -> String {
    compose(
        RegVerb::Delete,
        &[key_name],
        Some("/f"),
        &[
            Flag::quoted("/v", options.value_name.as_deref()),
            Flag::switch("/ve", options.default_value),
            Flag::switch("/va", options.all_values),
            Flag::switch("/reg:32", options.view_32bit),
            Flag::switch("/reg:64", options.view_64bit),
        ],
    )
}

/// Builds the command line for a `REG COPY` invocation.
pub fn copy_command(source: &str, destination: &str, options: &CopyOptions) -> String {
    compose(
        RegVerb::Copy,
        &[source, destination],
        Some("/f"),
        &[
            Flag::switch("/s", options.recursive),
            Flag::switch("/reg:32", options.view_32bit),
            Flag::switch("/reg:64", options.view_64bit),
        ],
    )
}

/// Builds the command line for a `REG SAVE` invocation.
pub fn save_command(key_name: &str, file_name: &str, options: &SaveOptions) -> String {
    compose(
        RegVerb::Save,
        &[key_name, file_name],
        Some("/y"),
        &[
            Flag::switch("/s", options.recursive),
            Flag::switch("/reg:32", options.view_32bit),
            Flag::switch("/reg:64", options.view_64bit),
        ],
    )
}

/// Builds the command line for a `REG RESTORE` invocation.
pub fn restore_command(key_name: &str, file_name: &str, options: &RestoreOptions) -> String {
    compose(
        RegVerb::Restore,
        &[key_name, file_name],
        None,
        &[
            Flag::switch("/reg:32", options.view_32bit),
            Flag::switch("/reg:64", options.view_64bit),
        ],
    )
}

/// Builds the command line for a `REG LOAD` invocation.
pub fn load_command(key_name: &str, file_name: &str, options: &LoadOptions) -> String {
    compose(
        RegVerb::Load,
        &[key_name, file_name],
        None,
        &[
            Flag::switch("/reg:32", options.view_32bit),
            Flag::switch("/reg:64", options.view_64bit),
        ],
    )
}

/// Builds the command line for a `REG UNLOAD` invocation.
///
/// The file name is carried as a second operand even though the native verb
/// only consumes the key; callers relying on the historical call shape get
/// an identical command line.
pub fn unload_command(key_name: &str, file_name: &str, options: &UnloadOptions) -> String {
    compose(
        RegVerb::Unload,
        &[key_name, file_name],
        None,
        &[
            Flag::switch("/reg:32", options.view_32bit),
            Flag::switch("/reg:64", options.view_64bit),
        ],
    )
}

/// Builds the command line for a `REG COMPARE` invocation.
pub fn compare_command(key_name1: &str, key_name2: &str, options: &CompareOptions) -> String {
    compose(
        RegVerb::Compare,
        &[key_name1, key_name2],
        None,
        &[
            Flag::quoted("/v", options.value_name.as_deref()),
            Flag::switch("/ve", options.default_value),
            Flag::switch("/s", options.recursive),
            Flag::switch("/reg:32", options.view_32bit),
            Flag::switch("/reg:64", options.view_64bit),
        ],
    )
}

/// Builds the command line for a `REG EXPORT` invocation.
pub fn export_command(key_name: &str, file_name: &str, options: &ExportOptions) -> String {
    compose(
        RegVerb::Export,
        &[key_name, file_name],
        Some("/y"),
        &[
            Flag::switch("/reg:32", options.view_32bit),
            Flag::switch("/reg:64", options.view_64bit),
        ],
    )
}
