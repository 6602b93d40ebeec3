//! # Windows REG Command Wrapper
//!
//! A typed command-construction and output-parsing layer over the Windows
//! `REG` command-line utility.
//!
//! ## Features
//!
//! - **Typed options**: per-operation option structs translated into
//!   correctly-ordered `REG` flags through explicit, fixed-order tables
//! - **Structured output**: the text tables printed by `REG QUERY` and
//!   `REG COMPARE` are parsed into insertion-ordered record maps
//! - **Distinct failures**: non-zero exits surface as a dedicated error
//!   carrying the captured standard error, never as a success payload
//! - **No hidden state**: every operation is self-contained; there is no
//!   caching, no queueing, and no mutual exclusion across calls
//!
//! ## Architecture
//!
//! An operation flows through three small pieces:
//!
//! 1. **Command builder** ([`command`]): maps a verb and an options struct
//!    to a single command-line string, walking an ordered flag-translation
//!    table
//! 2. **Process runner** (private module): executes the command through
//!    `cmd /C`, blocking until exit with both streams buffered
//! 3. **Output parsers** ([`query`], [`compare`]): split the raw text into
//!    lines, drop header/footer noise, collapse whitespace runs, and map
//!    each line into a record
//!
//! The registry itself is never modeled; all storage and mutation semantics
//! live in the operating system's `REG` tool, invoked as an opaque external
//! process.
//!
//! ## Examples
//!
//! ### Querying values
//!
//! ```no_run
//! use reg_cli::{ops, QueryOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let options = QueryOptions {
//!     recursive: true,
//!     view_32bit: true,
//!     ..Default::default()
//! };
//!
//! let result = ops::query(r"HKLM\Software\Microsoft\Windows\CurrentVersion", &options)?;
//! for (name, record) in result.iter() {
//!     println!("{name} ({}) = {:?}", record.data_type, record.value);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Adding and removing values
//!
//! ```no_run
//! use reg_cli::{ops, AddOptions, DeleteOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let add = AddOptions {
//!     value_name: Some("Greeting".to_string()),
//!     data: Some("hello".to_string()),
//!     ..Default::default()
//! };
//! ops::add(r"HKCU\Software\MyApp", &add)?;
//!
//! let remove = DeleteOptions {
//!     value_name: Some("Greeting".to_string()),
//!     ..Default::default()
//! };
//! ops::remove(r"HKCU\Software\MyApp", &remove)?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Failing fast
//!
//! ```no_run
//! // Optional: probe the platform and the reg executable up front instead
//! // of discovering problems on the first real call.
//! # fn main() -> Result<(), reg_cli::RegError> {
//! reg_cli::init()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Caveats
//!
//! Inherited from the command shapes this library preserves:
//!
//! - Key paths must contain at least one subkey segment; a bare hive name
//!   (`HKEY_CURRENT_USER`) is rejected by the validator
//! - `REG ADD` data has its spaces stripped rather than quoted
//! - The runner splits the command string naively on single spaces
//! - A hung `REG` process hangs the calling operation; there is no timeout

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod compare;
pub mod error;
pub mod key;
pub mod ops;
pub mod platform;
mod process;
pub mod query;
pub mod value;

// Re-export main types for convenience
pub use command::{
    AddOptions, CompareOptions, CopyOptions, DeleteOptions, ExportOptions, LoadOptions,
    QueryOptions, RegVerb, RestoreOptions, SaveOptions, UnloadOptions,
};
pub use compare::{CompareEntry, CompareResult};
pub use error::{RegError, Result};
pub use ops::{add, compare, copy, export_key, load, query, remove, restore, save, unload};
pub use platform::{ensure_supported, init};
pub use query::{QueryResult, QueryValue};
pub use value::{CompareMarker, RegDataType};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
