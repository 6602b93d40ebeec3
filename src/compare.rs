//! `REG COMPARE` output parsing.
//!
//! Compare output lists one line per difference, prefixed with a direction
//! marker (`<`, `>`, or `=`), followed by a column the parser does not use,
//! the key path the value lives under, the value name, and the data. The
//! parser drops the tool's success and `Result Compared:` summary lines and
//! maps each remaining line into a [`CompareEntry`].
//!
//! Unlike the query parser, results are keyed by the **fourth**
//! whitespace-delimited token of each line, reflecting the different column
//! layout of the compare table. The asymmetry is deliberate and preserved
//! for output compatibility.

use crate::error::{RegError, Result};
use crate::query::collapse_whitespace;
use crate::value::CompareMarker;
use tracing::debug;

/// Marker line printed when the comparison finished without differences.
const SUCCESS_MARKER: &str = "The operation completed successfully.";

/// Summary line prefix printed after the difference table.
const RESULT_COMPARED_MARKER: &str = "Result Compared:";

/// A single parsed compare record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareEntry {
    /// Difference-direction marker (first column).
    pub marker: CompareMarker,

    /// Key path the value lives under (third column).
    pub path: String,

    /// Value data, or `None` when the line carried no data columns.
    pub value: Option<String>,
}

/// Parsed result of a `REG COMPARE` invocation.
///
/// Entries keep the order the lines appeared in tool output and are keyed
/// by the fourth token of each line; duplicate keys overwrite the earlier
/// entry in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompareResult {
    entries: Vec<(String, CompareEntry)>,
}

impl CompareResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, overwriting any existing entry with the same key
    /// while keeping its original position.
    pub(crate) fn insert(&mut self, key: String, entry: CompareEntry) {
        if let Some(slot) = self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            slot.1 = entry;
        } else {
            self.entries.push((key, entry));
        }
    }

    /// Looks up a record by its key (the fourth output token).
    pub fn get(&self, key: &str) -> Option<&CompareEntry> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, entry)| entry)
    }

    /// Returns true if a record exists for the key.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the result holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates records in the order they appeared in tool output.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CompareEntry)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.as_str(), entry))
    }
}

impl<'a> IntoIterator for &'a CompareResult {
    type Item = &'a (String, CompareEntry);
    type IntoIter = std::slice::Iter<'a, (String, CompareEntry)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Parses raw `REG COMPARE` output into a [`CompareResult`].
///
/// Lines are split on `\r\n`. Empty lines and lines containing the success
/// or `Result Compared:` markers are dropped. Each survivor is
/// whitespace-collapsed and split into fields: marker, an unused column,
/// path, the result key, and the remaining data.
///
/// # Errors
///
/// Returns [`RegError::MalformedOutput`] for a surviving line with fewer
/// than four fields.
pub fn parse_compare(raw: &str) -> Result<CompareResult> {
    let mut result = CompareResult::new();

    for line in raw.split("\r\n") {
        if line.is_empty()
            || line.contains(SUCCESS_MARKER)
            || line.contains(RESULT_COMPARED_MARKER)
        {
            continue;
        }

        let collapsed = collapse_whitespace(line);
        if collapsed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = collapsed.split(' ').collect();
        if fields.len() < 4 {
            return Err(RegError::malformed_output(collapsed.as_str()));
        }

        let value = if fields.len() > 4 {
            Some(fields[4..].join(" "))
        } else {
            None
        };

        result.insert(
            fields[3].to_string(),
            CompareEntry {
                marker: CompareMarker::from_token(fields[0]),
                path: fields[2].to_string(),
                value,
            },
        );
    }

    debug!(records = result.len(), "parsed compare output");
    Ok(result)
}
