//! `REG QUERY` output parsing.
//!
//! Query output is a fixed-width text table: one line per value, with the
//! value name, the type token, and the data separated by runs of spaces,
//! surrounded by header lines repeating the queried key path and, for
//! searches, an `End of search:` summary. The parser strips the noise,
//! collapses the whitespace, and maps each remaining line into a
//! [`QueryValue`] record keyed by value name.

use crate::error::{RegError, Result};
use crate::value::RegDataType;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Runs of two-or-more whitespace characters, collapsed to one space
/// before a line is tokenized.
static MULTI_WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s\s+").unwrap());

/// Marker line terminating `REG QUERY /f` search output.
const END_OF_SEARCH_MARKER: &str = "End of search:";

/// Collapses internal whitespace runs to single spaces and trims the line.
pub(crate) fn collapse_whitespace(line: &str) -> String {
    MULTI_WHITESPACE_RE.replace_all(line, " ").trim().to_string()
}

/// A single parsed query record: the value's type and its data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryValue {
    /// Value data type as printed in the second output column.
    pub data_type: RegDataType,

    /// Value data, or `None` when the line carried no third column.
    pub value: Option<String>,
}

/// Parsed result of a `REG QUERY` invocation.
///
/// Entries keep the order the lines appeared in tool output; no sorting is
/// performed. When the same value name appears on multiple lines (e.g. a
/// recursive query across subkeys), the later line overwrites the earlier
/// entry in place, so only the last occurrence survives. This flat-map
/// shape is a documented limitation, not a list-preserving structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryResult {
    entries: Vec<(String, QueryValue)>,
}

impl QueryResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, overwriting any existing entry with the same name
    /// while keeping its original position.
    pub(crate) fn insert(&mut self, name: String, value: QueryValue) {
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Looks up a record by value name.
    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Returns true if a record exists for the value name.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
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
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }
}

impl<'a> IntoIterator for &'a QueryResult {
    type Item = &'a (String, QueryValue);
    type IntoIter = std::slice::Iter<'a, (String, QueryValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Parses raw `REG QUERY` output into a [`QueryResult`].
///
/// Lines are split on `\r\n`. Empty lines, lines repeating the queried key
/// path (header noise, which also covers recursive subkey headers since
/// they contain the queried path as a prefix), and the `End of search:`
/// marker line are dropped. Each survivor is whitespace-collapsed and split
/// into name, type token, and remaining data.
///
/// # Errors
///
/// Returns [`RegError::MalformedOutput`] for a surviving line with fewer
/// than two fields.
pub fn parse_query(key_name: &str, raw: &str) -> Result<QueryResult> {
    let mut result = QueryResult::new();

    for line in raw.split("\r\n") {
        if line.is_empty() || line.contains(key_name) || line.contains(END_OF_SEARCH_MARKER) {
            continue;
        }

        let collapsed = collapse_whitespace(line);
        if collapsed.is_empty() {
            continue;
        }

        let fields: Vec<&str> = collapsed.split(' ').collect();
        if fields.len() < 2 {
            return Err(RegError::malformed_output(collapsed.as_str()));
        }

        let value = if fields.len() > 2 {
            Some(fields[2..].join(" "))
        } else {
            None
        };

        result.insert(
            fields[0].to_string(),
            QueryValue {
                data_type: RegDataType::from_token(fields[1]),
                value,
            },
        );
    }

    debug!(records = result.len(), "parsed query output");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = r"HKLM\Software\Polytope";

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a   b\t\tc  "), "a b c");
        assert_eq!(collapse_whitespace("single space kept"), "single space kept");
    }

    #[test]
    fn test_parse_basic_table() {
        let raw = format!("\r\n{KEY}\r\n    Name    REG_SZ    somevalue\r\n\r\n");
        let result = parse_query(KEY, &raw).unwrap();
        assert_eq!(result.len(), 1);
        let record = result.get("Name").unwrap();
        assert_eq!(record.data_type, RegDataType::Sz);
        assert_eq!(record.value.as_deref(), Some("somevalue"));
    }

    #[test]
    fn test_header_lines_excluded() {
        let raw = format!("{KEY}\r\n    Version    REG_SZ    1.2\r\n{KEY}\\Sub\r\n");
        let result = parse_query(KEY, &raw).unwrap();
        assert_eq!(result.len(), 1);
        assert!(result.contains("Version"));
    }

    #[test]
    fn test_end_of_search_excluded() {
        let raw = "    Hit    REG_SZ    x\r\nEnd of search: 1 match(es) found.\r\n";
        let result = parse_query(KEY, raw).unwrap();
        assert_eq!(result.len(), 1);
        assert!(result.contains("Hit"));
    }

    #[test]
    fn test_value_with_spaces_rejoined() {
        let raw = "    Path    REG_EXPAND_SZ    C:\\Program Files\\App\r\n";
        let result = parse_query(KEY, raw).unwrap();
        let record = result.get("Path").unwrap();
        assert_eq!(record.data_type, RegDataType::ExpandSz);
        assert_eq!(record.value.as_deref(), Some("C:\\Program Files\\App"));
    }

    #[test]
    fn test_missing_value_is_none() {
        let raw = "    Empty    REG_SZ\r\n";
        let result = parse_query(KEY, raw).unwrap();
        assert_eq!(result.get("Empty").unwrap().value, None);
    }

    #[test]
    fn test_last_write_wins_keeps_position() {
        let raw = "    A    REG_SZ    first\r\n    B    REG_SZ    middle\r\n    A    REG_SZ    second\r\n";
        let result = parse_query(KEY, raw).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result.get("A").unwrap().value.as_deref(), Some("second"));

        // Overwriting keeps the original insertion position.
        let names: Vec<&str> = result.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let raw = "    Zeta    REG_SZ    1\r\n    Alpha    REG_SZ    2\r\n    Mid    REG_SZ    3\r\n";
        let result = parse_query(KEY, raw).unwrap();
        let names: Vec<&str> = result.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    }

    #[test]
    fn test_unknown_type_preserved() {
        let raw = "    Weird    REG_FANCY    data\r\n";
        let result = parse_query(KEY, raw).unwrap();
        let record = result.get("Weird").unwrap();
        assert_eq!(record.data_type.name(), "REG_FANCY");
    }

    #[test]
    fn test_single_field_line_is_malformed() {
        let raw = "    orphan\r\n";
        let err = parse_query(KEY, raw).unwrap_err();
        assert!(matches!(err, RegError::MalformedOutput { .. }));
    }

    #[test]
    fn test_empty_output_yields_empty_result() {
        let result = parse_query(KEY, "").unwrap();
        assert!(result.is_empty());
    }
}
