//! Registry value data types and compare markers.
//!
//! `REG` prints value types as `REG_*` tokens in its query output and
//! accepts the same tokens for its `/t` flag. [`RegDataType`] models both
//! directions; unrecognized tokens are preserved verbatim rather than
//! rejected.

use std::fmt;

/// Registry value data types understood by the `REG` tool.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegDataType {
    /// String (REG_SZ).
    Sz,

    /// Multiple strings (REG_MULTI_SZ).
    MultiSz,

    /// String with environment variables (REG_EXPAND_SZ).
    ExpandSz,

    /// 32-bit integer (REG_DWORD).
    Dword,

    /// 64-bit integer (REG_QWORD).
    Qword,

    /// Binary data (REG_BINARY).
    Binary,

    /// No value type (REG_NONE).
    None,

    /// Unrecognized type token, preserved verbatim from tool output.
    Unknown(String),
}

impl RegDataType {
    /// Parses a type token from `REG` output.
    ///
    /// Tokens outside the standard set are returned as
    /// `RegDataType::Unknown` rather than an error, since the tool is free
    /// to print types this library does not model.
    pub fn from_token(token: &str) -> Self {
        match token {
            "REG_SZ" => RegDataType::Sz,
            "REG_MULTI_SZ" => RegDataType::MultiSz,
            "REG_EXPAND_SZ" => RegDataType::ExpandSz,
            "REG_DWORD" => RegDataType::Dword,
            "REG_QWORD" => RegDataType::Qword,
            "REG_BINARY" => RegDataType::Binary,
            "REG_NONE" => RegDataType::None,
            other => RegDataType::Unknown(other.to_string()),
        }
    }

    /// Returns the `REG_*` spelling of this type, as used on the command
    /// line and in tool output.
    pub fn name(&self) -> &str {
        match self {
            RegDataType::Sz => "REG_SZ",
            RegDataType::MultiSz => "REG_MULTI_SZ",
            RegDataType::ExpandSz => "REG_EXPAND_SZ",
            RegDataType::Dword => "REG_DWORD",
            RegDataType::Qword => "REG_QWORD",
            RegDataType::Binary => "REG_BINARY",
            RegDataType::None => "REG_NONE",
            RegDataType::Unknown(token) => token,
        }
    }
}

impl fmt::Display for RegDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Difference-direction marker printed by `REG COMPARE`.
///
/// The tool prefixes each difference line with `<` or `>` to indicate which
/// side of the comparison the value came from, and `=` for matches when run
/// with output of identical values enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompareMarker {
    /// Value present on the left-hand key (`<`).
    Left,

    /// Value present on the right-hand key (`>`).
    Right,

    /// Value identical on both keys (`=`).
    Equal,

    /// Unrecognized marker token, preserved verbatim.
    Other(String),
}

impl CompareMarker {
    /// Parses a marker token from `REG COMPARE` output.
    pub fn from_token(token: &str) -> Self {
        match token {
            "<" => CompareMarker::Left,
            ">" => CompareMarker::Right,
            "=" => CompareMarker::Equal,
            other => CompareMarker::Other(other.to_string()),
        }
    }

    /// Returns the marker as printed by the tool.
    pub fn as_str(&self) -> &str {
        match self {
            CompareMarker::Left => "<",
            CompareMarker::Right => ">",
            CompareMarker::Equal => "=",
            CompareMarker::Other(token) => token,
        }
    }
}

impl fmt::Display for CompareMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_names() {
        assert_eq!(RegDataType::Sz.name(), "REG_SZ");
        assert_eq!(RegDataType::MultiSz.name(), "REG_MULTI_SZ");
        assert_eq!(RegDataType::ExpandSz.name(), "REG_EXPAND_SZ");
        assert_eq!(RegDataType::Dword.name(), "REG_DWORD");
        assert_eq!(RegDataType::Qword.name(), "REG_QWORD");
        assert_eq!(RegDataType::Binary.name(), "REG_BINARY");
        assert_eq!(RegDataType::None.name(), "REG_NONE");
    }

    #[test]
    fn test_data_type_from_token() {
        assert_eq!(RegDataType::from_token("REG_SZ"), RegDataType::Sz);
        assert_eq!(RegDataType::from_token("REG_DWORD"), RegDataType::Dword);
        assert!(matches!(
            RegDataType::from_token("REG_DWORD_BIG_ENDIAN"),
            RegDataType::Unknown(ref token) if token == "REG_DWORD_BIG_ENDIAN"
        ));
    }

    #[test]
    fn test_unknown_token_round_trips() {
        let ty = RegDataType::from_token("REG_LINK");
        assert_eq!(ty.name(), "REG_LINK");
        assert_eq!(ty.to_string(), "REG_LINK");
    }

    #[test]
    fn test_compare_markers() {
        assert_eq!(CompareMarker::from_token("<"), CompareMarker::Left);
        assert_eq!(CompareMarker::from_token(">"), CompareMarker::Right);
        assert_eq!(CompareMarker::from_token("="), CompareMarker::Equal);
        assert!(matches!(
            CompareMarker::from_token("?"),
            CompareMarker::Other(ref token) if token == "?"
        ));
        assert_eq!(CompareMarker::Left.as_str(), "<");
    }
}
