//! Error types for the patch data model

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when addressing a patch version's tables
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An index was outside the bounds of the addressed catalog.
    ///
    /// This is always a caller error: every catalog declares its count and
    /// accessors are total on `[0, count)`.
    #[error("index {index} out of range for {table} table (count {count})")]
    IndexOutOfRange {
        /// Name of the catalog that was addressed
        table: &'static str,
        /// The offending index
        index: usize,
        /// Declared entry count of the catalog
        count: usize,
    },

    /// A derived string-table sub-range exceeds the string table itself.
    ///
    /// Sub-ranges (sound names, sprite names) are declared by a start offset
    /// and an entry count; `start + len - 1` must stay below the string
    /// count. A violation means the version's constant data is wrong and is
    /// treated as fatal at construction time.
    #[error(
        "{table} name range [{start}, {start}+{len}) exceeds string table of {string_count} entries"
    )]
    StringRange {
        /// Name of the sub-range ("sound" or "sprite")
        table: &'static str,
        /// First string-table index of the sub-range
        start: usize,
        /// Number of entries in the sub-range
        len: usize,
        /// Total string-table entry count
        string_count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::IndexOutOfRange {
            table: "sound",
            index: 109,
            count: 109,
        };
        assert_eq!(
            err.to_string(),
            "index 109 out of range for sound table (count 109)"
        );
    }

    #[test]
    fn test_string_range_display() {
        let err = Error::StringRange {
            table: "sprite",
            start: 954,
            len: 138,
            string_count: 1000,
        };
        assert!(err.to_string().contains("954"));
        assert!(err.to_string().contains("1000"));
    }
}
