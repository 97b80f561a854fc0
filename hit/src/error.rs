//! Error types for the hit library.
//!
//! This module provides the error hierarchy for parsing, expanding,
//! transforming, and formatting hit documents, using `thiserror` for
//! ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a hit error.
///
/// # Examples
///
/// ```
/// use hit::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the hit library.
#[derive(Debug, Error)]
pub enum Error {
    /// The input contained invalid hit syntax.
    #[error("{file}:{line}:{column}: {message}")]
    Parse {
        /// Name of the input the error occurred in.
        file: String,
        /// Line of the offending token (1-based).
        line: usize,
        /// Column of the offending token (1-based).
        column: usize,
        /// Description of the syntax problem.
        message: String,
    },

    /// A brace expression could not be expanded.
    #[error("{message} in '{span}'")]
    Expansion {
        /// The offending `${...}` span (or its unterminated prefix).
        span: String,
        /// Description of the expansion problem.
        message: String,
    },

    /// A field value was requested as a type it does not hold.
    #[error("field '{path}' holds no {wanted} value: '{raw}'")]
    TypeMismatch {
        /// Full path of the field.
        path: String,
        /// The requested value type.
        wanted: &'static str,
        /// The raw value text stored in the field.
        raw: String,
    },

    /// No parameter exists at the requested path.
    #[error("no parameter named '{path}'")]
    NoParameter {
        /// The path that was looked up.
        path: String,
    },

    /// A merge found a Field on one side and a Section on the other.
    #[error("cannot merge: '{path}' is a section on one side and a parameter on the other")]
    MergeConflict {
        /// Full path of the conflicting node.
        path: String,
    },

    /// A formatter style document was malformed.
    #[error("invalid format style: {0}")]
    Style(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Construct a parse error from a source location.
    pub(crate) fn parse(file: &str, line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.to_string(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Check if error is a parse error.
    ///
    /// # Examples
    ///
    /// ```
    /// use hit::parse;
    ///
    /// let err = parse("bad.i", "[unterminated\n").unwrap_err();
    /// assert!(err.is_parse());
    /// ```
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = Error::parse("input.i", 3, 7, "missing value");
        assert_eq!(format!("{err}"), "input.i:3:7: missing value");
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = Error::TypeMismatch {
            path: "a/b".to_string(),
            wanted: "int",
            raw: "hello".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("a/b"));
        assert!(display.contains("int"));
        assert!(display.contains("hello"));
    }

    #[test]
    fn test_style_error_display() {
        let err = Error::Style("missing 'order' field".to_string());
        assert_eq!(
            format!("{err}"),
            "invalid format style: missing 'order' field"
        );
    }

    #[test]
    fn test_merge_conflict_display() {
        let err = Error::MergeConflict {
            path: "x/y".to_string(),
        };
        assert!(format!("{err}").contains("x/y"));
    }
}
