//! CLI-specific error types with exit codes.
//!
//! Wraps library errors and provides the exit-code mapping: every error
//! class exits 1 (as does a diff that found differences, which is not an
//! error and is handled as a command result instead).

use std::fmt;

use hit::Error as LibError;

/// CLI-specific error type.
#[derive(Debug)]
pub enum CliError {
    /// Library error (parse, expansion, style, merge conflict).
    Library(LibError),

    /// An input file could not be opened.
    CantOpen(String),

    /// Invalid command-line arguments.
    Usage(String),

    /// An I/O error outside of opening inputs (e.g. writing output).
    Io(std::io::Error),
}

impl CliError {
    /// Get the exit code for this error.
    ///
    /// Usage errors, I/O failures, parse failures, and style errors all
    /// exit 1; success is 0.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(_) | CliError::CantOpen(_) | CliError::Usage(_) | CliError::Io(_) => {
                1
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::CantOpen(path) => write!(f, "Can't open '{path}'"),
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}
