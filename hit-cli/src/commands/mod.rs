//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `find`: Locate a parameter path in input files
//! - `validate`: Report duplicate parameters and sections
//! - `format`: Reformat input files to a uniform style
//! - `merge`: Merge input files into one document
//! - `diff`: Compare the parameters of two (merged) sides
//! - `common`: Extract the parameters common to all input files
//! - `subtract`: Remove the parameters of one file from another
//! - `braceexpr`: Expand brace expressions read from standard input

pub mod braceexpr;
pub mod common;
pub mod diff;
pub mod find;
pub mod format;
pub mod merge;
pub mod subtract;
pub mod validate;

pub use braceexpr::BraceexprCommand;
pub use common::CommonCommand;
pub use diff::DiffCommand;
pub use find::FindCommand;
pub use format::FormatCommand;
pub use merge::MergeCommand;
pub use subtract::SubtractCommand;
pub use validate::ValidateCommand;
