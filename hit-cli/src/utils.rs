//! Utility functions shared by the CLI commands: input plumbing for files
//! and stdin, and the parse-explode-merge pipeline behind the set-algebra
//! subcommands.

use std::io::Read;

use crate::error::CliError;
use hit::{explode, merge, parse, Node};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Read one input, treating `-` as standard input.
///
/// Returns the label used for locations and diagnostics (`stdin` for
/// standard input, the file name otherwise) along with the content.
pub fn read_input(name: &str) -> Result<(String, String), CliError> {
    if name == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(CliError::Io)?;
        return Ok(("stdin".to_string(), content));
    }
    let content =
        std::fs::read_to_string(name).map_err(|_| CliError::CantOpen(name.to_string()))?;
    Ok((name.to_string(), content))
}

/// Parse every input, explode each tree, and merge them left to right into
/// a single root.
pub fn read_merged(files: &[String]) -> Result<Node, CliError> {
    let mut combined: Option<Node> = None;
    for file in files {
        let (label, content) = read_input(file)?;
        let mut root = parse(&label, &content)?;
        explode(&mut root);
        combined = Some(match combined.take() {
            None => root,
            Some(mut into) => {
                merge(root, &mut into)?;
                into
            }
        });
    }
    combined.ok_or_else(|| CliError::Usage("no input files given".to_string()))
}
