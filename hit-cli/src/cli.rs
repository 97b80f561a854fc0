//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BraceexprCommand, CommonCommand, DiffCommand, FindCommand, FormatCommand, MergeCommand,
    SubtractCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for manipulating hierarchical input text (hit) files.
#[derive(Parser)]
#[command(name = "hit")]
#[command(version, about = "Manipulate hierarchical input text (hit) files", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Locate a parameter path in input files
    Find(FindCommand),

    /// Report duplicate parameters and sections
    Validate(ValidateCommand),

    /// Reformat input files to a uniform style
    Format(FormatCommand),

    /// Merge input files into one document
    Merge(MergeCommand),

    /// Compare the parameters of two (merged) sides
    Diff(DiffCommand),

    /// Extract the parameters common to all input files
    Common(CommonCommand),

    /// Remove the parameters of one file from another
    Subtract(SubtractCommand),

    /// Expand brace expressions read from standard input
    Braceexpr(BraceexprCommand),
}
