//! Command to locate a parameter path in input files.

use crate::error::CliError;
use crate::utils::{read_input, GlobalOptions};
use clap::Args;
use hit::parse;

/// Locate a parameter path in input files.
///
/// Prints `file:line` for each input containing the path; inputs without it
/// produce no output and do not fail.
#[derive(Args)]
pub struct FindCommand {
    /// Only show the file name for matches
    #[arg(short = 'f')]
    pub filename_only: bool,

    /// Parameter path to look up (a leading '-' is taken literally)
    #[arg(value_name = "PARAMETER_PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Input files ('-' reads standard input)
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<String>,
}

impl FindCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<i32, CliError> {
        let mut ret = 0;
        for file in &self.files {
            let (label, content) = match read_input(file) {
                Ok(input) => input,
                Err(e) => {
                    eprintln!("{e}");
                    ret = 1;
                    continue;
                }
            };

            let root = match parse(&label, &content) {
                Ok(root) => root,
                Err(e) => {
                    eprintln!("{e}");
                    ret = 1;
                    continue;
                }
            };

            if let Some(node) = root.find(&self.path) {
                if self.filename_only {
                    println!("{}", node.filename());
                } else {
                    println!("{}:{}", node.filename(), node.line());
                }
            }
        }
        Ok(ret)
    }
}
