//! Command to report duplicate parameters and sections.

use crate::error::CliError;
use crate::utils::{read_input, GlobalOptions};
use clap::Args;
use hit::{duplicate_errors, parse};

/// Report parameters and sections supplied multiple times.
#[derive(Args)]
pub struct ValidateCommand {
    /// Input files ('-' reads standard input)
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<String>,
}

impl ValidateCommand {
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

            let errors = duplicate_errors(&root);
            if !errors.is_empty() {
                ret = 1;
            }
            for message in errors {
                println!("{message}");
            }
        }
        Ok(ret)
    }
}
