//! Command to reformat input files to a uniform style.

use crate::error::CliError;
use crate::utils::{read_input, GlobalOptions};
use clap::Args;
use hit::Formatter;

/// Reformat input files, optionally in place and under a style file.
#[derive(Args)]
pub struct FormatCommand {
    /// Modify file(s) in place instead of printing
    #[arg(short = 'i')]
    pub in_place: bool,

    /// Hit style file detailing the format to use
    #[arg(long, value_name = "FILE")]
    pub style: Option<String>,

    /// Input files ('-' reads standard input)
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<String>,
}

impl FormatCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<i32, CliError> {
        let logger = hit::init_logger(global.verbose, global.quiet);

        let fmt = match &self.style {
            Some(style_file) => {
                logger.debug(&format!("loading style from '{style_file}'"));
                let (label, content) = read_input(style_file)?;
                Formatter::from_style(&label, &content)?
            }
            None => Formatter::new(),
        };

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

            let formatted = match fmt.format(&label, &content) {
                Ok(formatted) => formatted,
                Err(e) => {
                    eprintln!("{e}");
                    ret = 1;
                    continue;
                }
            };

            if self.in_place && file != "-" {
                std::fs::write(file, &formatted)?;
            } else {
                print!("{formatted}");
            }
        }
        Ok(ret)
    }
}
