//! Command to merge input files into one document.

use crate::error::CliError;
use crate::utils::{read_input, GlobalOptions};
use clap::Args;
use hit::{merge, parse, Node};

/// Merge input files in order, later files overlaying earlier ones, and
/// write the result.
#[derive(Args)]
pub struct MergeCommand {
    /// Output file ('-' writes standard output)
    #[arg(short, long, value_name = "FILE")]
    pub output: String,

    /// Input files ('-' reads standard input)
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<String>,
}

impl MergeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<i32, CliError> {
        let mut combined: Option<Node> = None;
        for file in &self.files {
            let (label, content) = read_input(file)?;
            let root = parse(&label, &content)?;
            combined = Some(match combined.take() {
                None => root,
                Some(mut into) => {
                    merge(root, &mut into)?;
                    into
                }
            });
        }

        let Some(root) = combined else {
            return Err(CliError::Usage("no input files given".to_string()));
        };

        let rendered = root.render();
        if self.output == "-" {
            print!("{rendered}");
        } else {
            std::fs::write(&self.output, rendered)?;
        }
        Ok(0)
    }
}
