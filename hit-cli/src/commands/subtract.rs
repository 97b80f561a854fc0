//! Command to remove the parameters of one file from another.

use std::collections::BTreeSet;

use clap::Args;

use crate::error::CliError;
use crate::utils::{read_merged, GlobalOptions};
use hit::{gather_params, remove_empty_sections, remove_params};

/// Subtract `left` from `right`: every parameter path present in `left` is
/// removed from `right`, and sections left empty are dropped.
#[derive(Args)]
pub struct SubtractCommand {
    /// File whose parameters are removed
    #[arg(value_name = "LEFT")]
    pub left: String,

    /// File the parameters are removed from
    #[arg(value_name = "RIGHT")]
    pub right: String,
}

impl SubtractCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<i32, CliError> {
        let left = read_merged(&[self.left.clone()])?;
        let mut right = read_merged(&[self.right.clone()])?;

        eprintln!("Subtracting:\n    {}\nfrom:\n    {}", self.left, self.right);

        let left_paths: BTreeSet<String> = gather_params(&left).keys().cloned().collect();
        remove_params(&mut right, &left_paths);
        remove_empty_sections(&mut right);

        print!("{}", right.render());
        Ok(0)
    }
}
