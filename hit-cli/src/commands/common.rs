//! Command to extract the parameters common to all input files.

use clap::Args;

use crate::error::CliError;
use crate::utils::{read_merged, GlobalOptions};
use hit::{explode, gather_params, Node, Section};

/// Extract the parameters present in every input file with equal values.
#[derive(Args)]
pub struct CommonCommand {
    /// Input files ('-' reads standard input)
    #[arg(value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<String>,
}

impl CommonCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<i32, CliError> {
        let mut roots = Vec::new();
        for file in &self.files {
            roots.push(read_merged(&[file.clone()])?);
        }

        // a parameter is common iff every file holds it with an equal value
        let first_params = gather_params(&roots[0]);
        let mut common: Vec<(&String, &&Node)> = first_params.iter().collect();
        for root in &roots[1..] {
            let params = gather_params(root);
            common.retain(|(path, node)| {
                params.get(*path).is_some_and(|other| {
                    match (node.str_val(), other.str_val()) {
                        (Ok(a), Ok(b)) => a == b,
                        _ => false,
                    }
                })
            });
        }

        let mut common_root = Section::new("");
        for (path, node) in common {
            common_root.add_child(node.clone_renamed(path));
        }
        let mut tree = Node::Section(common_root);
        explode(&mut tree);
        println!("{}", tree.render());

        Ok(0)
    }
}
