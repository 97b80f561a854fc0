//! Command to expand brace expressions read from standard input.

use std::io::Read;

use clap::Args;

use crate::error::CliError;
use crate::utils::GlobalOptions;
use hit::{BraceExpander, EnvEvaluator, RawEvaluator};

/// Expand `${...}` expressions in text read from standard input, with the
/// `env` and `raw` evaluators registered.
#[derive(Args)]
pub struct BraceexprCommand {}

impl BraceexprCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<i32, CliError> {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;

        let env = EnvEvaluator;
        let raw = RawEvaluator;
        let mut expander = BraceExpander::new();
        expander.register("env", &env);
        expander.register("raw", &raw);

        let expanded = expander.expand(None, &input)?;
        print!("{expanded}");
        if !expanded.ends_with('\n') {
            println!();
        }
        Ok(0)
    }
}
