//! Main entry point for the hit CLI.
//!
//! This is the command-line interface for the hit configuration-language
//! toolkit. It provides structural operations over hit documents: find,
//! validate, format, merge, diff, common, subtract, and braceexpr.

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments; usage errors exit 1, --help/--version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = i32::from(e.use_stderr());
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Initialize logging based on verbosity
    let _logger = hit::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    // Execute the command; Ok carries the exit code so non-fatal failures
    // (per-file parse errors, diff differences) integrate with pipelines
    let result = match cli.command {
        cli::Command::Find(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Format(cmd) => cmd.execute(&global),
        cli::Command::Merge(cmd) => cmd.execute(&global),
        cli::Command::Diff(cmd) => cmd.execute(&global),
        cli::Command::Common(cmd) => cmd.execute(&global),
        cli::Command::Subtract(cmd) => cmd.execute(&global),
        cli::Command::Braceexpr(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(e.exit_code());
        }
    }
}
