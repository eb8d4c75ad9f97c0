//! Entry point for the `rove` CLI: argument parsing, logging setup, and
//! command dispatch.

use clap::Parser;
use rove_cli::{cli, commands, logger};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    logger::init_logger(args.verbose, args.quiet);

    match args.command {
        cli::Command::Generate(generate_args) => commands::generate::execute(generate_args),
        cli::Command::Inspect(inspect_args) => commands::inspect::execute(inspect_args),
    }
}
