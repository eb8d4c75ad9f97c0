//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;

/// Generate router modules from `page`/`layout` file conventions.
#[derive(Debug, Parser)]
#[command(name = "rove", version, about)]
pub struct Cli {
    /// Enable debug-level logging.
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Only show errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile the app directory into a router module.
    Generate(GenerateArgs),
    /// Print the resolved routes without emitting code.
    Inspect(InspectArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project root. Defaults to the current directory.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// App directory to scan. Defaults to `<root>/app`.
    #[arg(long)]
    pub app_dir: Option<PathBuf>,

    /// Generation mode: dev emits lazy imports, build emits static ones.
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Write the module to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Project root. Defaults to the current directory.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// App directory to scan. Defaults to `<root>/app`.
    #[arg(long)]
    pub app_dir: Option<PathBuf>,

    /// Emit the resolved routes as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Mode flag, shared by the CLI and the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeArg {
    Dev,
    Build,
}

impl From<ModeArg> for rove_plugin::Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Dev => rove_plugin::Mode::Dev,
            ModeArg::Build => rove_plugin::Mode::Build,
        }
    }
}
