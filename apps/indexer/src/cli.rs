use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::constants;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration file. Missing file means defaults.
    #[arg(short, long, global = true, default_value = constants::CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the search index (default)
    Build(BuildArgs),
    /// Print entry counts and duplicate ids of an existing index
    Stats(OutputArgs),
    /// Remove the generated index file
    Clean(OutputArgs),
}

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Directory holding the content modules
    #[arg(long)]
    pub content_root: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Index file location
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
