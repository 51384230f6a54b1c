mod cli;
mod command;
mod config;
mod constants;
mod error;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use cli::{Cli, Commands};
use command::{BuildCommand, CleanCommand, Command, StatsCommand};

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> error::Result<()> {
    color_eyre::install()?;

    let command_line = Cli::parse();
    init_tracing(command_line.verbose);
    tracing::debug!("{} {}", constants::NAME, env!("CARGO_PKG_VERSION"));

    let cfg = config::load(&command_line.config)?;

    // Running without a subcommand builds with the configured defaults.
    let cmd: Box<dyn Command> = match command_line.command {
        None => Box::new(BuildCommand::new(cfg)),
        Some(Commands::Build(args)) => {
            Box::new(BuildCommand::new(config::apply_build_args(cfg, &args)))
        }
        Some(Commands::Stats(args)) => {
            let cfg = config::apply_output_args(cfg, &args);
            Box::new(StatsCommand::new(cfg.output))
        }
        Some(Commands::Clean(args)) => {
            let cfg = config::apply_output_args(cfg, &args);
            Box::new(CleanCommand::new(cfg.output))
        }
    };
    cmd.execute().await?;

    Ok(())
}
