mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG says otherwise)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("scorebook=warn,scorebook_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::load_config(&args.config, args.data_dir.as_deref())?;

    match args.command {
        Command::Inspect { source } => commands::inspect::run(&config, &source),
        Command::Find {
            source,
            player,
            hash,
        } => commands::find::run(&config, &source, &player, hash.as_deref()),
        Command::Export { source, output } => {
            commands::export::run(&config, &source, output.as_deref())
        }
        Command::Owners => commands::owners::run(&config),
    }
}
