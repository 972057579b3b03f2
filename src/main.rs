use clap::{Parser, Subcommand};
use colored::Colorize;

mod api;
mod cmd;
mod config;
mod constants;
mod shared_types;
mod utils;

use crate::cmd::config::ConfigCommand;
use crate::cmd::migrate::MigrateCommand;
use crate::config::CliConfig;
use crate::shared_types::{AppContext, CliSubCmd};

#[derive(Parser)]
#[command(version, about = "copy access keys from an old server into users on a new one")]
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// fetch every key from the old server and create a user for each on the new one
    Migrate(MigrateCommand),
    Config(ConfigCommand),
}

#[tokio::main]
pub async fn main() {
    let cli = Cli::parse();

    let (config, load_err) = CliConfig::load_or_default();
    env_logger::Builder::new()
        .filter_level(config.get_log_level().to_level_filter())
        .parse_default_env()
        .init();
    if let Some(err) = load_err {
        log::warn!("could not load config, using defaults: {err:#}");
    }

    let mut ctx = AppContext { config };
    let result = match cli.commands {
        Commands::Migrate(_cmd) => _cmd.run(&mut ctx).await,
        Commands::Config(_cmd) => _cmd.run(&mut ctx).await,
    };

    if let Err(err) = result {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
