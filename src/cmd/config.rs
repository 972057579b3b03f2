use clap::Parser;

use crate::{
    config::{CliConfig, LogLevel},
    shared_types::{AppContext, CliSubCmd, MalformedPolicy},
};

#[derive(Parser)]
#[group(required = true, multiple = true)]
pub struct ConfigCommand {
    #[arg(long)]
    /// default log level is "normal", "chatty" adds debug logs and a summary, "quiet" only prints failures
    set_log_level: Option<LogLevel>,

    #[arg(long, value_name = "SECS")]
    /// per-request timeout in seconds, 0 to go back to the http client's default
    set_timeout: Option<u64>,

    #[arg(long)]
    /// default handling of key records that can't be converted
    set_on_malformed: Option<MalformedPolicy>,

    #[arg(long)]
    /// print the config file location and its effective values
    show: bool,
}

impl CliSubCmd for ConfigCommand {
    async fn run(&self, ctx: &mut AppContext) -> anyhow::Result<()> {
        let config = &mut ctx.config;

        if let Some(log_level) = self.set_log_level {
            config.set_log_level(log_level)?;
        }
        if let Some(secs) = self.set_timeout {
            config.set_request_timeout(secs)?;
        }
        if let Some(policy) = self.set_on_malformed {
            config.set_on_malformed(policy)?;
        }

        if self.show {
            println!("# {}", CliConfig::get_config_filepath()?.display());
            println!("log_level = {}", config.get_log_level());
            println!(
                "request_timeout_secs = {}",
                match config.get_request_timeout() {
                    Some(timeout) => timeout.as_secs().to_string(),
                    None => "none".to_string(),
                }
            );
            println!("on_malformed = {}", config.get_on_malformed());
        }

        Ok(())
    }
}
