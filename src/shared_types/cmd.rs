use clap::Args;

use crate::utils::prompt;

use super::ServerEndpoint;

#[derive(Debug, Args)]
pub struct SourceServerParams {
    #[arg(long)]
    /// old server host or IP, e.g. "10.0.0.2" or "https://old.example.com"
    source_host: Option<String>,

    #[arg(long)]
    /// old server http port (examples: 80 and 8080)
    source_port: Option<String>,

    #[arg(long)]
    /// old server bearer token
    source_token: Option<String>,
}

#[derive(Debug, Args)]
pub struct DestServerParams {
    #[arg(long)]
    /// new server host or IP
    dest_host: Option<String>,

    #[arg(long)]
    /// new server http port (examples: 80 and 8080)
    dest_port: Option<String>,

    #[arg(long)]
    /// new server admin password, sent as a bearer token
    dest_password: Option<String>,
}

impl SourceServerParams {
    /// anything not passed on the command line gets prompted for
    pub fn resolve(&self) -> anyhow::Result<ServerEndpoint> {
        let host = prompt::text_or_prompt(self.source_host.as_deref(), "Enter the old server IP:")?;
        let port = prompt::text_or_prompt(
            self.source_port.as_deref(),
            "Enter the old server http port (examples: 80 and 8080):",
        )?;
        let token =
            prompt::secret_or_prompt(self.source_token.as_deref(), "Enter the old server token:")?;

        ServerEndpoint::from_host_port(&host, &port, token)
    }
}

impl DestServerParams {
    pub fn resolve(&self) -> anyhow::Result<ServerEndpoint> {
        let host = prompt::text_or_prompt(self.dest_host.as_deref(), "Enter the new server IP:")?;
        let port = prompt::text_or_prompt(
            self.dest_port.as_deref(),
            "Enter the new server http port (examples: 80 and 8080):",
        )?;
        let password = prompt::secret_or_prompt(
            self.dest_password.as_deref(),
            "Enter the new server password:",
        )?;

        ServerEndpoint::from_host_port(&host, &port, password)
    }
}
