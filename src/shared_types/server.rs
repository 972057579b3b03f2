use anyhow::anyhow;
use url::Url;

use crate::constants;

#[derive(Debug, Clone)]
pub struct ServerEndpoint {
    base_url: Url,
    token: String,
}

impl ServerEndpoint {
    pub fn new(base_url: Url, token: impl Into<String>) -> Self {
        Self {
            base_url,
            token: token.into(),
        }
    }

    /// `host` may come with or without a scheme and a trailing slash, e.g. "10.0.0.2",
    /// "https://panel.example.com/"
    pub fn from_host_port(host: &str, port: &str, token: impl Into<String>) -> anyhow::Result<Self> {
        let host = host.trim();
        if host.is_empty() {
            return Err(anyhow!("server host can't be empty"));
        }

        let port: u16 = port
            .trim()
            .parse()
            .map_err(|_| anyhow!("invalid port '{}'", port.trim()))?;

        let mut host = match host.contains("://") {
            true => host.to_string(),
            false => format!("{}{}", constants::DEFAULT_SCHEME, host),
        };
        if host.ends_with('/') {
            host.pop();
        }

        let base_url = Url::parse(&format!("{host}:{port}"))
            .map_err(|err| anyhow!("invalid server address '{host}:{port}': {err}"))?;

        Ok(Self::new(base_url, token))
    }

    pub fn get_url(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        url
    }

    pub fn get_token(&self) -> &str {
        &self.token
    }
}
