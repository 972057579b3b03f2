use crate::config::CliConfig;

mod cmd;
mod keys;
mod outcome;
mod server;
mod users;

pub use cmd::*;
pub use keys::*;
pub use outcome::*;
pub use server::*;
pub use users::*;

pub trait CliSubCmd {
    async fn run(&self, ctx: &mut AppContext) -> anyhow::Result<()>;
}

pub struct AppContext {
    pub config: CliConfig,
}

impl AppContext {
    pub fn http_client(&self) -> anyhow::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.config.get_request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}
