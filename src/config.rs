use clap::ValueEnum;
use std::{fmt::Display, fs, io, path, time::Duration};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::{constants, shared_types::MalformedPolicy};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Chatty,
    Normal,
    Quiet,
}

impl Default for LogLevel {
    fn default() -> Self {
        Self::Normal
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chatty => write!(f, "chatty"),
            Self::Normal => write!(f, "normal"),
            Self::Quiet => write!(f, "quiet"),
        }
    }
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Chatty => log::LevelFilter::Debug,
            LogLevel::Normal => log::LevelFilter::Warn,
            LogLevel::Quiet => log::LevelFilter::Error,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Clone)]
#[serde(default)]
pub struct CliConfig {
    #[serde(skip_serializing_if = "is_default")]
    log_level: LogLevel,

    #[serde(skip_serializing_if = "Option::is_none")]
    request_timeout_secs: Option<u64>,

    #[serde(skip_serializing_if = "is_default")]
    on_malformed: MalformedPolicy,
}

fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    value == &T::default()
}

impl CliConfig {
    pub fn get_config_filepath() -> anyhow::Result<path::PathBuf> {
        let home_dir = dirs::home_dir().ok_or(anyhow!("could not locate the home directory"))?;

        Ok(home_dir
            .join(constants::CONFIG_DIR)
            .join(constants::CONFIG_FILENAME))
    }

    /// reads the config file, writing the defaults out if it doesn't exist yet
    pub fn load() -> anyhow::Result<Self> {
        let config_filepath = Self::get_config_filepath()?;
        let contents = match fs::read_to_string(&config_filepath) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                let default_config = Self::default();
                default_config.save_to_file()?;
                return Ok(default_config);
            }
            Err(err) => return Err(anyhow!(err)),
        };

        Ok(toml::from_str(&contents)?)
    }

    fn save_to_file(&self) -> anyhow::Result<()> {
        let config_filepath = Self::get_config_filepath()?;
        if let Some(parent) = config_filepath.parent() {
            fs::DirBuilder::new().recursive(true).create(parent)?;
        }

        fs::write(config_filepath, self.to_toml()?)?;

        Ok(())
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// falls back to defaults when the file can't be read, handing back the reason
    pub fn load_or_default() -> (Self, Option<anyhow::Error>) {
        match Self::load() {
            Ok(config) => (config, None),
            Err(err) => (Self::default(), Some(err)),
        }
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn set_log_level(&mut self, log_level: LogLevel) -> anyhow::Result<()> {
        self.log_level = log_level;
        self.save_to_file()
    }

    pub fn get_request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// 0 clears the timeout
    pub fn set_request_timeout(&mut self, secs: u64) -> anyhow::Result<()> {
        self.request_timeout_secs = match secs {
            0 => None,
            secs => Some(secs),
        };
        self.save_to_file()
    }

    pub fn get_on_malformed(&self) -> MalformedPolicy {
        self.on_malformed
    }

    pub fn set_on_malformed(&mut self, policy: MalformedPolicy) -> anyhow::Result<()> {
        self.on_malformed = policy;
        self.save_to_file()
    }
}
