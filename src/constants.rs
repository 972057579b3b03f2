pub const DEFAULT_SCHEME: &str = "http://";

pub const SOURCE_KEYS_PATH: &str = "/v1/keys";
pub const DEST_USERS_PATH: &str = "/v1/users";

pub const CONFIG_DIR: &str = ".pm-migrate";
pub const CONFIG_FILENAME: &str = "config.toml";

/// source quota is in bytes, destination wants it divided by this
pub const QUOTA_DIVISOR: i64 = 1000;
pub const USED_DIVISOR: f64 = 1000.0;
pub const USED_BYTES_MULTIPLIER: f64 = 1_000_000.0;
