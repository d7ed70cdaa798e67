//! Store connection settings.
//!
//! The hosted store needs only a base URL and a public (anon) key. Both come
//! from the environment; the table name can be overridden for staging data.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Environment variable holding the store base URL.
pub const URL_VAR: &str = "SUPABASE_URL";
/// Environment variable holding the public API key.
pub const KEY_VAR: &str = "SUPABASE_ANON_KEY";
/// Environment variable overriding the table name.
pub const TABLE_VAR: &str = "TOOLSHELF_TABLE";
/// Table queried when [`TABLE_VAR`] is unset.
pub const DEFAULT_TABLE: &str = "tools";

/// Configuration and fixture-loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{var} is not a valid URL: {value}")]
    InvalidUrl { var: &'static str, value: String },
    #[error("failed to read fixtures from {path}: {source}")]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse fixtures in {path}: {source}")]
    FixtureParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Connection settings for [`PostgrestStore`](crate::store::PostgrestStore).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`.
    pub url: String,
    /// Public anon key, sent as both `apikey` and bearer token.
    pub anon_key: String,
    /// Table name. Default: `"tools"`.
    pub table: String,
    /// Per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl StoreConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            table: DEFAULT_TABLE.to_string(),
            timeout: None,
        }
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let url = non_empty(URL_VAR).ok_or(ConfigError::Missing(URL_VAR))?;
        if reqwest::Url::parse(&url).is_err() {
            return Err(ConfigError::InvalidUrl {
                var: URL_VAR,
                value: url,
            });
        }
        let anon_key = non_empty(KEY_VAR).ok_or(ConfigError::Missing(KEY_VAR))?;

        let mut config = Self::new(url.trim_end_matches('/'), anon_key);
        if let Some(table) = non_empty(TABLE_VAR) {
            config.table = table;
        }
        Ok(config)
    }
}
