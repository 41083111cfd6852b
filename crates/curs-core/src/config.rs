//! Configuration management.
//!
//! Layers, lowest priority first: built-in defaults, an optional TOML file,
//! `CURS__`-prefixed environment variables (`CURS__HTTP__TIMEOUT_SECS=20`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default config file location.
pub const DEFAULT_CONFIG_PATH: &str = "config/curs.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,
    /// Snapshot output settings
    #[serde(default)]
    pub output: OutputConfig,
    /// Source selection and URL overrides
    #[serde(default)]
    pub sources: SourcesConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP client settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout (seconds)
    pub timeout_secs: u64,
    /// User-Agent header; some bank sites reject the default client UA
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string(),
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Snapshot output settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Snapshot file path
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("rates.json"),
        }
    }
}

/// Source selection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SourcesConfig {
    /// Collect only these source ids (empty = all)
    #[serde(default)]
    pub only: Vec<String>,
    /// Never collect these source ids
    #[serde(default)]
    pub skip: Vec<String>,
    /// Per-source URL overrides, keyed by source id
    #[serde(default)]
    pub urls: HashMap<String, String>,
}

impl SourcesConfig {
    /// Whether a source id passes the `only`/`skip` filters.
    pub fn is_enabled(&self, id: &str) -> bool {
        (self.only.is_empty() || self.only.iter().any(|s| s == id))
            && !self.skip.iter().any(|s| s == id)
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Output format (pretty, json, compact)
    pub format: String,
    /// Print file and line of each event
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            source_location: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from an optional file and the environment.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("CURS")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("sources.only")
                    .with_list_parse_key("sources.skip")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Loads from [`DEFAULT_CONFIG_PATH`].
    pub fn load_default() -> Result<Self, config::ConfigError> {
        Self::load(DEFAULT_CONFIG_PATH)
    }
}
