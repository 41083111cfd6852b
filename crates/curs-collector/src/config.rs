//! Collector configuration.

use crate::error::{CollectorError, Result};
use curs_core::{AppConfig, DEFAULT_CONFIG_PATH};
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_VAR: &str = "CURS_CONFIG";

/// Loaded collector settings.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// File the settings were read from (it may not exist)
    pub path: PathBuf,
    pub app: AppConfig,
}

impl CollectorConfig {
    /// Loads `.env`, then the configuration file and `CURS__*` overrides.
    ///
    /// The file is `path` when given, else `$CURS_CONFIG`, else
    /// [`DEFAULT_CONFIG_PATH`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = match path {
            Some(path) => path.to_path_buf(),
            None => std::env::var(CONFIG_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH)),
        };

        let app = AppConfig::load(&path).map_err(|e| {
            CollectorError::Config(format!("{}: {}", path.display(), e))
        })?;

        Ok(Self { path, app })
    }

    /// Restricts collection to a comma-separated list of source ids.
    pub fn with_sources(mut self, sources: &str) -> Self {
        self.app.sources.only = sources
            .split(',')
            .map(|s| s.trim().to_ascii_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    /// Overrides the snapshot output path.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.app.output.path = output.into();
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.app.output.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[output]\npath = \"out/today.json\"\n\n[sources]\nskip = [\"cursmd\"]"
        )
        .unwrap();

        let config = CollectorConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.path, file.path());
        assert_eq!(config.output_path(), Path::new("out/today.json"));
        assert_eq!(config.app.sources.skip, vec!["cursmd".to_string()]);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CollectorConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.app.http.timeout_secs, 10);
        assert_eq!(config.output_path(), Path::new("rates.json"));
    }

    #[test]
    fn test_cli_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let config = CollectorConfig::load(Some(&dir.path().join("absent.toml")))
            .unwrap()
            .with_sources(" BNM, maib ,,")
            .with_output("x.json");

        assert_eq!(config.app.sources.only, vec!["bnm", "maib"]);
        assert_eq!(config.output_path(), Path::new("x.json"));
    }

    #[test]
    fn test_output_override_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("data").join("rates.json");
        let config = CollectorConfig::load(Some(&dir.path().join("absent.toml")))
            .unwrap()
            .with_output(target.clone());

        assert_eq!(config.output_path(), target.as_path());
        assert_eq!(config.app.output.path, target);
    }
}
