//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::ApiConfig;
use crate::dataset::ColumnNames;
use crate::ui::LayoutSettings;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dataset location and header names
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_data_path")]
    pub path: PathBuf,

    #[serde(default)]
    pub columns: ColumnNames,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/spacex_launch_dash.csv")
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            columns: ColumnNames::default(),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_max_connections")]
    pub max_connections: usize,

    #[serde(default)]
    pub debug: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

fn default_max_connections() -> usize {
    100
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_connections: default_max_connections(),
            debug: false,
        }
    }
}

/// Dashboard presentation settings
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_slider_step")]
    pub slider_step: f64,
}

fn default_title() -> String {
    "SpaceX Launch Records Dashboard".to_string()
}

fn default_slider_step() -> f64 {
    1000.0
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            slider_step: default_slider_step(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// First existing file among the default locations
    ///
    /// Looks in `<config dir>/launchboard/config.toml`, then `./launchboard.toml`.
    pub fn default_path() -> Option<PathBuf> {
        let candidates = [
            dirs::config_dir().map(|p| p.join("launchboard").join("config.toml")),
            Some(PathBuf::from("./launchboard.toml")),
        ];
        first_existing(candidates.into_iter().flatten())
    }

    /// Load `path` with environment overrides, or the environment alone
    ///
    /// A file that exists but fails to load is an error, never silently
    /// replaced by defaults.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_with_env(path),
            None => Ok(Self::from_env()),
        }
    }

    /// Settings for the HTTP layer
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            host: self.server.host.clone(),
            port: self.server.port,
            debug: self.server.debug,
            max_connections: self.server.max_connections,
        }
    }

    /// Settings for the page layout
    pub fn layout_settings(&self) -> LayoutSettings {
        LayoutSettings {
            title: self.dashboard.title.clone(),
            slider_step: self.dashboard.slider_step,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dashboard.slider_step.is_finite() && self.dashboard.slider_step > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "dashboard.slider_step must be positive, got {}",
                self.dashboard.slider_step
            )));
        }
        Ok(())
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("LAUNCHBOARD_DATA") {
            self.dataset.path = PathBuf::from(path);
        }

        if let Ok(host) = std::env::var("LAUNCHBOARD_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("LAUNCHBOARD_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Ok(level) = std::env::var("LAUNCHBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("LAUNCHBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

fn first_existing(candidates: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    candidates.into_iter().find(|p| p.exists())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Launchboard Configuration
#
# Environment variables override these settings:
# - LAUNCHBOARD_DATA
# - LAUNCHBOARD_HOST
# - LAUNCHBOARD_PORT
# - LAUNCHBOARD_LOG_LEVEL
# - LAUNCHBOARD_LOG_FORMAT

[dataset]
# Launch records CSV, loaded once at startup
path = "data/spacex_launch_dash.csv"

# CSV header names, for files exported with different column titles
[dataset.columns]
launch_site = "Launch Site"
payload_mass = "Payload Mass (kg)"
booster_version_category = "Booster Version Category"
outcome = "class"
flight_number = "Flight Number"
booster_version = "Booster Version"

[server]
host = "127.0.0.1"
port = 8050

# Maximum concurrent dashboard sessions
max_connections = 100

# Verbose callback errors and no page caching
debug = false

[dashboard]
title = "SpaceX Launch Records Dashboard"

# Payload slider step (kg)
slider_step = 1000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8050);
        assert_eq!(config.dashboard.slider_step, 1000.0);
        assert_eq!(config.dataset.path, PathBuf::from("data/spacex_launch_dash.csv"));
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.dashboard.title, "SpaceX Launch Records Dashboard");
    }

    #[test]
    fn test_invalid_slider_step() {
        let err = Config::parse("[dashboard]\nslider_step = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\ndebug = true").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.server.debug);
        assert!(config.api_config().debug);
    }

    #[test]
    fn test_column_overrides() {
        let config = Config::parse("[dataset.columns]\nlaunch_site = \"Site\"\n").unwrap();
        assert_eq!(config.dataset.columns.launch_site, "Site");
        assert_eq!(config.dataset.columns.outcome, "class");

        let defaults = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(defaults.dataset.columns, ColumnNames::default());
    }

    #[test]
    fn test_broken_file_is_not_replaced_by_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        assert!(matches!(
            Config::load_from(Some(file.path())),
            Err(ConfigError::Parse { .. })
        ));
        assert!(Config::load_from(None).is_ok());
    }

    #[test]
    fn test_first_existing_skips_missing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let present = dir.path().join("present.toml");
        std::fs::write(&present, "").unwrap();

        assert_eq!(
            first_existing([missing.clone(), present.clone()]),
            Some(present)
        );
        assert_eq!(first_existing([missing]), None);
    }

    #[test]
    fn test_parse_error_names_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        match Config::load(file.path()).unwrap_err() {
            ConfigError::Parse { path, .. } => assert_eq!(path, file.path()),
            other => panic!("Expected Parse, got {other:?}"),
        }
    }
}
