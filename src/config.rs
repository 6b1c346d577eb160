//! Configuration loading and management for acta.
//!
//! Loads settings from `acta.toml` in the working directory or under
//! `~/.config/acta/`. Every setting has a built-in default, so a missing file
//! is not an error - only an unreadable or unparseable one is.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::report::{DEFAULT_CUSTOMER, DEFAULT_ENGAGEMENT, DEFAULT_PERIOD};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Report defaults, overridable per run from the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDefaults {
    #[serde(default = "default_period")]
    pub period_label: String,
    #[serde(default = "default_customer")]
    pub customer_name: String,
    #[serde(default = "default_engagement")]
    pub engagement_name: String,
}

/// Input/output directories, relative to the project root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_inputs")]
    pub inputs: PathBuf,
    #[serde(default = "default_outputs")]
    pub outputs: PathBuf,
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportDefaults,
    #[serde(default)]
    pub paths: PathsConfig,
}

fn default_period() -> String {
    DEFAULT_PERIOD.to_string()
}

fn default_customer() -> String {
    DEFAULT_CUSTOMER.to_string()
}

fn default_engagement() -> String {
    DEFAULT_ENGAGEMENT.to_string()
}

fn default_inputs() -> PathBuf {
    PathBuf::from("inputs")
}

fn default_outputs() -> PathBuf {
    PathBuf::from("outputs")
}

impl Default for ReportDefaults {
    fn default() -> Self {
        Self {
            period_label: default_period(),
            customer_name: default_customer(),
            engagement_name: default_engagement(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            inputs: default_inputs(),
            outputs: default_outputs(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report: ReportDefaults::default(),
            paths: PathsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default locations; built-in defaults when
    /// no file exists.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Find the config file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        let local_config = PathBuf::from("acta.toml");
        if local_config.exists() {
            return Some(local_config);
        }
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config").join("acta").join("acta.toml");
            if home_config.exists() {
                return Some(home_config);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_cover_every_setting() {
        let config = Config::default();
        assert_eq!(config.report.customer_name, "Ventia");
        assert_eq!(config.report.engagement_name, "Supply Chain");
        assert_eq!(config.report.period_label, "Current reporting period");
        assert_eq!(config.paths.inputs, PathBuf::from("inputs"));
        assert_eq!(config.paths.outputs, PathBuf::from("outputs"));
    }

    #[test]
    fn partial_file_falls_back_per_field() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[report]\ncustomer_name = \"Acme\"\n\n[paths]\noutputs = \"decks\""
        )
        .unwrap();
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.report.customer_name, "Acme");
        assert_eq!(config.report.period_label, "Current reporting period");
        assert_eq!(config.paths.inputs, PathBuf::from("inputs"));
        assert_eq!(config.paths.outputs, PathBuf::from("decks"));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "report = not toml").unwrap();
        assert!(matches!(
            Config::load_from(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }
}
