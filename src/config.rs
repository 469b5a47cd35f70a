use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SimulationConfig {
    /// Trim surrounding whitespace from the joined output block
    #[serde(default = "default_trim_output")]
    pub trim_output: bool,
}

#[derive(Debug, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub default_path: String,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// tracing filter directive, overridden by RUST_LOG
    #[serde(default = "default_filter")]
    pub filter: String,
    #[serde(default)]
    pub enable_run_log: bool,
    #[serde(default = "default_run_log_path")]
    pub run_log_path: String,
}

// Default values
fn default_trim_output() -> bool { true }
fn default_input_path() -> String { "instructions.txt".to_string() }
fn default_filter() -> String { "warn".to_string() }
fn default_run_log_path() -> String { "run_log.json".to_string() }

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trim_output: default_trim_output(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            default_path: default_input_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            enable_run_log: false,
            run_log_path: default_run_log_path(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Parse configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load configuration from file, or use defaults if it is missing or invalid
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "no config file found, using default configuration");
            return Config::default();
        }

        match Self::from_file(path) {
            Ok(config) => {
                info!(path = %path.display(), "loaded configuration");
                config
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "using default configuration");
                Config::default()
            }
        }
    }
}
