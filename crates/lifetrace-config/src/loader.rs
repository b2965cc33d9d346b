//! Configuration file loading and parsing.

use crate::types::RecorderConfig;
use chrono::format::{Item, StrftimeItems};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name looked up in a project directory.
pub const CONFIG_FILE_NAME: &str = "lifetrace.yaml";

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config: {source}")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },

    #[error("invalid value for {var}: {message}")]
    InvalidEnv { var: String, message: String },
}

/// Configuration loader.
pub struct ConfigLoader {
    base_path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the given project directory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            base_path: project_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the config file this loader reads.
    pub fn config_path(&self) -> PathBuf {
        self.base_path.join(CONFIG_FILE_NAME)
    }

    /// Load `lifetrace.yaml`, falling back to defaults if it is absent.
    pub fn load(&self) -> Result<RecorderConfig, ConfigError> {
        let config_path = self.config_path();

        if !config_path.exists() {
            return Ok(RecorderConfig::default());
        }

        Self::load_file(&config_path)
    }

    /// Load a specific config file. The file must exist.
    pub fn load_file(path: impl AsRef<Path>) -> Result<RecorderConfig, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate YAML content.
    pub fn parse(contents: &str) -> Result<RecorderConfig, ConfigError> {
        let expanded = expand_env_vars(contents)?;

        let config: RecorderConfig = serde_yaml::from_str(&expanded)
            .map_err(|e| ConfigError::ParseError {
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        validate(&config)?;
        Ok(config)
    }

    /// Save configuration to the project's config file.
    pub fn save(&self, config: &RecorderConfig) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(config).map_err(|e| ConfigError::ParseError {
            line: None,
            message: e.to_string(),
        })?;
        std::fs::write(self.config_path(), yaml)?;
        Ok(())
    }
}

/// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
    let re = regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").map_err(|e| {
        ConfigError::ParseError {
            line: None,
            message: e.to_string(),
        }
    })?;

    let mut result = content.to_string();
    for cap in re.captures_iter(content) {
        let full_match = &cap[0];
        let var_name = &cap[1];
        let default = cap.get(2).map(|m| m.as_str());

        let value = match std::env::var(var_name) {
            Ok(v) => v,
            Err(_) => match default {
                Some(d) => d.to_string(),
                None => {
                    return Err(ConfigError::EnvVarNotFound {
                        var: var_name.to_string(),
                    })
                }
            },
        };

        result = result.replace(full_match, &value);
    }

    Ok(result)
}

/// Validate configuration values.
pub fn validate(config: &RecorderConfig) -> Result<(), ConfigError> {
    if config.capacity == 0 {
        return Err(ConfigError::ValidationError {
            message: "capacity must be greater than 0".to_string(),
        });
    }

    if config.time_format.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            message: "time_format must not be empty".to_string(),
        });
    }

    if StrftimeItems::new(&config.time_format).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::ValidationError {
            message: format!("time_format is not a valid strftime pattern: {}", config.time_format),
        });
    }

    Ok(())
}
