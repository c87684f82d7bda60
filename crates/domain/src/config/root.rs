use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::rewrite::RewriteConfig;
use crate::{DomainError, RewriteRule};

/// Main configuration structure for Ferrous Rewrite
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Response rewriting configuration
    #[serde(default)]
    pub rewrite: RewriteConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-rewrite.toml in current directory
    /// 3. /etc/ferrous-rewrite/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(enabled) = overrides.response_rewrite {
            self.rewrite.response_rewrite = enabled;
        }
    }

    /// Validate configuration
    ///
    /// Every response rule must compile into a [`RewriteRule`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rewrite_rules().map(|_| ())
    }

    /// Build the response rule table in configuration order
    pub fn rewrite_rules(&self) -> Result<Vec<RewriteRule>, ConfigError> {
        RewriteRule::build_table(&self.rewrite.response_rules).map_err(|e| match e {
            DomainError::InvalidRewriteRuleAt { index, reason } => {
                ConfigError::InvalidRule { index, reason }
            }
            other => ConfigError::Validation(other.to_string()),
        })
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("ferrous-rewrite.toml").exists() {
            Some("ferrous-rewrite.toml".to_string())
        } else if std::path::Path::new("/etc/ferrous-rewrite/config.toml").exists() {
            Some("/etc/ferrous-rewrite/config.toml".to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub response_rewrite: Option<bool>,
}
