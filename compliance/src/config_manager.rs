use crate::{cli::Cli, config::ComplianceConfig, error::ComplianceError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration file format for persistent settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Settings for the environment the runner executes in
    pub environment: EnvironmentConfig,
    /// What is checked and what is expected
    pub compliance: ComplianceConfig,
}

/// Environment-specific configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Request timeout in seconds
    pub request_timeout_seconds: u64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            request_timeout_seconds: 30,
        }
    }
}

enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    fn of(path: &str) -> Self {
        if path.ends_with(".json") {
            Format::Json
        } else if path.ends_with(".yaml") || path.ends_with(".yml") {
            Format::Yaml
        } else {
            Format::Toml
        }
    }

    fn parse(&self, content: &str) -> Result<ConfigFile, ComplianceError> {
        Ok(match self {
            Format::Json => serde_json::from_str(content)?,
            Format::Yaml => serde_yaml::from_str(content)?,
            Format::Toml => toml::from_str(content)?,
        })
    }

    fn render(&self, config: &ConfigFile) -> Result<String, ComplianceError> {
        Ok(match self {
            Format::Json => serde_json::to_string_pretty(config)?,
            Format::Yaml => serde_yaml::to_string(config)?,
            Format::Toml => toml::to_string_pretty(config)?,
        })
    }
}

/// Configuration manager for loading and saving configuration files
pub struct ConfigManager {
    config_path: String,
    config: ConfigFile,
}

impl ConfigManager {
    /// Loads the configuration at `config_path`, or the defaults if there is no such file
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self, ComplianceError> {
        let config_path = config_path.as_ref().to_string_lossy().to_string();
        let config = Self::load_config(&config_path)?;

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Loads configuration from file
    ///
    /// The format follows the extension: `.json`, `.yaml`/`.yml`, anything else is TOML.
    pub fn load_config(path: &str) -> Result<ConfigFile, ComplianceError> {
        if !Path::new(path).exists() {
            return Ok(ConfigFile::default());
        }

        let content = fs::read_to_string(path)?;
        Format::of(path).parse(&content)
    }

    /// Saves configuration to file
    pub fn save_config(&self) -> Result<(), ComplianceError> {
        let content = Format::of(&self.config_path).render(&self.config)?;
        fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// Creates a default configuration file at the specified path
    pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<(), ComplianceError> {
        let path_str = path.as_ref().to_string_lossy();
        let content = Format::of(&path_str).render(&ConfigFile::default())?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> &ConfigFile {
        &self.config
    }

    /// Gets a mutable reference to the configuration
    pub fn get_config_mut(&mut self) -> &mut ConfigFile {
        &mut self.config
    }

    /// Validates the current configuration, reporting every problem found
    pub fn validate_config(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.config.environment.request_timeout_seconds == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if !LOG_LEVELS.contains(&self.config.environment.log_level.as_str()) {
            errors.push("Log level must be one of: trace, debug, info, warn, error".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Same as [`validate_config`](Self::validate_config), as a [`ComplianceError::InvalidConfig`]
    pub fn ensure_valid(&self) -> Result<(), ComplianceError> {
        self.validate_config().map_err(ComplianceError::InvalidConfig)
    }

    /// Merges CLI arguments with configuration file settings
    pub fn merge_with_cli_args(&mut self, cli_args: &Cli) {
        if let Some(level) = &cli_args.log_level {
            self.config.environment.log_level = level.clone();
        }
        if let Some(timeout) = cli_args.timeout {
            self.config.environment.request_timeout_seconds = timeout;
        }
        if cli_args.skip_idempotency {
            self.config.compliance.check_idempotency = false;
        }
    }
}
