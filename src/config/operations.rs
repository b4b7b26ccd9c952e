//! Config loading, validation, and client settings.

use super::model::Config;
use super::types::MAX_TEMPERATURE;
use crate::error::{PromptlineError, Result};
use crate::fs::atomic_write_file;
use crate::llm::{ClientConfig, LlmError};
use std::path::Path;
use std::time::Duration;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PromptlineError::ConfigError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptlineError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document for a struct; treat it as all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            PromptlineError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptlineError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Atomically write the config to a YAML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        atomic_write_file(path, &self.to_yaml()?)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `model` and `api_key_env` must be non-empty
    /// - `api_base_url` must start with `http://` or `https://`
    /// - `request_timeout_seconds` must be positive
    /// - every temperature must be within `0.0..=2.0`
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(PromptlineError::ConfigError(
                "config validation failed: model must not be empty".to_string(),
            ));
        }

        if self.api_key_env.trim().is_empty() {
            return Err(PromptlineError::ConfigError(
                "config validation failed: api_key_env must not be empty".to_string(),
            ));
        }

        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://"))
        {
            return Err(PromptlineError::ConfigError(format!(
                "config validation failed: api_base_url must be an http(s) URL (found '{}')",
                self.api_base_url
            )));
        }

        if self.request_timeout_seconds == 0 {
            return Err(PromptlineError::ConfigError(
                "config validation failed: request_timeout_seconds must be greater than 0"
                    .to_string(),
            ));
        }

        for (name, value) in self.temperatures.entries() {
            if !(0.0..=MAX_TEMPERATURE).contains(&value) {
                return Err(PromptlineError::ConfigError(format!(
                    "config validation failed: temperatures.{} must be between 0.0 and {} (found {})",
                    name, MAX_TEMPERATURE, value
                )));
            }
        }

        Ok(())
    }

    /// Per-request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    /// Read the API key from the configured environment variable.
    ///
    /// An unset or blank variable is `LlmError::MissingApiKey`.
    pub fn api_key(&self) -> std::result::Result<String, LlmError> {
        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(LlmError::MissingApiKey {
                env: self.api_key_env.clone(),
            }),
        }
    }

    /// Build the explicit client handle for the generative API.
    pub fn client_config(&self) -> std::result::Result<ClientConfig, LlmError> {
        Ok(ClientConfig {
            base_url: self.api_base_url.trim_end_matches('/').to_string(),
            model: self.model.clone(),
            api_key: self.api_key()?,
            timeout: self.request_timeout(),
        })
    }
}
