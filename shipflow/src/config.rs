//! Pipeline configuration.
//!
//! Configuration is loaded once, before the pipeline is built, and never
//! changes afterwards. It can come from a JSON document, from the
//! environment, or both (environment wins).

use crate::errors::ConfigError;
use crate::observability::LogFormat;
use crate::stages::ports::NotificationConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding [`PipelineConfig::send_email_summary`].
pub const SEND_EMAIL_SUMMARY_ENV: &str = "SHIPFLOW_SEND_EMAIL_SUMMARY";

/// Environment variable overriding [`PipelineConfig::log_format`].
pub const LOG_FORMAT_ENV: &str = "SHIPFLOW_LOG_FORMAT";

/// Read-only settings for a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Whether a summary email is sent after each run.
    pub send_email_summary: bool,
    /// Output format for [`crate::observability::init_tracing`].
    pub log_format: LogFormat,
}

impl PipelineConfig {
    /// Creates a configuration with defaults (email disabled, text logs).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the email summary flag.
    #[must_use]
    pub fn with_send_email_summary(mut self, enabled: bool) -> Self {
        self.send_email_summary = enabled;
        self
    }

    /// Sets the log format.
    #[must_use]
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed or has
    /// unknown fields.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "Loaded pipeline config");
        Ok(config)
    }

    /// Builds a configuration from defaults plus environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if a variable holds an
    /// unrecognised value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides()
    }

    /// Applies environment overrides on top of this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnv`] if a variable holds an
    /// unrecognised value.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.apply_overrides(
            std::env::var(SEND_EMAIL_SUMMARY_ENV).ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    fn apply_overrides(
        mut self,
        send_email_summary: Option<String>,
        log_format: Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(value) = send_email_summary {
            self.send_email_summary = parse_bool(SEND_EMAIL_SUMMARY_ENV, &value)?;
        }
        if let Some(value) = log_format {
            self.log_format = value.parse().map_err(|_| ConfigError::InvalidEnv {
                var: LOG_FORMAT_ENV.to_string(),
                value,
            })?;
        }
        Ok(self)
    }
}

impl NotificationConfig for PipelineConfig {
    fn send_email_summary(&self) -> bool {
        self.send_email_summary
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}
