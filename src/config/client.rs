use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientConfigError {
    #[error("validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Log level
    pub log_level: String,
    /// Base url of the xena server
    pub base_url: String,
    /// Request timeout in seconds; requests wait indefinitely if unset
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn from_file(file_path: String) -> Result<Self> {
        let file = std::fs::File::open(file_path)?;
        let reader = std::io::BufReader::new(file);
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.log_level()?;

        if self.base_url.len() == 0 {
            return Err(ClientConfigError::ValidationFailed(format!(
                "base_url - '{}'",
                self.base_url
            ))
            .into());
        }

        if let Some(0) = self.timeout_secs {
            return Err(ClientConfigError::ValidationFailed(format!("timeout_secs - '0'")).into());
        }

        Ok(())
    }

    pub fn log_level(&self) -> Result<tracing::Level> {
        let log_level = if self.log_level.to_lowercase() == "info" {
            tracing::Level::INFO
        } else if self.log_level.to_lowercase() == "debug" {
            tracing::Level::DEBUG
        } else if self.log_level.to_lowercase() == "warning" {
            tracing::Level::WARN
        } else if self.log_level.to_lowercase() == "error" {
            tracing::Level::ERROR
        } else {
            return Err(ClientConfigError::ValidationFailed(format!(
                "log_level - '{}'",
                self.log_level
            ))
            .into());
        };
        Ok(log_level)
    }
}
