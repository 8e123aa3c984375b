use crate::error::{PortfolioError, Result};
use serde::{Deserialize, Serialize};
use std::{path::Path, time::Duration};
use tokio::fs;

/// Settings for the simulated submission transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Simulated network latency in milliseconds
    pub delay_ms: u64,
    /// Probability in `[0, 1]` that a submission is delivered
    pub success_rate: f64,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            delay_ms: 2000,
            success_rate: 0.8,
        }
    }
}

impl TransportConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.success_rate) {
            return Err(PortfolioError::ConfigError(format!(
                "transport.success_rate must be between 0 and 1, got {}",
                self.success_rate
            )));
        }
        Ok(())
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub transport: TransportConfig,
}

impl PortfolioConfig {
    /// Parses and validates a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: PortfolioConfig = serde_json::from_str(json)?;
        config.transport.validate()?;
        Ok(config)
    }

    /// Reads configuration from a JSON file, falling back to defaults when it is absent
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).await?;
        let config = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
