//! CLI configuration loading.
//!
//! Bundled defaults are merged with an optional `momentum.toml` in the
//! working directory and `MOMENTUM_*` environment variables, user values
//! taking precedence.

use config::{Config, Environment, File, FileFormat};
use momentum_engine::EngineConfig;
use momentum_error::{ConfigError, MomentumResult};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_CONFIG: &str = include_str!("../momentum.toml");

/// Top-level CLI configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MomentumConfig {
    /// Model identifier for script generation.
    pub script_model: String,
    /// Model identifier for image generation.
    pub image_model: String,
    /// Script-client retry behavior.
    pub retry: RetryConfig,
    /// Terminal status display timing.
    pub display: DisplayConfig,
}

/// Retry knobs for the script client.
#[derive(Debug, Clone, Deserialize)]
pub struct RetryConfig {
    /// Retry transient transport failures at all.
    pub enabled: bool,
    /// Override the per-error default retry count.
    #[serde(default)]
    pub max_retries: Option<usize>,
    /// Override the per-error default initial backoff.
    #[serde(default)]
    pub backoff_ms: Option<u64>,
}

/// How long terminal statuses stay visible.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Milliseconds before a Completed status clears.
    pub completed_reset_ms: u64,
    /// Milliseconds before a Failed status clears.
    pub failed_reset_ms: u64,
}

impl MomentumConfig {
    /// Load configuration: bundled defaults, then `./momentum.toml`, then
    /// `MOMENTUM_*` environment variables.
    pub fn load() -> MomentumResult<Self> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::with_name("momentum").required(false))
            .add_source(Environment::with_prefix("MOMENTUM").separator("__"))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to load configuration: {}", e)))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)))?;
        Ok(config)
    }

    /// Engine timing derived from the display section.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            completed_reset: Duration::from_millis(self.display.completed_reset_ms),
            failed_reset: Duration::from_millis(self.display.failed_reset_ms),
        }
    }
}
