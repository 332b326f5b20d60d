//! Configuration types for tickbook

use serde::Deserialize;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Display configuration for the interactive shell
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Currency prefix used when printing prices
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Decimal places shown for prices
    #[serde(default = "default_price_precision")]
    pub price_precision: u32,

    /// Also render timestamps as UTC datetimes
    #[serde(default)]
    pub human_time: bool,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_currency() -> String {
    "₹".to_string()
}
fn default_price_precision() -> u32 {
    2
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            price_precision: 2,
            human_time: false,
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
