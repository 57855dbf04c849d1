use anyhow::{Context, Result};
use serde::Deserialize;
use servermon_core::DisplaySettings;

/// Application configuration loaded from a TOML file or defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Exit non-zero when any section of the report failed to decode.
    #[serde(default)]
    pub fail_on_section_errors: bool,

    /// How normalized values are rendered.
    #[serde(default)]
    pub display: DisplaySettings,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {path}"))?;
        let config: AppConfig = toml::de::from_str(&contents)
            .with_context(|| format!("invalid config file {path}"))?;
        Ok(config)
    }
}
