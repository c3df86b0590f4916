use crate::types::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    /// Default output format when --format is not given ("plain" or "json").
    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    /// Load from `<data-dir>/config.toml`. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config =
            toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn default_format(&self) -> Option<OutputFormat> {
        match self.display.format.as_deref() {
            Some("json") => Some(OutputFormat::Json),
            Some("plain") => Some(OutputFormat::Plain),
            _ => None,
        }
    }
}
