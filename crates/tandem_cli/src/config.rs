//! Tandem configuration file handling

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tandem_headless::HeadlessRunConfig;
use tandem_platform::SettleMode;
use tandem_scroll::ScrollSyncConfig;

/// Top-level Tandem configuration (tandem.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TandemConfig {
    #[serde(default)]
    pub scroll: ScrollSyncConfig,
    #[serde(default)]
    pub headless: HeadlessConfig,
}

/// Defaults for scenario runs
#[derive(Debug, Deserialize, Serialize)]
pub struct HeadlessConfig {
    /// How the headless host answers overscroll requests
    #[serde(default)]
    pub settle_mode: SettleMode,
    /// Upper bound for a single `tick` step
    #[serde(default = "default_max_tick_frames")]
    pub max_tick_frames: u32,
}

fn default_max_tick_frames() -> u32 {
    600
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            settle_mode: SettleMode::default(),
            max_tick_frames: default_max_tick_frames(),
        }
    }
}

impl TandemConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TandemConfig = toml::from_str(content)?;
        config.scroll.validate()?;
        Ok(config)
    }

    /// Runtime settings for the headless runner
    pub fn run_config(&self) -> HeadlessRunConfig {
        HeadlessRunConfig {
            config: self.scroll,
            settle_mode: self.headless.settle_mode,
            max_tick_frames: self.headless.max_tick_frames,
        }
    }
}
