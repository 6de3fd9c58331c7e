//! Scroll manager configuration

use serde::{Deserialize, Serialize};
use tandem_animation::ScrollAnimationTiming;

use crate::error::{ConfigError, Result};

/// Tunables for paging, reveal and animated scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollSyncConfig {
    /// Content kept visible across a page up/down, in pixels.
    #[serde(default = "default_page_overlap")]
    pub page_overlap: i32,
    /// A revealed rectangle lands `viewport_height / divisor` below the top.
    #[serde(default = "default_reveal_margin_divisor")]
    pub reveal_margin_divisor: i32,
    /// Animated scroll speed and duration cap.
    #[serde(default)]
    pub timing: ScrollAnimationTiming,
}

fn default_page_overlap() -> i32 {
    24
}

fn default_reveal_margin_divisor() -> i32 {
    3
}

impl Default for ScrollSyncConfig {
    fn default() -> Self {
        Self {
            page_overlap: default_page_overlap(),
            reveal_margin_divisor: default_reveal_margin_divisor(),
            timing: ScrollAnimationTiming::default(),
        }
    }
}

impl ScrollSyncConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make paging or reveal meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.page_overlap < 0 {
            return Err(ConfigError::Invalid {
                field: "page_overlap",
                reason: format!("must be >= 0, got {}", self.page_overlap),
            });
        }
        if self.reveal_margin_divisor <= 0 {
            return Err(ConfigError::Invalid {
                field: "reveal_margin_divisor",
                reason: format!("must be > 0, got {}", self.reveal_margin_divisor),
            });
        }
        if self.timing.speed_px_per_sec <= 0 {
            return Err(ConfigError::Invalid {
                field: "timing.speed_px_per_sec",
                reason: format!("must be > 0, got {}", self.timing.speed_px_per_sec),
            });
        }
        if self.timing.max_duration_ms < 0 {
            return Err(ConfigError::Invalid {
                field: "timing.max_duration_ms",
                reason: format!("must be >= 0, got {}", self.timing.max_duration_ms),
            });
        }
        Ok(())
    }
}
