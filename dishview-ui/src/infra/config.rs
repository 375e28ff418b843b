use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domains::navigator::types::Orientation;
use crate::infra::constants::carousel::{centering, edge, eligibility};

const APP_DIR: &str = "dishview";
const CONFIG_FILE: &str = "navigator.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read navigator config: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed navigator config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid navigator config value `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tuning for the infinite carousel. Every field has a default equal to the
/// matching constant in `infra::constants::carousel`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    pub horizontal_min_items: usize,
    pub vertical_min_items: usize,
    pub leading_fraction: f32,
    pub trailing_fraction: f32,
    pub trailing_copies: f32,
    pub retry_delays_ms: Vec<u64>,
    pub max_centering_attempts: u32,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            horizontal_min_items: eligibility::HORIZONTAL_MIN_ITEMS,
            vertical_min_items: eligibility::VERTICAL_MIN_ITEMS,
            leading_fraction: edge::LEADING_FRACTION,
            trailing_fraction: edge::TRAILING_FRACTION,
            trailing_copies: edge::TRAILING_COPIES,
            retry_delays_ms: centering::RETRY_DELAYS_MS.to_vec(),
            max_centering_attempts: centering::MAX_ATTEMPTS,
        }
    }
}

impl NavigatorConfig {
    /// Load `<config_dir>/dishview/navigator.json`, falling back to defaults
    /// when the file is missing or unusable.
    pub fn load() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => {
                log::info!("Loaded navigator config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!(
                    "Ignoring navigator config at {}: {err}",
                    path.display()
                );
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fractions = [
            ("leading_fraction", self.leading_fraction),
            ("trailing_fraction", self.trailing_fraction),
        ];
        for (field, value) in fractions {
            if !value.is_finite() || !(0.0..1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must be within [0, 1)",
                });
            }
        }
        if !self.trailing_copies.is_finite()
            || self.trailing_copies <= 1.0 + self.leading_fraction
            || self.trailing_copies >= 3.0
        {
            return Err(ConfigError::InvalidValue {
                field: "trailing_copies",
                reason: "must lie between the leading band and the third copy",
            });
        }
        if self.horizontal_min_items == 0 || self.vertical_min_items == 0 {
            return Err(ConfigError::InvalidValue {
                field: "min_items",
                reason: "must be at least 1",
            });
        }
        if self.max_centering_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_centering_attempts",
                reason: "must be at least 1",
            });
        }
        if self.retry_delays_ms.windows(2).any(|w| w[0] > w[1]) {
            return Err(ConfigError::InvalidValue {
                field: "retry_delays_ms",
                reason: "must be ascending",
            });
        }
        Ok(())
    }

    pub fn min_items(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Horizontal => self.horizontal_min_items,
            Orientation::Vertical => self.vertical_min_items,
        }
    }

    pub fn retry_delays(&self) -> impl Iterator<Item = Duration> + '_ {
        self.retry_delays_ms.iter().copied().map(Duration::from_millis)
    }
}
