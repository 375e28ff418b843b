//! Read-only access to ambient host state.
//!
//! Views and domains receive an [`EnvironmentQuery`] instead of reading env
//! vars or files directly, so they can be driven by a fixed environment in
//! tests.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

const APP_DIR: &str = "dishview";
const DISMISSAL_FILE: &str = "tips-dismissed-at";

/// How long a dismissed tips banner stays hidden.
pub const DISMISSAL_TTL_DAYS: i64 = 7;

pub trait EnvironmentQuery: fmt::Debug + Send + Sync {
    /// Whether the host prefers a dark color scheme.
    fn prefers_dark(&self) -> bool;

    /// When the user last dismissed the tips banner, if ever.
    fn dismissed_at(&self) -> Option<DateTime<Utc>>;

    /// True when the banner was dismissed within [`DISMISSAL_TTL_DAYS`].
    fn dismissal_active(&self, now: DateTime<Utc>) -> bool {
        self.dismissed_at()
            .is_some_and(|at| now - at < Duration::days(DISMISSAL_TTL_DAYS))
    }
}

pub type SharedEnvironment = Arc<dyn EnvironmentQuery>;

/// Environment backed by process env vars and the user's data directory.
#[derive(Debug, Clone)]
pub struct SystemEnvironment {
    theme_override: Option<bool>,
    dismissal_path: Option<PathBuf>,
}

impl SystemEnvironment {
    pub fn new(theme: Option<&str>) -> Self {
        let theme_override = theme.and_then(|value| {
            match value.trim().to_ascii_lowercase().as_str() {
                "dark" => Some(true),
                "light" => Some(false),
                other => {
                    log::warn!("Unknown theme {other:?}, using default");
                    None
                }
            }
        });

        Self {
            theme_override,
            dismissal_path: dirs::data_dir()
                .map(|dir| dir.join(APP_DIR).join(DISMISSAL_FILE)),
        }
    }

    pub fn with_dismissal_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dismissal_path = Some(path.into());
        self
    }

    /// Persist the dismissal timestamp. This is the only state the app keeps
    /// between runs.
    pub fn record_dismissal(&self, at: DateTime<Utc>) -> std::io::Result<()> {
        let Some(path) = self.dismissal_path.as_deref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, at.to_rfc3339())
    }

    fn read_dismissal(path: &Path) -> Option<DateTime<Utc>> {
        let raw = std::fs::read_to_string(path).ok()?;
        match DateTime::parse_from_rfc3339(raw.trim()) {
            Ok(at) => Some(at.with_timezone(&Utc)),
            Err(err) => {
                log::warn!(
                    "Ignoring unreadable dismissal timestamp in {}: {err}",
                    path.display()
                );
                None
            }
        }
    }
}

impl EnvironmentQuery for SystemEnvironment {
    fn prefers_dark(&self) -> bool {
        self.theme_override.unwrap_or(true)
    }

    fn dismissed_at(&self) -> Option<DateTime<Utc>> {
        self.dismissal_path.as_deref().and_then(Self::read_dismissal)
    }
}

/// Environment with fixed answers.
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment {
    pub dark: bool,
    pub dismissed_at: Option<DateTime<Utc>>,
}

impl EnvironmentQuery for FixedEnvironment {
    fn prefers_dark(&self) -> bool {
        self.dark
    }

    fn dismissed_at(&self) -> Option<DateTime<Utc>> {
        self.dismissed_at
    }
}
