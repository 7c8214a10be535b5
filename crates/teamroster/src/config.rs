//! Configuration management for teamroster.
//!
//! This module provides configuration loading and validation using figment,
//! supporting a TOML config file, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::idle::IdleConfig;
use crate::notify::NotifierSettings;
use crate::store::ids::IdStrategy;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "teamroster";

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "TEAMROSTER_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables prefixed with `TEAMROSTER_`, with `__` between
///    section and key (`TEAMROSTER_IDLE__TIMEOUT_MS=30000`)
/// 2. TOML config file at `~/.config/teamroster/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Inactivity detection.
    pub idle: IdleSection,
    /// Notification behaviour.
    pub notifications: NotificationSection,
    /// Roster session setup.
    pub roster: RosterSection,
}

/// Inactivity detection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdleSection {
    /// Milliseconds without input before the user counts as idle.
    pub timeout_ms: u64,
    /// Minimum milliseconds between accepted activity events.
    pub throttle_ms: u64,
    /// Milliseconds between countdown refreshes.
    pub refresh_interval_ms: u64,
}

/// Notification settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationSection {
    /// Lifetime of ordinary notifications in milliseconds.
    pub auto_close_ms: u64,
    /// Lifetime of the idle warning in milliseconds.
    pub idle_warning_ms: u64,
    /// Maximum number of notifications shown at once.
    pub max_visible: usize,
}

/// Session setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterSection {
    /// Start the session with the demo clubs.
    pub seed_demo_teams: bool,
    /// How new team ids are generated.
    pub id_strategy: IdStrategy,
}

impl Default for IdleSection {
    fn default() -> Self {
        Self {
            timeout_ms: 60_000,
            throttle_ms: 500,
            refresh_interval_ms: 1_000,
        }
    }
}

impl Default for NotificationSection {
    fn default() -> Self {
        Self {
            auto_close_ms: 3_000,
            idle_warning_ms: 5_000,
            max_visible: 5,
        }
    }
}

impl Default for RosterSection {
    fn default() -> Self {
        Self {
            seed_demo_teams: true,
            id_strategy: IdStrategy::Sequential,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing, or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let nonzero = [
            ("idle.timeout_ms", self.idle.timeout_ms),
            ("idle.refresh_interval_ms", self.idle.refresh_interval_ms),
            ("notifications.auto_close_ms", self.notifications.auto_close_ms),
            ("notifications.idle_warning_ms", self.notifications.idle_warning_ms),
        ];
        for (key, value) in nonzero {
            if value == 0 {
                return Err(Error::ConfigValidation {
                    message: format!("{key} must be greater than 0"),
                });
            }
        }

        if self.notifications.max_visible == 0 {
            return Err(Error::ConfigValidation {
                message: "notifications.max_visible must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Idle monitor settings.
    #[must_use]
    pub fn idle_config(&self) -> IdleConfig {
        IdleConfig {
            timeout: Duration::from_millis(self.idle.timeout_ms),
            throttle: Duration::from_millis(self.idle.throttle_ms),
        }
    }

    /// Countdown refresh cadence.
    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.idle.refresh_interval_ms)
    }

    /// Notification queue settings.
    #[must_use]
    pub fn notifier_settings(&self) -> NotifierSettings {
        NotifierSettings {
            auto_close: Duration::from_millis(self.notifications.auto_close_ms),
            max_visible: self.notifications.max_visible,
        }
    }

    /// How long the idle warning stays up.
    #[must_use]
    pub fn idle_warning_lifetime(&self) -> Duration {
        Duration::from_millis(self.notifications.idle_warning_ms)
    }
}
