//! Configuration file support for Tempo.
//!
//! Stepper behaviour, appearance and log verbosity are stored as JSON so a
//! tuned stepper (cadences, range, labels) can be kept between runs.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tempo_ui::{constants, StepperOptions, StepperStyle};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show state transitions and commits
    Debug,
    /// Show every timer firing
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration that can be exported and imported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Stepper behaviour
    #[serde(default)]
    pub stepper: StepperSettings,

    /// Stepper appearance
    #[serde(default)]
    pub style: StepperStyle,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Stepper behaviour section of the config. Intervals are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepperSettings {
    #[serde(default = "default_value")]
    pub value: f64,
    #[serde(default = "default_min_value")]
    pub min_value: f64,
    #[serde(default = "default_max_value")]
    pub max_value: f64,
    #[serde(default = "default_step_value")]
    pub step_value: f64,
    #[serde(default = "default_auto_stepping_interval")]
    pub default_auto_stepping_interval: f64,
    #[serde(default = "fast_auto_stepping_interval")]
    pub fast_auto_stepping_interval: f64,
    #[serde(default = "auto_step_after_interval")]
    pub auto_step_after_interval: f64,
    #[serde(default = "fast_auto_step_after_interval")]
    pub fast_auto_step_after_interval: f64,
    #[serde(default = "default_true")]
    pub should_tap_to_change: bool,
    #[serde(default = "default_true")]
    pub should_auto_step: bool,
    #[serde(default = "default_true")]
    pub show_int_value: bool,
}

fn default_value() -> f64 {
    constants::DEFAULT_VALUE
}

fn default_min_value() -> f64 {
    constants::DEFAULT_MIN_VALUE
}

fn default_max_value() -> f64 {
    constants::DEFAULT_MAX_VALUE
}

fn default_step_value() -> f64 {
    constants::DEFAULT_STEP_VALUE
}

fn default_auto_stepping_interval() -> f64 {
    constants::DEFAULT_AUTO_STEPPING_INTERVAL.as_secs_f64()
}

fn fast_auto_stepping_interval() -> f64 {
    constants::FAST_AUTO_STEPPING_INTERVAL.as_secs_f64()
}

fn auto_step_after_interval() -> f64 {
    constants::AUTO_STEP_AFTER_INTERVAL.as_secs_f64()
}

fn fast_auto_step_after_interval() -> f64 {
    constants::FAST_AUTO_STEP_AFTER_INTERVAL.as_secs_f64()
}

fn default_true() -> bool {
    true
}

impl Default for StepperSettings {
    fn default() -> Self {
        Self {
            value: default_value(),
            min_value: default_min_value(),
            max_value: default_max_value(),
            step_value: default_step_value(),
            default_auto_stepping_interval: default_auto_stepping_interval(),
            fast_auto_stepping_interval: fast_auto_stepping_interval(),
            auto_step_after_interval: auto_step_after_interval(),
            fast_auto_step_after_interval: fast_auto_step_after_interval(),
            should_tap_to_change: true,
            should_auto_step: true,
            show_int_value: true,
        }
    }
}

/// Seconds from the config file, falling back when negative or not finite.
///
/// Rounds to the nearest nanosecond so `0.3` reads back as exactly 300ms.
fn seconds(name: &str, secs: f64, fallback: Duration) -> Duration {
    let nanos = (secs * 1e9).round();
    if !nanos.is_finite() || nanos < 0.0 || nanos > u64::MAX as f64 {
        log::warn!("Ignoring {} = {}, using {:?}", name, secs, fallback);
        return fallback;
    }
    Duration::from_nanos(nanos as u64)
}

impl StepperSettings {
    /// Convert to the engine's options.
    pub fn to_options(&self) -> StepperOptions {
        StepperOptions {
            value: self.value,
            min_value: self.min_value,
            max_value: self.max_value,
            step_value: self.step_value,
            default_auto_stepping_interval: seconds(
                "default_auto_stepping_interval",
                self.default_auto_stepping_interval,
                constants::DEFAULT_AUTO_STEPPING_INTERVAL,
            ),
            fast_auto_stepping_interval: seconds(
                "fast_auto_stepping_interval",
                self.fast_auto_stepping_interval,
                constants::FAST_AUTO_STEPPING_INTERVAL,
            ),
            auto_step_after_interval: seconds(
                "auto_step_after_interval",
                self.auto_step_after_interval,
                constants::AUTO_STEP_AFTER_INTERVAL,
            ),
            fast_auto_step_after_interval: seconds(
                "fast_auto_step_after_interval",
                self.fast_auto_step_after_interval,
                constants::FAST_AUTO_STEP_AFTER_INTERVAL,
            ),
            should_tap_to_change: self.should_tap_to_change,
            should_auto_step: self.should_auto_step,
            show_int_value: self.show_int_value,
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            stepper: StepperSettings::default(),
            style: StepperStyle::default(),
            log_level: LogLevel::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "tempo-config.json"
    }

    /// Get the default config file path for auto-load/save.
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("tempo").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("tempo")
                    .join(Self::default_filename())
            })
        }
    }

    /// Try to load configuration from `path`.
    /// Returns None if the file doesn't exist or can't be read.
    pub fn load_from(path: &std::path::Path) -> Option<Self> {
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {:?}: {}", path, e);
                    None
                }
            },
            Err(e) => {
                log::warn!("Failed to read config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// Try to load configuration from the default path.
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let json = self.to_json()?;
        std::fs::write(path, json)?;
        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Save configuration to the default path.
    pub fn save_to_default_path(&self) -> Result<(), ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save_to(&path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading/writing config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_match_engine_defaults() {
        let options = StepperSettings::default().to_options();
        assert_eq!(options, StepperOptions::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = AppConfig::new();
        config.stepper.max_value = 240.0;
        config.stepper.fast_auto_stepping_interval = 0.05;
        config.style.increase_button_text = "▲".to_string();
        config.log_level = LogLevel::Debug;

        let json = config.to_json().unwrap();
        let loaded = AppConfig::from_json(&json).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.stepper.to_options().fast_auto_stepping_interval,
            Duration::from_millis(50)
        );
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = AppConfig::from_json(r#"{ "version": 1, "stepper": { "step_value": 5 } }"#)
            .unwrap();
        assert_eq!(config.stepper.step_value, 5.0);
        assert_eq!(config.stepper.max_value, 100.0);
        assert_eq!(config.style, StepperStyle::default());
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_newer_version_rejected() {
        let result = AppConfig::from_json(r#"{ "version": 99 }"#);
        assert!(matches!(
            result,
            Err(ConfigError::VersionTooNew {
                file_version: 99,
                ..
            })
        ));
    }

    #[test]
    fn test_bad_interval_falls_back() {
        let settings = StepperSettings {
            auto_step_after_interval: -1.0,
            default_auto_stepping_interval: f64::NAN,
            ..StepperSettings::default()
        };
        let options = settings.to_options();
        assert_eq!(options.auto_step_after_interval, Duration::from_millis(500));
        assert_eq!(
            options.default_auto_stepping_interval,
            Duration::from_millis(300)
        );
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = std::env::temp_dir().join(format!("tempo-config-test-{}", std::process::id()));
        let path = dir.join(AppConfig::default_filename());

        let mut config = AppConfig::new();
        config.stepper.show_int_value = false;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert!(!loaded.stepper.show_int_value);

        std::fs::remove_dir_all(&dir).unwrap();
        assert!(AppConfig::load_from(&path).is_none());
    }
}
