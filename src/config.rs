//! Configuration management for pickem-ui
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    APP_NAME, CONFIG_FILE_NAME, DEFAULT_CALENDARS, DEFAULT_MAX_CONFIDENCE, DEFAULT_MOBILE_BREAKPOINT, MAX_CALENDARS,
    MAX_CONFIDENCE_LIMIT, MAX_MOBILE_BREAKPOINT, MIN_CALENDARS, MIN_MOBILE_BREAKPOINT,
};
use crate::date_range::{has_date_token, DEFAULT_FORMAT};
use crate::icons::IconTheme;
use crate::theme::{Skin, Theme};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub date_picker: DatePickerConfig,
    pub standings: StandingsConfig,
    pub pick_form: PickFormConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Rendering backend: "classic" or "material"
    pub skin: Skin,
    /// Glyph set: "ascii", "unicode" or "emoji"
    pub icon_theme: IconTheme,
    /// Enable mouse support
    pub mouse_enabled: bool,
}

/// Defaults applied to every date range picker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatePickerConfig {
    /// Display pattern built from MM, dd, yyyy, M, d and yy
    pub format: String,
    /// Months shown side by side on wide terminals (1-3)
    pub calendars: u8,
    pub close_on_select: bool,
    pub show_days_outside_current_month: bool,
    pub display_week_number: bool,
    /// Width in columns below which the full screen picker is used
    pub mobile_breakpoint: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StandingsConfig {
    pub show_avatars: bool,
    pub highlight_current_user: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PickFormConfig {
    /// Largest confidence value offered
    pub max_confidence: u32,
    pub show_confidence: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write a log file
    pub enabled: bool,
    /// One of "off", "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            skin: Skin::default(),
            icon_theme: IconTheme::default(),
            mouse_enabled: true,
        }
    }
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            calendars: DEFAULT_CALENDARS,
            close_on_select: true,
            show_days_outside_current_month: false,
            display_week_number: false,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
        }
    }
}

impl Default for StandingsConfig {
    fn default() -> Self {
        Self {
            show_avatars: true,
            highlight_current_user: true,
        }
    }
}

impl Default for PickFormConfig {
    fn default() -> Self {
        Self {
            max_confidence: DEFAULT_MAX_CONFIDENCE,
            show_confidence: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level; validation guarantees this succeeds on loaded configs
    #[must_use]
    pub fn level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.level).unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Option<PathBuf> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from(CONFIG_FILE_NAME);
        if current_dir_config.exists() {
            return Some(current_dir_config);
        }

        // 2. Check XDG config directory
        let xdg_config = Self::get_default_config_path().ok()?;
        xdg_config.exists().then_some(xdg_config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let picker = &self.date_picker;
        if !(MIN_CALENDARS..=MAX_CALENDARS).contains(&picker.calendars) {
            anyhow::bail!(
                "calendars must be between {} and {}, got {}",
                MIN_CALENDARS,
                MAX_CALENDARS,
                picker.calendars
            );
        }

        if !has_date_token(&picker.format) {
            anyhow::bail!(
                "Invalid format '{}': expected at least one of MM, dd, yyyy, M, d, yy",
                picker.format
            );
        }

        if !(MIN_MOBILE_BREAKPOINT..=MAX_MOBILE_BREAKPOINT).contains(&picker.mobile_breakpoint) {
            anyhow::bail!(
                "mobile_breakpoint must be between {} and {} columns, got {}",
                MIN_MOBILE_BREAKPOINT,
                MAX_MOBILE_BREAKPOINT,
                picker.mobile_breakpoint
            );
        }

        if self.pick_form.max_confidence == 0 || self.pick_form.max_confidence > MAX_CONFIDENCE_LIMIT {
            anyhow::bail!(
                "max_confidence must be between 1 and {}, got {}",
                MAX_CONFIDENCE_LIMIT,
                self.pick_form.max_confidence
            );
        }

        if let Err(e) = log::LevelFilter::from_str(&self.logging.level) {
            anyhow::bail!("Invalid logging level '{}': {}", self.logging.level, e);
        }

        Ok(())
    }

    /// Theme selected by the `[ui]` section
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::new(self.ui.skin, self.ui.icon_theme)
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# pickem-ui configuration file\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        log::info!("Generated default configuration file: {}", path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join(APP_NAME))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
