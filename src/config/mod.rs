// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[video]` - Player preferences (volume, mute, rate, quality, skip step)
//! - `[fullscreen]` - Fullscreen controls auto-hide settings
//! - `[catalog]` - Default catalog sort order
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()`/`save_with_override()`
//! 3. Set `COURSE_LENS_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use course_lens::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::catalog::SortBy;
use crate::domain::ui::OverlayTimeout;
use crate::domain::video::{PlaybackRate, SkipStep, VideoQuality, Volume};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Lesson player preferences.
///
/// These survive lesson switches and are seeded into every new player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoConfig {
    /// Playback volume (0.0 to 1.0).
    #[serde(default = "default_volume", skip_serializing_if = "Option::is_none")]
    pub volume: Option<f32>,

    /// Whether audio starts muted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,

    /// Playback rate; must be one of the speed menu presets.
    #[serde(
        default = "default_playback_rate",
        skip_serializing_if = "Option::is_none"
    )]
    pub playback_rate: Option<f64>,

    /// Skip distance for arrow keys and skip buttons (seconds).
    #[serde(
        default = "default_skip_step_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub skip_step_secs: Option<f64>,

    /// Preferred stream quality ("auto", "1080p", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            muted: Some(false),
            playback_rate: default_playback_rate(),
            skip_step_secs: default_skip_step_secs(),
            quality: None,
        }
    }
}

impl VideoConfig {
    /// Returns the configured volume, clamped to the valid range.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume.map(Volume::new).unwrap_or_default()
    }

    /// Returns the configured rate, falling back to normal speed when the
    /// stored value is not an allowed preset.
    #[must_use]
    pub fn playback_rate(&self) -> PlaybackRate {
        self.playback_rate
            .and_then(PlaybackRate::try_new)
            .unwrap_or_default()
    }

    /// Returns the configured skip step, clamped to the valid range.
    #[must_use]
    pub fn skip_step(&self) -> SkipStep {
        self.skip_step_secs.map(SkipStep::new).unwrap_or_default()
    }

    /// Returns the configured quality, or `auto` when unset or unknown.
    #[must_use]
    pub fn quality(&self) -> VideoQuality {
        self.quality
            .as_deref()
            .and_then(|q| q.parse().ok())
            .unwrap_or_default()
    }
}

/// Fullscreen controls settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FullscreenConfig {
    /// Auto-hide timeout for fullscreen controls (seconds).
    #[serde(
        default = "default_overlay_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub overlay_timeout_secs: Option<u32>,
}

impl Default for FullscreenConfig {
    fn default() -> Self {
        Self {
            overlay_timeout_secs: default_overlay_timeout_secs(),
        }
    }
}

impl FullscreenConfig {
    #[must_use]
    pub fn overlay_timeout(&self) -> OverlayTimeout {
        self.overlay_timeout_secs
            .map(OverlayTimeout::new)
            .unwrap_or_default()
    }
}

/// Catalog page settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogConfig {
    /// Default sort order ("popular", "rating", "price-low", "price-high", "newest").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl CatalogConfig {
    #[must_use]
    pub fn sort(&self) -> SortBy {
        self.sort
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub video: VideoConfig,

    #[serde(default)]
    pub fullscreen: FullscreenConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

fn default_volume() -> Option<f32> {
    Some(DEFAULT_VOLUME)
}

fn default_playback_rate() -> Option<f64> {
    Some(DEFAULT_PLAYBACK_RATE)
}

fn default_skip_step_secs() -> Option<f64> {
    Some(DEFAULT_SKIP_STEP_SECS)
}

fn default_overlay_timeout_secs() -> Option<u32> {
    Some(DEFAULT_OVERLAY_TIMEOUT_SECS)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file or its parent directory cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration into a custom directory.
///
/// # Errors
///
/// Returns an error if the file or its parent directory cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match get_config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config(
            "could not determine config directory".to_string(),
        )),
    }
}

/// Saves configuration to a specific path, creating parent directories.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            video: VideoConfig {
                volume: Some(0.4),
                muted: Some(true),
                playback_rate: Some(1.5),
                skip_step_secs: Some(5.0),
                quality: Some("720p".to_string()),
            },
            fullscreen: FullscreenConfig {
                overlay_timeout_secs: Some(7),
            },
            catalog: CatalogConfig {
                sort: Some("rating".to_string()),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
        assert_eq!(loaded.video.quality(), VideoQuality::P720);
        assert_eq!(loaded.catalog.sort(), SortBy::Rating);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        fs::write(base_dir.join("settings.toml"), "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(
            warning.as_deref(),
            Some("notification-config-load-error")
        );
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_with_override_creates_file_in_directory() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().join("deep").join("path");

        save_with_override(&Config::default(), Some(base_dir.clone()))
            .expect("save should create directories");
        assert!(base_dir.join("settings.toml").exists());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("write file");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.video, VideoConfig::default());
        assert_eq!(loaded.fullscreen.overlay_timeout().value(), DEFAULT_OVERLAY_TIMEOUT_SECS);
    }

    #[test]
    fn invalid_playback_rate_falls_back_to_normal_speed() {
        let video = VideoConfig {
            playback_rate: Some(3.0),
            ..VideoConfig::default()
        };
        assert_abs_diff_eq!(video.playback_rate().value(), DEFAULT_PLAYBACK_RATE);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let video = VideoConfig {
            volume: Some(4.0),
            skip_step_secs: Some(0.0),
            ..VideoConfig::default()
        };
        assert_abs_diff_eq!(video.volume().value(), MAX_VOLUME);
        assert_abs_diff_eq!(video.skip_step().value(), MIN_SKIP_STEP_SECS);

        let fullscreen = FullscreenConfig {
            overlay_timeout_secs: Some(500),
        };
        assert_eq!(fullscreen.overlay_timeout().value(), MAX_OVERLAY_TIMEOUT_SECS);
    }

    #[test]
    fn unknown_quality_and_sort_fall_back_to_defaults() {
        let video = VideoConfig {
            quality: Some("8k".to_string()),
            ..VideoConfig::default()
        };
        assert_eq!(video.quality(), VideoQuality::Auto);

        let catalog = CatalogConfig {
            sort: Some("alphabetical".to_string()),
        };
        assert_eq!(catalog.sort(), SortBy::Popular);
    }
}
