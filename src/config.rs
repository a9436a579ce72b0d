//! Configuration file handling
//!
//! Settings live in `<config dir>/tlctl/config.toml`. Every field has a
//! default, so a partial (or missing) file is valid. Command-line flags
//! override what the file says.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ControlError;
use crate::player::render::BarOptions;

/// Where the control bar is mounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Container {
    /// Take over the whole terminal (alternate screen)
    #[default]
    Fullscreen,
    /// Draw below the shell prompt without clearing the screen
    Inline,
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub timeline: TimelineConfig,
}

/// Control bar construction options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Rows left free below the bar
    pub bottom: u16,
    pub container: Container,
    /// Span the whole width instead of 80% with margins
    pub full_width: bool,
    /// Light palette (white bar, dark icons)
    pub light: bool,
    /// Initial playback rate (0.1, 0.5, 1 or 2)
    pub rate: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            bottom: 1,
            container: Container::Fullscreen,
            full_width: false,
            light: false,
            rate: 1.0,
        }
    }
}

impl PlayerConfig {
    pub fn bar_options(&self) -> BarOptions {
        BarOptions {
            bottom: self.bottom,
            full_width: self.full_width,
            light: self.light,
        }
    }
}

/// Simulated timeline settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Length of the timeline in seconds
    pub duration_secs: f64,
    /// Start paused instead of playing
    pub start_paused: bool,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            duration_secs: 10.0,
            start_paused: false,
        }
    }
}

impl Config {
    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf, ControlError> {
        let dir = dirs::config_dir().ok_or(ControlError::NoConfigDir)?;
        Ok(dir.join("tlctl").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self, ControlError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ControlError> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| ControlError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ControlError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ControlError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> Result<String, ControlError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
