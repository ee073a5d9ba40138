use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::breathing::{self, MAX_CYCLE_SECS, MIN_CYCLE_SECS};
use crate::brush;
use crate::error::{SettingsError, SettingsResult};
use crate::game::DEFAULT_GAME_SECS;

/// Environment variable naming an optional JSON settings file
pub const SETTINGS_ENV: &str = "MINDFUL_SETTINGS";

/// Startup settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing fields take their default values
pub struct Settings {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub default_brush_width: f32,
    pub default_breath_seconds: f64,
    pub game_seconds: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Mindfulness".to_owned(),
            window_size: [420.0, 780.0],
            default_brush_width: brush::DEFAULT_WIDTH,
            default_breath_seconds: breathing::DEFAULT_CYCLE_SECS,
            game_seconds: DEFAULT_GAME_SECS,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> SettingsResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from [`SETTINGS_ENV`] if it is set, otherwise use defaults
    pub fn from_env() -> SettingsResult<Self> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Check ranges. The brush width is clamped rather than rejected.
    pub fn validate(&mut self) -> SettingsResult<()> {
        if !self.default_brush_width.is_finite() {
            return Err(SettingsError::Invalid(
                "default_brush_width must be a number".to_owned(),
            ));
        }
        self.default_brush_width = brush::clamp_width(self.default_brush_width);

        if !(MIN_CYCLE_SECS..=MAX_CYCLE_SECS).contains(&self.default_breath_seconds) {
            return Err(SettingsError::Invalid(format!(
                "default_breath_seconds must be between {MIN_CYCLE_SECS} and {MAX_CYCLE_SECS}, got {}",
                self.default_breath_seconds
            )));
        }

        if self.game_seconds == 0 {
            return Err(SettingsError::Invalid(
                "game_seconds must be greater than zero".to_owned(),
            ));
        }

        if self.window_size.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(SettingsError::Invalid(format!(
                "window_size must be positive, got {:?}",
                self.window_size
            )));
        }

        Ok(())
    }
}
