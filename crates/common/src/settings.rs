use crate::types::Steps;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from settings file operations.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Viewer configuration.
///
/// Every field defaults to the built-in constant, so a partial settings
/// file overrides only what it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Translation distance per event, in world units.
    pub translation_step: f32,
    /// Rotation angle per event, in degrees.
    pub rotation_step_degrees: f32,
    /// Uniform scale ratio per event.
    pub scale_ratio: f32,
    /// Initial window width in pixels.
    pub window_width: u32,
    /// Initial window height in pixels.
    pub window_height: u32,
    /// Background clear color, linear RGB.
    pub clear_color: [f32; 3],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            translation_step: 0.01,
            rotation_step_degrees: 1.0,
            scale_ratio: 1.01,
            window_width: 800,
            window_height: 800,
            clear_color: [0.2, 0.2, 0.2],
        }
    }
}

impl Settings {
    /// Step magnitudes derived from this configuration.
    pub fn steps(&self) -> Steps {
        Steps {
            translation: self.translation_step,
            rotation: self.rotation_step_degrees.to_radians(),
            scale: self.scale_ratio,
        }
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let file = std::fs::File::open(path)?;
        let settings: Self = serde_json::from_reader(file)?;
        Ok(settings)
    }

    /// Save settings to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
