//! Game settings and preferences
//!
//! Persisted as JSON next to the game. Missing fields take their defaults, so
//! older files keep loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::persistence::{read_json, write_json};
use crate::sim::{CameraMode, LapTimer};

/// Default settings file name, looked up in the working directory
pub const SETTINGS_FILE: &str = "tile-dash.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Map to load on startup
    pub map_path: PathBuf,
    /// Where best lap times are kept
    pub records_path: PathBuf,

    /// Camera follow behavior
    pub camera: CameraMode,

    // === HUD ===
    /// Show the running lap clock / last result
    pub show_timer: bool,
    /// Show the best lap
    pub show_best_time: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            map_path: PathBuf::from("assets/default.map"),
            records_path: PathBuf::from("tile-dash-records.json"),
            camera: CameraMode::Window,
            show_timer: true,
            show_best_time: true,
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults when the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        match read_json(path)? {
            Some(settings) => {
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        write_json(path, self)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// HUD lines to draw for a player's lap timer
    pub fn hud_lines(&self, time: &LapTimer, now: u64) -> Vec<String> {
        let mut lines = Vec::with_capacity(2);
        if self.show_timer {
            lines.extend(time.timer_text(now));
        }
        if self.show_best_time {
            lines.extend(time.best_text());
        }
        lines
    }
}
