//! Editor settings loaded from `room_setup.toml`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "room_setup.toml";
pub const CONFIG_PATH_ENV: &str = "ROOM_SETUP_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub room_name: String,
    /// Initial room width in meters
    pub room_width_m: f64,
    /// Initial room depth in meters
    pub room_height_m: f64,
    /// Bounds and step for the size buttons
    pub min_room_m: f64,
    pub max_room_m: f64,
    pub room_step_m: f64,
    /// On-screen size of one cell
    pub cell_pixels: f32,
    pub history_limit: usize,
    /// Saved layouts are also written here when set
    pub export_path: Option<PathBuf>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            room_name: "Bedroom".to_string(),
            room_width_m: 4.0,
            room_height_m: 3.0,
            min_room_m: 1.0,
            max_room_m: 10.0,
            room_step_m: 0.1,
            cell_pixels: 20.0,
            history_limit: 100,
            export_path: None,
        }
    }
}

impl EditorConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the editor cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("room_width_m", self.room_width_m),
            ("room_height_m", self.room_height_m),
            ("min_room_m", self.min_room_m),
            ("max_room_m", self.max_room_m),
        ];
        if let Some(&(field, _)) = sizes.iter().find(|(_, m)| !m.is_finite() || *m < 0.0) {
            return Err(invalid(field, "must be a finite, non-negative length"));
        }
        if !self.room_step_m.is_finite() || self.room_step_m <= 0.0 {
            return Err(invalid("room_step_m", "must be finite and greater than 0"));
        }
        if self.min_room_m > self.max_room_m {
            return Err(invalid("min_room_m", "must not exceed max_room_m"));
        }
        if !self.cell_pixels.is_finite() || self.cell_pixels <= 0.0 {
            return Err(invalid("cell_pixels", "must be finite and greater than 0"));
        }
        Ok(())
    }

    /// Read a config file. A missing file is not an error and yields defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("no config at {:?}, using defaults", path);
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io { path: path.to_path_buf(), source }),
        }
    }

    /// Config path from `ROOM_SETUP_CONFIG`, else `room_setup.toml`
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load from the default path; any failure is logged and defaults are used
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        Self::load(&path).unwrap_or_else(|e| {
            log::error!("{}; using defaults", e);
            Self::default()
        })
    }

    /// Apply one size-button press, clamped to the configured bounds.
    /// Snaps to the step grid so repeated presses do not accumulate drift.
    pub fn step_room_size(&self, meters: f64, steps: i32) -> f64 {
        let stepped = meters + f64::from(steps) * self.room_step_m;
        let snapped = (stepped / self.room_step_m).round() * self.room_step_m;
        snapped.max(self.min_room_m).min(self.max_room_m)
    }
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}
