use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Cell, Spot};
use crate::error::SaveError;

/// Everything a room's setup is persisted as.
/// Dimensions are in meters; `grid[y][x]` is row-major.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RoomLayout {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub grid: Vec<Vec<Cell>>,
    pub spots: Vec<Spot>,
}

impl RoomLayout {
    pub fn to_json(&self) -> Result<String, SaveError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SaveError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the pretty JSON payload to `path`
    pub fn export(&self, path: &Path) -> Result<(), SaveError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| SaveError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
