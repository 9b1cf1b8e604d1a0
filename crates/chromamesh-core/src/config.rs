//! Mesh configuration as chosen by the user.

use crate::aspect::AspectRatio;
use crate::error::{MeshError, MeshResult};
use crate::preset::PresetId;
use serde::{Deserialize, Serialize};

/// Fewest rows or columns the configuration surface offers.
pub const MIN_GRID_SIZE: usize = 2;

/// Most rows or columns the configuration surface offers.
pub const MAX_GRID_SIZE: usize = 6;

/// The settings a host passes when building a mesh.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfiguration {
    pub preset: PresetId,
    pub edges_locked: bool,
    pub corners_locked: bool,
    pub aspect_ratio: AspectRatio,
}

impl MeshConfiguration {
    /// Check the bounds the configuration surface promises.
    ///
    /// The mesh engine itself accepts any grid of at least 2x2; the upper
    /// bound only applies to user-sized grids.
    pub fn validate(&self) -> MeshResult<()> {
        if let PresetId::Custom { columns, rows } = self.preset {
            let range = MIN_GRID_SIZE..=MAX_GRID_SIZE;
            if !range.contains(&columns) || !range.contains(&rows) {
                return Err(MeshError::InvalidConfiguration(format!(
                    "custom grid {}x{} is outside {}..={}",
                    columns, rows, MIN_GRID_SIZE, MAX_GRID_SIZE
                )));
            }
        }
        if !(self.aspect_ratio.value.is_finite() && self.aspect_ratio.value > 0.0) {
            return Err(MeshError::InvalidConfiguration(format!(
                "aspect ratio {} must be positive",
                self.aspect_ratio.label
            )));
        }
        Ok(())
    }

    /// Parse a configuration from JSON and validate it.
    pub fn from_json(json: &str) -> MeshResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| MeshError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> MeshResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| MeshError::Serialization(e.to_string()))
    }
}
