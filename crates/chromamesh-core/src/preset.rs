//! Named mesh configurations.

use crate::error::MeshResult;
use crate::generator::{MeshGenerator, rainbow_seed};
use crate::grid::GridIndex;
use serde::{Deserialize, Serialize};

/// Identifies a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PresetId {
    #[default]
    Rainbow,
    Aurora,
    /// User-sized grid.
    Custom { columns: usize, rows: usize },
}

/// A generator paired with a label, used to rebuild a grid from scratch.
#[derive(Debug, Clone, Copy)]
pub struct MeshPreset {
    pub id: PresetId,
    pub label: &'static str,
    pub generator: MeshGenerator,
}

impl PartialEq for MeshPreset {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MeshPreset {}

impl MeshPreset {
    /// 5x5 rainbow.
    pub fn rainbow() -> Self {
        Self {
            id: PresetId::Rainbow,
            label: "Rainbow",
            generator: MeshGenerator::from_index(GridIndex { columns: 5, rows: 5 }, rainbow_seed),
        }
    }

    pub fn aurora() -> Self {
        Self {
            id: PresetId::Aurora,
            label: "Aurora",
            generator: MeshGenerator::aurora(),
        }
    }

    /// A custom preset with the given dimensions.
    pub fn custom(columns: usize, rows: usize) -> MeshResult<Self> {
        Ok(Self {
            id: PresetId::Custom { columns, rows },
            label: "Custom",
            generator: MeshGenerator::custom(columns, rows)?,
        })
    }

    /// Build the preset for an identifier.
    pub fn from_id(id: PresetId) -> MeshResult<Self> {
        match id {
            PresetId::Rainbow => Ok(Self::rainbow()),
            PresetId::Aurora => Ok(Self::aurora()),
            PresetId::Custom { columns, rows } => Self::custom(columns, rows),
        }
    }

    /// The presets offered to the user, with a 3x3 custom grid.
    pub fn all() -> Vec<Self> {
        vec![
            Self::rainbow(),
            Self::aurora(),
            Self {
                id: PresetId::Custom { columns: 3, rows: 3 },
                label: "Custom",
                generator: MeshGenerator::from_index(GridIndex { columns: 3, rows: 3 }, rainbow_seed),
            },
        ]
    }

    pub fn columns(&self) -> usize {
        self.generator.columns()
    }

    pub fn rows(&self) -> usize {
        self.generator.rows()
    }
}
