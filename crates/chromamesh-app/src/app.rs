//! Command-line host: configuration loading and edit replay.

use crate::cli::Cli;
use chromamesh_core::{MeshConfiguration, MeshError, MeshGrid};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),
    #[error("IO error: {0}")]
    Io(String),
}

/// Read and validate a configuration file.
pub fn load_configuration(path: &Path) -> Result<MeshConfiguration, AppError> {
    let json = fs::read_to_string(path)
        .map_err(|e| AppError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    Ok(MeshConfiguration::from_json(&json)?)
}

/// Build the configured mesh, replay the edits and return its render payload as JSON.
pub fn run(cli: &Cli) -> Result<String, AppError> {
    let config = match &cli.config {
        Some(path) => load_configuration(path)?,
        None => MeshConfiguration::default(),
    };
    log::info!("Building {:?} mesh", config.preset);

    let mut grid = MeshGrid::from_configuration(&config)?;
    for edit in &cli.edits {
        if !edit.apply(&mut grid)? {
            log::info!("Edit {:?} left the mesh unchanged", edit);
        }
    }

    serde_json::to_string_pretty(&grid.payload())
        .map_err(|e| AppError::Mesh(MeshError::Serialization(e.to_string())))
}
