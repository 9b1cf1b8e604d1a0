//! ChromaMesh Application
//!
//! A headless host for the mesh engine: loads a configuration, replays a
//! list of edits and emits the render payload a mesh gradient renderer
//! would consume.

mod app;
mod cli;
mod edit;

pub use app::{AppError, load_configuration, run};
pub use cli::Cli;
pub use edit::MeshEdit;
