//! ChromaMesh Core Library
//!
//! Platform-agnostic mesh gradient geometry and HSB color interpolation.
//! The renderer, gestures and widgets live in the host; this crate owns the
//! grid of colored vertices and every operation that reshapes it.

pub mod aspect;
pub mod color;
pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod grid;
pub mod interpolate;
pub mod mesh;
pub mod preset;
pub mod scheme;
pub mod vertex;
pub mod wheel;

pub use aspect::AspectRatio;
pub use color::{Hsb, Rgba8Color};
pub use config::{MeshConfiguration, MAX_GRID_SIZE, MIN_GRID_SIZE};
pub use error::{MeshError, MeshResult};
pub use generator::{MeshGenerator, SeedRule, aurora_seed, rainbow_seed};
pub use geometry::{VectorExt, clamp_unit, normalize_in_frame, point_from_polar, polar_from_point};
pub use grid::{EdgeAxis, GridIndex, GridLocation};
pub use interpolate::{Interpolate, blerp, lerp};
pub use mesh::{MeshGrid, MeshPayload, VertexLocks, constrain_drag};
pub use preset::{MeshPreset, PresetId};
pub use scheme::Scheme;
pub use vertex::MeshVertex;
pub use wheel::ColorWheel;
