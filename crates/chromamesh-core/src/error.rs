//! Error types for mesh operations.

use thiserror::Error;

/// Errors raised when a caller breaks a precondition of the mesh engine.
///
/// Requests that are legitimately reachable from the UI (removing a row from
/// a minimum-size grid, for instance) are not errors: those operations return
/// `false` and leave the grid untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    #[error("Grid must have at least 2 columns and 2 rows, got {columns}x{rows}")]
    GridTooSmall { columns: usize, rows: usize },
    #[error("Cannot insert at index {index}: it must fall between two of the {len} existing lines")]
    InsertionOutOfRange { index: usize, len: usize },
    #[error("Column {index} cannot be removed from a grid of {columns} columns")]
    ColumnNotRemovable { index: usize, columns: usize },
    #[error("No vertex at row {row}, column {column}")]
    VertexOutOfRange { row: usize, column: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
