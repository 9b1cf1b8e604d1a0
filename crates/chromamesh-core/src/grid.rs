//! Grid index bookkeeping: positions, flat indices and vertex classification.

use crate::error::{MeshError, MeshResult};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// The axis an edge vertex lies along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeAxis {
    /// First or last column.
    Vertical,
    /// First or last row.
    Horizontal,
}

/// Where a vertex sits in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GridLocation {
    /// One of the four corners.
    Corner,
    /// On an outer edge, excluding the corners.
    Edge(EdgeAxis),
    /// Anywhere inside the grid.
    #[default]
    Center,
}

impl GridLocation {
    pub fn is_corner(self) -> bool {
        self == GridLocation::Corner
    }

    pub fn is_edge(self) -> bool {
        matches!(self, GridLocation::Edge(_))
    }
}

/// Dimensions of a grid with at least two columns and two rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridIndex {
    pub(crate) columns: usize,
    pub(crate) rows: usize,
}

impl GridIndex {
    /// Create a grid index, rejecting grids smaller than 2x2.
    pub fn new(columns: usize, rows: usize) -> MeshResult<Self> {
        if columns <= 1 || rows <= 1 {
            return Err(MeshError::GridTooSmall { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of vertices in the grid.
    pub(crate) fn len(&self) -> usize {
        self.columns * self.rows
    }

    /// Whether `(row, column)` addresses a vertex of this grid.
    pub fn contains(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns
    }

    /// Evenly spaced position of a vertex in the unit square.
    pub fn position(&self, row: usize, column: usize) -> Point {
        Point::new(
            column as f64 / (self.columns - 1) as f64,
            row as f64 / (self.rows - 1) as f64,
        )
    }

    /// Row-major index of a vertex in flat storage.
    pub fn flat_index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// `(row, column)` of a row-major flat index.
    pub fn coordinates(&self, flat_index: usize) -> (usize, usize) {
        (flat_index / self.columns, flat_index % self.columns)
    }

    /// Classify a vertex. Corners take precedence over edges.
    pub fn location(&self, row: usize, column: usize) -> GridLocation {
        let column_extreme = column == 0 || column == self.columns - 1;
        let row_extreme = row == 0 || row == self.rows - 1;

        match (row_extreme, column_extreme) {
            (true, true) => GridLocation::Corner,
            (_, true) => GridLocation::Edge(EdgeAxis::Vertical),
            (true, _) => GridLocation::Edge(EdgeAxis::Horizontal),
            _ => GridLocation::Center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_small_grids() {
        assert_eq!(
            GridIndex::new(1, 3),
            Err(MeshError::GridTooSmall { columns: 1, rows: 3 })
        );
        assert!(GridIndex::new(3, 0).is_err());
        assert!(GridIndex::new(2, 2).is_ok());
    }

    #[test]
    fn test_corner_positions() {
        let index = GridIndex::new(4, 3).unwrap();
        assert_eq!(index.position(0, 0), Point::new(0.0, 0.0));
        assert_eq!(index.position(0, 3), Point::new(1.0, 0.0));
        assert_eq!(index.position(2, 0), Point::new(0.0, 1.0));
        assert_eq!(index.position(2, 3), Point::new(1.0, 1.0));
        assert_eq!(index.position(1, 2), Point::new(2.0 / 3.0, 0.5));
    }

    #[test]
    fn test_flat_index_roundtrip() {
        let index = GridIndex::new(5, 3).unwrap();
        assert_eq!(index.len(), 15);
        assert_eq!(index.flat_index(2, 1), 11);
        for flat in 0..index.len() {
            let (row, column) = index.coordinates(flat);
            assert_eq!(index.flat_index(row, column), flat);
        }
    }

    #[test]
    fn test_location_three_by_three() {
        let index = GridIndex::new(3, 3).unwrap();
        assert_eq!(index.location(0, 0), GridLocation::Corner);
        assert_eq!(index.location(0, 1), GridLocation::Edge(EdgeAxis::Horizontal));
        assert_eq!(index.location(1, 0), GridLocation::Edge(EdgeAxis::Vertical));
        assert_eq!(index.location(1, 1), GridLocation::Center);
        assert_eq!(index.location(2, 2), GridLocation::Corner);
        assert_eq!(index.location(1, 2), GridLocation::Edge(EdgeAxis::Vertical));
        assert_eq!(index.location(2, 1), GridLocation::Edge(EdgeAxis::Horizontal));
    }

    #[test]
    fn test_two_by_two_is_all_corners() {
        let index = GridIndex::new(2, 2).unwrap();
        for flat in 0..index.len() {
            let (row, column) = index.coordinates(flat);
            assert!(index.location(row, column).is_corner());
        }
    }
}
