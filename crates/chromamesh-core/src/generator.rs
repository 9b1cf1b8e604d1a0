//! Initial vertex layouts for a mesh.

use crate::color::Hsb;
use crate::error::MeshResult;
use crate::geometry::VectorExt;
use crate::grid::GridIndex;
use crate::vertex::MeshVertex;
use kurbo::Point;

/// Computes the color of the vertex at `(row, column)` placed at `position`.
///
/// Seed rules are plain function pointers so a generator can never hold
/// mutable state between vertices.
pub type SeedRule = fn(row: usize, column: usize, position: Point) -> Hsb;

/// Center of the unit square.
const GRID_CENTER: Point = Point::new(0.5, 0.5);

/// Hue is derived from the angle around the grid center and saturation from
/// the distance to it. Brightness is always 1.
pub fn rainbow_seed(_row: usize, _column: usize, position: Point) -> Hsb {
    let offset = position - GRID_CENTER;
    let hue = offset.normalized().atan2().to_degrees().rem_euclid(360.0);
    Hsb::new(hue, offset.length(), 1.0)
}

/// Teal to violet across the grid, glowing brighter towards the bottom.
pub fn aurora_seed(_row: usize, _column: usize, position: Point) -> Hsb {
    let hue = 160.0 + 120.0 * position.x - 30.0 * position.y;
    let saturation = 0.5 + 0.4 * position.y;
    let brightness = 0.35 + 0.65 * position.y;
    Hsb::new(hue, saturation, brightness)
}

/// Builds the vertices of a grid from a seed rule.
#[derive(Debug, Clone, Copy)]
pub struct MeshGenerator {
    index: GridIndex,
    seed: SeedRule,
}

impl MeshGenerator {
    /// Create a generator. Fails for grids smaller than 2x2.
    pub fn new(columns: usize, rows: usize, seed: SeedRule) -> MeshResult<Self> {
        Ok(Self {
            index: GridIndex::new(columns, rows)?,
            seed,
        })
    }

    /// Grid colored by angle and distance from its center.
    pub fn rainbow(columns: usize, rows: usize) -> MeshResult<Self> {
        Self::new(columns, rows, rainbow_seed)
    }

    /// Generator for dimensions already known to be valid.
    pub(crate) fn from_index(index: GridIndex, seed: SeedRule) -> Self {
        Self { index, seed }
    }

    /// Fixed 4x3 aurora-like grid.
    pub fn aurora() -> Self {
        Self::from_index(GridIndex { columns: 4, rows: 3 }, aurora_seed)
    }

    /// User-sized grid, seeded like the rainbow.
    pub fn custom(columns: usize, rows: usize) -> MeshResult<Self> {
        Self::rainbow(columns, rows)
    }

    pub fn index(&self) -> GridIndex {
        self.index
    }

    pub fn columns(&self) -> usize {
        self.index.columns
    }

    pub fn rows(&self) -> usize {
        self.index.rows
    }

    /// Generate the vertices in row-major order.
    pub fn generate(&self) -> Vec<MeshVertex> {
        let index = self.index;
        (0..index.rows)
            .flat_map(|row| (0..index.columns).map(move |column| (row, column)))
            .map(|(row, column)| {
                let position = index.position(row, column);
                MeshVertex::new(position, (self.seed)(row, column, position))
                    .with_location(index.location(row, column))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use crate::grid::GridLocation;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_rejects_small_grids() {
        assert_eq!(
            MeshGenerator::rainbow(1, 4).unwrap_err(),
            MeshError::GridTooSmall { columns: 1, rows: 4 }
        );
        assert!(MeshGenerator::new(3, 1, aurora_seed).is_err());
    }

    #[test]
    fn test_shape_and_corners() {
        for columns in 2..=6 {
            for rows in 2..=6 {
                let generator = MeshGenerator::rainbow(columns, rows).unwrap();
                let vertices = generator.generate();
                assert_eq!(vertices.len(), columns * rows);

                let index = generator.index();
                assert_eq!(vertices[index.flat_index(0, 0)].position, Point::new(0.0, 0.0));
                assert_eq!(vertices[index.flat_index(0, columns - 1)].position, Point::new(1.0, 0.0));
                assert_eq!(vertices[index.flat_index(rows - 1, 0)].position, Point::new(0.0, 1.0));
                assert_eq!(
                    vertices[index.flat_index(rows - 1, columns - 1)].position,
                    Point::new(1.0, 1.0)
                );
            }
        }
    }

    #[test]
    fn test_two_by_two_rainbow() {
        let vertices = MeshGenerator::rainbow(2, 2).unwrap().generate();
        let hues: Vec<f64> = vertices.iter().map(|v| v.color.hue).collect();
        assert_close(hues[0], 225.0);
        assert_close(hues[1], 315.0);
        assert_close(hues[2], 135.0);
        assert_close(hues[3], 45.0);

        for vertex in &vertices {
            assert_close(vertex.color.saturation, 0.5_f64.sqrt());
            assert_close(vertex.color.brightness, 1.0);
            assert_eq!(vertex.location, GridLocation::Corner);
        }
    }

    #[test]
    fn test_rainbow_center_is_unsaturated() {
        let vertices = MeshGenerator::rainbow(3, 3).unwrap().generate();
        let center = vertices[4];
        assert_eq!(center.position, Point::new(0.5, 0.5));
        assert_close(center.color.saturation, 0.0);
        assert_eq!(center.location, GridLocation::Center);
    }

    #[test]
    fn test_aurora_dimensions() {
        let generator = MeshGenerator::aurora();
        assert_eq!((generator.columns(), generator.rows()), (4, 3));
        let vertices = generator.generate();
        assert_eq!(vertices.len(), 12);
        for vertex in &vertices {
            assert!((0.0..=1.0).contains(&vertex.color.saturation));
            assert!((0.0..=1.0).contains(&vertex.color.brightness));
        }
    }

    #[test]
    fn test_custom_seed_receives_indices() {
        fn by_index(row: usize, column: usize, _position: Point) -> Hsb {
            Hsb::new((row * 10 + column) as f64, 1.0, 1.0)
        }
        let vertices = MeshGenerator::new(3, 2, by_index).unwrap().generate();
        let hues: Vec<f64> = vertices.iter().map(|v| v.color.hue).collect();
        assert_eq!(hues, vec![0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
    }
}
