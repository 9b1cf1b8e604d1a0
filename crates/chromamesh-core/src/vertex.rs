//! Mesh vertex: a normalized position paired with a color.

use crate::color::Hsb;
use crate::grid::GridLocation;
use crate::interpolate::Interpolate;
use kurbo::Point;
use peniko::Color;
use serde::{Deserialize, Serialize};

/// A control point of the mesh gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshVertex {
    /// Position with components in `[0, 1]`.
    pub position: Point,
    pub color: Hsb,
    /// Classification within the owning grid.
    pub location: GridLocation,
}

impl MeshVertex {
    /// Create a vertex classified as [`GridLocation::Center`].
    pub fn new(position: Point, color: Hsb) -> Self {
        Self {
            position,
            color,
            location: GridLocation::Center,
        }
    }

    pub fn with_location(mut self, location: GridLocation) -> Self {
        self.location = location;
        self
    }

    /// Position as the single-precision pair a renderer consumes.
    pub fn point_f32(&self) -> [f32; 2] {
        [self.position.x as f32, self.position.y as f32]
    }

    pub fn display_color(&self) -> Color {
        self.color.to_color()
    }
}

impl Interpolate for MeshVertex {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        MeshVertex::new(
            Interpolate::lerp(&self.position, &other.position, t),
            self.color.lerp(&other.color, t),
        )
    }

    /// Position and color are blended with the same weights. The result is
    /// unclassified until a grid places it.
    fn blerp(c1: &Self, c2: &Self, c3: &Self, c4: &Self, tx: f64, ty: f64) -> Self {
        let position = Point::blerp(&c1.position, &c2.position, &c3.position, &c4.position, tx, ty);
        let color = Hsb::blerp(&c1.color, &c2.color, &c3.color, &c4.color, tx, ty);
        MeshVertex::new(position, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::EdgeAxis;
    use crate::interpolate::blerp;

    #[test]
    fn test_new_vertex_is_center() {
        let vertex = MeshVertex::new(Point::new(0.5, 0.5), Hsb::WHITE);
        assert_eq!(vertex.location, GridLocation::Center);

        let edge = vertex.with_location(GridLocation::Edge(EdgeAxis::Vertical));
        assert!(edge.location.is_edge());
    }

    #[test]
    fn test_blerp_blends_position_and_color() {
        let a = MeshVertex::new(Point::new(0.0, 0.0), Hsb::new(0.0, 0.0, 1.0))
            .with_location(GridLocation::Corner);
        let b = MeshVertex::new(Point::new(1.0, 0.0), Hsb::new(60.0, 1.0, 1.0))
            .with_location(GridLocation::Corner);

        let mid = blerp(&a, &b, &a, &b, 0.5, 0.5);
        assert_eq!(mid.position, Point::new(0.5, 0.0));
        assert!((mid.color.hue - 30.0).abs() < 1e-12);
        assert!((mid.color.saturation - 0.5).abs() < 1e-12);
        assert_eq!(mid.location, GridLocation::Center);
    }

    #[test]
    fn test_point_f32() {
        let vertex = MeshVertex::new(Point::new(0.25, 1.0), Hsb::WHITE);
        assert_eq!(vertex.point_f32(), [0.25, 1.0]);
    }
}
