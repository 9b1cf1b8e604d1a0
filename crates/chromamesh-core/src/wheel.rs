//! Geometry of the HSB color wheel.

use crate::color::Hsb;
use crate::geometry::{VectorExt, point_from_polar, polar_from_point};
use crate::scheme::Scheme;
use kurbo::{Point, Rect};

/// A hue/saturation disc inscribed in `bounds`.
///
/// Hue runs clockwise (in y-down view space) from the positive x axis and
/// saturation grows from 0 at the center to 1 on the rim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorWheel {
    pub bounds: Rect,
}

impl ColorWheel {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }

    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    pub fn radius(&self) -> f64 {
        self.bounds.width() / 2.0
    }

    /// Where the control point for `color` sits on the wheel.
    pub fn position_for(&self, color: &Hsb) -> Point {
        point_from_polar(color.absolute_hue(), color.saturation, self.bounds)
    }

    /// Pull a dragged point back onto the disc.
    pub fn constrain(&self, point: Point) -> Point {
        self.center() + (point - self.center()).limit(self.radius())
    }

    /// The color under a (possibly off-disc) point at the given brightness.
    pub fn color_at(&self, point: Point, brightness: f64) -> Hsb {
        let (hue, saturation) = polar_from_point(self.constrain(point), self.bounds);
        Hsb::new(hue, saturation.min(1.0), brightness)
    }

    /// Marker positions for the companion colors of `color` under `scheme`.
    pub fn harmony_positions(&self, scheme: Scheme, color: &Hsb) -> Vec<Point> {
        scheme
            .colors(color.hue, color.saturation, color.brightness)
            .iter()
            .map(|companion| self.position_for(companion))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel() -> ColorWheel {
        ColorWheel::new(Rect::new(0.0, 0.0, 200.0, 200.0))
    }

    fn assert_near(a: Point, b: Point) {
        assert!((a - b).length() < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn test_position_for() {
        let wheel = wheel();
        assert_near(wheel.position_for(&Hsb::new(0.0, 1.0, 1.0)), Point::new(200.0, 100.0));
        assert_near(wheel.position_for(&Hsb::new(-90.0, 0.5, 1.0)), Point::new(100.0, 50.0));
        assert_near(wheel.position_for(&Hsb::new(45.0, 0.0, 1.0)), wheel.center());
    }

    #[test]
    fn test_color_at_roundtrip() {
        let wheel = wheel();
        let color = Hsb::new(135.0, 0.75, 0.4);
        let picked = wheel.color_at(wheel.position_for(&color), 0.4);
        assert!((picked.hue - 135.0).abs() < 1e-9);
        assert!((picked.saturation - 0.75).abs() < 1e-9);
        assert_eq!(picked.brightness, 0.4);
    }

    #[test]
    fn test_color_at_outside_disc_is_fully_saturated() {
        let wheel = wheel();
        let picked = wheel.color_at(Point::new(500.0, 100.0), 1.0);
        assert!(picked.hue.abs() < 1e-9);
        assert!((picked.saturation - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_constrain() {
        let wheel = wheel();
        assert_near(wheel.constrain(Point::new(100.0, -300.0)), Point::new(100.0, 0.0));
        assert_near(wheel.constrain(Point::new(120.0, 110.0)), Point::new(120.0, 110.0));
    }

    #[test]
    fn test_harmony_positions() {
        let wheel = wheel();
        let base = Hsb::new(0.0, 1.0, 1.0);
        let positions = wheel.harmony_positions(Scheme::Complementary, &base);
        assert_eq!(positions.len(), 1);
        assert_near(positions[0], Point::new(0.0, 100.0));
        assert!(wheel.harmony_positions(Scheme::Monochromatic, &base).is_empty());
    }
}
