//! Vector helpers and coordinate conversions shared by the wheel and the mesh.

use kurbo::{Point, Rect, Size, Vec2};

/// Extra vector operations on top of kurbo's arithmetic.
pub trait VectorExt {
    /// Unit-length copy of the vector, or the vector itself when its length is zero.
    fn normalized(self) -> Self;

    /// Scale the vector down so its length does not exceed `maximum`.
    fn limit(self, maximum: f64) -> Self;
}

impl VectorExt for Vec2 {
    fn normalized(self) -> Self {
        let length = self.length();
        if length > 0.0 { self / length } else { self }
    }

    fn limit(self, maximum: f64) -> Self {
        if self.length() > maximum {
            self.normalized() * maximum
        } else {
            self
        }
    }
}

/// Clamp both components of a point to `[0, 1]`.
pub fn clamp_unit(point: Point) -> Point {
    Point::new(point.x.clamp(0.0, 1.0), point.y.clamp(0.0, 1.0))
}

/// Convert a view-space location into the unit square of a frame of the given size.
///
/// Degenerate frames map to the origin on the collapsed axis.
pub fn normalize_in_frame(location: Point, frame: Size) -> Point {
    let x = if frame.width > 0.0 { location.x / frame.width } else { 0.0 };
    let y = if frame.height > 0.0 { location.y / frame.height } else { 0.0 };
    clamp_unit(Point::new(x, y))
}

/// Cartesian point for a polar coordinate inside `rect`.
///
/// `radius` is a fraction of half the rect width, so `1.0` lands on the rim
/// of the inscribed circle.
pub fn point_from_polar(angle_degrees: f64, radius: f64, rect: Rect) -> Point {
    let scaled = rect.width() / 2.0 * radius;
    rect.center() + Vec2::from_angle(angle_degrees.to_radians()) * scaled
}

/// Polar coordinate `(angle in [0, 360), radius fraction)` of a point inside `rect`.
pub fn polar_from_point(point: Point, rect: Rect) -> (f64, f64) {
    let offset = point - rect.center();
    let angle = offset.atan2().to_degrees().rem_euclid(360.0);
    let half_width = rect.width() / 2.0;
    let radius = if half_width > 0.0 { offset.length() / half_width } else { 0.0 };
    (angle, radius)
}
