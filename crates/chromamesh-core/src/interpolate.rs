//! Linear and bilinear interpolation.

use kurbo::Point;

/// Values that can be blended linearly and bilinearly.
///
/// `t`, `tx` and `ty` are not clamped: values outside `[0, 1]` extrapolate.
pub trait Interpolate: Sized {
    /// Blend `self` towards `other`: `self * (1 - t) + other * t`.
    fn lerp(&self, other: &Self, t: f64) -> Self;

    /// Blend four corner values with two independent axis fractions.
    ///
    /// `c1` is weighted by `(1 - tx)(1 - ty)`, `c2` by `tx(1 - ty)`,
    /// `c3` by `(1 - tx)ty` and `c4` by `tx·ty`.
    fn blerp(c1: &Self, c2: &Self, c3: &Self, c4: &Self, tx: f64, ty: f64) -> Self;
}

/// Linear interpolation between `a` and `b`.
pub fn lerp<T: Interpolate>(a: &T, b: &T, t: f64) -> T {
    a.lerp(b, t)
}

/// Bilinear interpolation between four corner values.
pub fn blerp<T: Interpolate>(c1: &T, c2: &T, c3: &T, c4: &T, tx: f64, ty: f64) -> T {
    T::blerp(c1, c2, c3, c4, tx, ty)
}

pub(crate) fn mix(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

pub(crate) fn bilinear(c1: f64, c2: f64, c3: f64, c4: f64, tx: f64, ty: f64) -> f64 {
    c1 * (1.0 - tx) * (1.0 - ty) + c2 * tx * (1.0 - ty) + c3 * (1.0 - tx) * ty + c4 * tx * ty
}

impl Interpolate for f64 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        mix(*self, *other, t)
    }

    fn blerp(c1: &Self, c2: &Self, c3: &Self, c4: &Self, tx: f64, ty: f64) -> Self {
        bilinear(*c1, *c2, *c3, *c4, tx, ty)
    }
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        let t = t as f32;
        *self * (1.0 - t) + *other * t
    }

    fn blerp(c1: &Self, c2: &Self, c3: &Self, c4: &Self, tx: f64, ty: f64) -> Self {
        let (tx, ty) = (tx as f32, ty as f32);
        *c1 * (1.0 - tx) * (1.0 - ty) + *c2 * tx * (1.0 - ty) + *c3 * (1.0 - tx) * ty + *c4 * tx * ty
    }
}

impl Interpolate for Point {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Point::new(mix(self.x, other.x, t), mix(self.y, other.y, t))
    }

    fn blerp(c1: &Self, c2: &Self, c3: &Self, c4: &Self, tx: f64, ty: f64) -> Self {
        Point::new(
            bilinear(c1.x, c2.x, c3.x, c4.x, tx, ty),
            bilinear(c1.y, c2.y, c3.y, c4.y, tx, ty),
        )
    }
}
