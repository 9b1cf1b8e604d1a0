//! Aspect ratios the mesh canvas can be shown in.

use kurbo::Size;
use serde::{Deserialize, Serialize};

/// A labelled width-to-height ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub label: String,
    /// Width divided by height.
    pub value: f64,
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::square()
    }
}

impl AspectRatio {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn square() -> Self {
        Self::new("Square", 1.0)
    }

    pub fn sixteen_by_nine() -> Self {
        Self::new("16:9", 16.0 / 9.0)
    }

    /// Ratios offered to the user.
    pub fn all() -> Vec<Self> {
        vec![Self::square(), Self::sixteen_by_nine()]
    }

    /// Largest size with this ratio that fits inside `available`.
    pub fn fit(&self, available: Size) -> Size {
        if self.value <= 0.0 || available.is_zero_area() {
            return Size::ZERO;
        }
        let width = available.width.min(available.height * self.value);
        Size::new(width, width / self.value)
    }
}
